//! Named invocation parameters.
//!
//! [`Parameters`] is the bag of candidate values an [`Invoker`] draws on when
//! it resolves a listener's arguments. Values are type-erased and shared, so a
//! snapshot of the parameters is cheap to clone per dispatch.
//!
//! [`Invoker`]: crate::Invoker

use crate::error::InvokeError;
use std::{any::Any, fmt, sync::Arc};

/// A shared, type-erased parameter value.
pub type Value = Arc<dyn Any + Send + Sync>;

/// Ordered set of named parameter values.
///
/// Names are unique; inserting an existing name replaces the value in place.
#[derive(Clone, Default)]
pub struct Parameters {
    entries: Vec<(String, Value)>,
}

impl Parameters {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a value (builder style).
    pub fn with<T: Any + Send + Sync>(mut self, name: impl Into<String>, value: T) -> Self {
        self.insert(name, value);
        self
    }

    /// Add or replace a value.
    pub fn insert<T: Any + Send + Sync>(&mut self, name: impl Into<String>, value: T) {
        self.insert_shared(name, Arc::new(value));
    }

    /// Add or replace an already shared value.
    pub fn insert_shared(&mut self, name: impl Into<String>, value: Value) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Check whether a parameter is present.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// Get a typed reference to a parameter, if present with that type.
    pub fn get<T: Any>(&self, name: &str) -> Option<&T> {
        self.get_shared(name)?.downcast_ref::<T>()
    }

    /// Get a typed reference, failing if the parameter is missing or mistyped.
    pub fn require<T: Any>(&self, name: &str) -> Result<&T, InvokeError> {
        let value = self
            .get_shared(name)
            .ok_or_else(|| InvokeError::unresolved(name))?;
        value
            .downcast_ref::<T>()
            .ok_or_else(|| InvokeError::ParameterType {
                parameter: name.to_string(),
                expected: std::any::type_name::<T>(),
            })
    }

    /// Get the shared value behind a parameter.
    pub fn get_shared(&self, name: &str) -> Option<&Value> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Remove a parameter, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        let index = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(index).1)
    }

    /// Merge `other` into `self`; values from `other` win.
    pub fn extend(&mut self, other: Parameters) {
        for (name, value) in other.entries {
            self.insert_shared(name, value);
        }
    }

    /// Parameter names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Parameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parameters")
            .field("names", &self.names().collect::<Vec<_>>())
            .finish()
    }
}
