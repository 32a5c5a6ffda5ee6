//! Shared values available to every invocation.

use herald_core::{Parameters, Value};
use std::any::Any;

/// Named values a [`ResolvingInvoker`] falls back to when a parameter was
/// not supplied with the dispatch.
///
/// Typical entries are long-lived services (a logger, a connection pool)
/// that many listeners declare but no producer wants to pass explicitly.
///
/// [`ResolvingInvoker`]: super::ResolvingInvoker
#[derive(Debug, Clone, Default)]
pub struct Container {
    values: Parameters,
}

impl Container {
    /// Create an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value (builder style).
    pub fn with<T: Any + Send + Sync>(mut self, name: impl Into<String>, value: T) -> Self {
        self.values.insert(name, value);
        self
    }

    /// Add or replace a value.
    pub fn insert<T: Any + Send + Sync>(&mut self, name: impl Into<String>, value: T) {
        self.values.insert(name, value);
    }

    /// Get a typed reference to a value.
    pub fn get<T: Any>(&self, name: &str) -> Option<&T> {
        self.values.get(name)
    }

    /// Get the shared value behind a name.
    pub fn get_shared(&self, name: &str) -> Option<&Value> {
        self.values.get_shared(name)
    }

    /// Check whether a value is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains(name)
    }
}
