//! Testing utilities for Herald.
//!
//! This module provides fixtures that make dispatch order and propagation
//! easy to assert on.
//!
//! # Features
//!
//! - [`CallLog`]: A shared recorder that hands out labelled [`Callback`]s
//! - [`FailingInvoker`]: An invoker that never resolves anything

use crate::resolve::Callback;
use herald_core::{InvokeError, Invoker, Parameters, Propagation};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

// ============================================================================
// Call Log
// ============================================================================

/// Records the labels of listeners as they run.
///
/// # Example
///
/// ```rust,ignore
/// let log = CallLog::new();
/// dispatcher.add_listener("e", log.listener("a"));
/// dispatcher.add_listener_with_priority("e", log.listener("b"), 1)?;
///
/// dispatcher.dispatch("e")?;
/// assert_eq!(log.entries(), vec!["a", "b"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    entries: Arc<Mutex<Vec<String>>>,
}

impl CallLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// A listener that records `label` and continues propagation.
    pub fn listener(&self, label: impl Into<String>) -> Callback {
        self.recording(label.into(), Propagation::Continue)
    }

    /// A listener that records `label` and stops propagation.
    pub fn stopping_listener(&self, label: impl Into<String>) -> Callback {
        self.recording(label.into(), Propagation::Stop)
    }

    fn recording(&self, label: String, propagation: Propagation) -> Callback {
        let log = self.clone();
        Callback::new(move |_: &Parameters| {
            log.record(label.clone());
            propagation
        })
    }

    /// Append a label manually.
    pub fn record(&self, label: impl Into<String>) {
        self.lock().push(label.into());
    }

    /// A copy of the recorded labels.
    pub fn entries(&self) -> Vec<String> {
        self.lock().clone()
    }

    /// Number of recorded labels.
    pub fn count(&self) -> usize {
        self.lock().len()
    }

    /// Clear all recorded labels.
    pub fn clear(&self) {
        self.lock().clear();
    }
}

// ============================================================================
// Failing Invoker
// ============================================================================

/// An invoker whose every invocation fails with
/// [`InvokeError::UnresolvedParameter`].
///
/// Useful for checking that dispatch surfaces invocation errors.
#[derive(Debug, Clone)]
pub struct FailingInvoker {
    parameter: String,
}

impl FailingInvoker {
    /// Fail every invocation on `parameter`.
    pub fn new(parameter: impl Into<String>) -> Self {
        Self {
            parameter: parameter.into(),
        }
    }
}

impl Default for FailingInvoker {
    fn default() -> Self {
        Self::new("unresolvable")
    }
}

impl Invoker for FailingInvoker {
    type Listener = Callback;

    fn invoke(
        &self,
        _listener: &Callback,
        _parameters: &Parameters,
    ) -> Result<Propagation, InvokeError> {
        Err(InvokeError::unresolved(self.parameter.clone()))
    }
}
