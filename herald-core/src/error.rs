//! Error types for Herald.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`HeraldError`] - Top-level error type for all Herald operations
//! - [`InvalidPriority`] - A priority that is not a non-negative integer
//! - [`InvokeError`] - Errors raised while invoking a listener

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all Herald operations.
///
/// Lets a caller use `?` across add and dispatch calls in one function.
#[derive(Error, Debug)]
pub enum HeraldError {
    /// A listener was registered with an invalid priority.
    #[error(transparent)]
    InvalidPriority(#[from] InvalidPriority),

    /// A listener could not be invoked during dispatch.
    #[error("invoke error: {0}")]
    Invoke(#[from] InvokeError),
}

/// A priority was not a non-negative integer.
///
/// Raised only when adding listeners; removal and read operations never
/// produce it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid priority `{value}`: priority must be a non-negative integer")]
pub struct InvalidPriority {
    value: String,
}

impl InvalidPriority {
    /// Create a new error for the rejected value.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// The rejected value, rendered as text.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Errors that can occur while an [`Invoker`](crate::Invoker) runs a listener.
#[derive(Error, Debug)]
pub enum InvokeError {
    /// The listener requires a parameter that is neither supplied nor resolvable.
    #[error("unresolved parameter `{parameter}`")]
    UnresolvedParameter {
        /// Name of the missing parameter.
        parameter: String,
    },

    /// A parameter is present but holds a value of another type.
    #[error("parameter `{parameter}` is not of type `{expected}`")]
    ParameterType {
        /// Name of the parameter.
        parameter: String,
        /// Type name the listener asked for.
        expected: &'static str,
    },

    /// The listener itself failed.
    #[error("listener error")]
    Listener(#[source] BoxError),
}

impl InvokeError {
    /// Shorthand for [`InvokeError::UnresolvedParameter`].
    pub fn unresolved(parameter: impl Into<String>) -> Self {
        InvokeError::UnresolvedParameter {
            parameter: parameter.into(),
        }
    }

    /// Returns `true` if this error reports an unresolved parameter.
    pub fn is_unresolved(&self) -> bool {
        matches!(self, InvokeError::UnresolvedParameter { .. })
    }
}

impl From<BoxError> for InvokeError {
    fn from(err: BoxError) -> Self {
        InvokeError::Listener(err)
    }
}
