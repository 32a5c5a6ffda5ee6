//! # herald-core
//!
//! Core types for the Herald event dispatcher.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! code that supplies its own [`Invoker`] without pulling in the standard
//! dispatcher from `herald-std`.
//!
//! # Vocabulary
//!
//! - [`Priority`] - Non-negative listener priority; lower runs first
//! - [`Parameters`] - Named candidate values for argument resolution
//! - [`Propagation`] - Continue or stop after a listener returns
//! - [`Invoker`] - The capability that resolves arguments and runs a listener
//!
//! # Error Types
//!
//! - [`HeraldError`] - Top-level error type
//! - [`InvalidPriority`] - Rejected priority on registration
//! - [`InvokeError`] - Listener invocation errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod invoker;
mod parameters;
mod priority;
mod propagation;

// Re-exports
pub use error::{BoxError, HeraldError, InvalidPriority, InvokeError};
pub use invoker::Invoker;
pub use parameters::{Parameters, Value};
pub use priority::{IntoPriority, Priority};
pub use propagation::{IntoPropagation, Propagation};
