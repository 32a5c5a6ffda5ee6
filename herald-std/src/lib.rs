//! # herald-std
//!
//! Standard implementations for the Herald event dispatcher.
//!
//! This crate provides:
//! - **Dispatcher**: [`EventDispatcher`], the priority-ordered listener registry
//! - **Resolution**: [`Callback`], [`Container`] and [`ResolvingInvoker`]
//! - **Invoker decorators**: Logging, Tracing
//! - **Testing**: [`testing::CallLog`], [`testing::FailingInvoker`]
//!
//! [`EventDispatcher`]: dispatcher::EventDispatcher
//! [`Callback`]: resolve::Callback
//! [`Container`]: resolve::Container
//! [`ResolvingInvoker`]: resolve::ResolvingInvoker

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core types
pub use herald_core;

// Modules
pub mod dispatcher;
pub mod invokers;
pub mod resolve;
pub mod testing;
