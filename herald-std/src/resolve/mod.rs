//! Parameter-resolving invocation.
//!
//! This module provides the standard [`Invoker`](herald_core::Invoker):
//! listeners are [`Callback`]s that declare the parameters they need, and
//! [`ResolvingInvoker`] fills them from the dispatch parameters or from a
//! [`Container`] of shared values.

pub mod callback;
pub mod container;
pub mod invoker;

pub use callback::{Callback, ParameterSpec};
pub use container::Container;
pub use invoker::ResolvingInvoker;
