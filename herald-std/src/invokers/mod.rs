//! Invoker decorators.
//!
//! These wrap another [`Invoker`](herald_core::Invoker) and add observation
//! around every listener call without changing its outcome.

pub mod logging;
pub mod tracing;

pub use logging::LoggingInvoker;
pub use self::tracing::TracingInvoker;
