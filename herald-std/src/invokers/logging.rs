//! Logging invoker for listener observation.

use herald_core::{InvokeError, Invoker, Parameters, Propagation};

/// An invoker wrapper that logs each invocation and its outcome.
///
/// Logging goes through `tracing` when the `tracing` feature is enabled;
/// otherwise the wrapper is a pass-through.
///
/// # Example
///
/// ```rust,ignore
/// let invoker = LoggingInvoker::named(ResolvingInvoker::new(), "billing");
/// let dispatcher = EventDispatcher::new(invoker);
/// ```
#[derive(Debug, Clone)]
pub struct LoggingInvoker<I> {
    inner: I,
    name: &'static str,
}

impl<I> LoggingInvoker<I> {
    /// Wrap `inner` with the default name.
    pub fn new(inner: I) -> Self {
        Self::named(inner, "listener")
    }

    /// Wrap `inner`; `name` identifies this invoker in log messages.
    pub fn named(inner: I, name: &'static str) -> Self {
        Self { inner, name }
    }

    /// The wrapped invoker.
    pub fn inner(&self) -> &I {
        &self.inner
    }
}

impl<I: Invoker> Invoker for LoggingInvoker<I> {
    type Listener = I::Listener;

    fn invoke(
        &self,
        listener: &Self::Listener,
        parameters: &Parameters,
    ) -> Result<Propagation, InvokeError> {
        #[cfg(feature = "tracing")]
        tracing::debug!(name = %self.name, ?parameters, "Invoking listener");

        let result = self.inner.invoke(listener, parameters);

        #[cfg(feature = "tracing")]
        {
            match &result {
                Ok(propagation) => {
                    tracing::debug!(name = %self.name, ?propagation, "Listener returned")
                }
                Err(err) => tracing::warn!(name = %self.name, error = %err, "Listener failed"),
            }
        }

        #[cfg(not(feature = "tracing"))]
        let _ = self.name;

        result
    }
}
