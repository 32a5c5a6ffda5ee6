//! Span instrumentation for listener invocations.

use herald_core::{InvokeError, Invoker, Parameters, Propagation};

/// An invoker wrapper that runs every invocation inside a `tracing` span.
///
/// Without the `tracing` feature the wrapper is a no-op.
pub struct TracingInvoker<I> {
    inner: I,
    name: &'static str,
}

impl<I> TracingInvoker<I> {
    /// Create a new `TracingInvoker` around an invoker.
    pub const fn new(inner: I, name: &'static str) -> Self {
        Self { inner, name }
    }
}

impl<I: Clone> Clone for TracingInvoker<I> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            name: self.name,
        }
    }
}

impl<I: Invoker> Invoker for TracingInvoker<I> {
    type Listener = I::Listener;

    #[cfg(feature = "tracing")]
    fn invoke(
        &self,
        listener: &Self::Listener,
        parameters: &Parameters,
    ) -> Result<Propagation, InvokeError> {
        let span = tracing::info_span!(
            "listener_invoke",
            invoker = %self.name,
            parameters = parameters.len()
        );
        let _entered = span.enter();
        self.inner.invoke(listener, parameters)
    }

    #[cfg(not(feature = "tracing"))]
    fn invoke(
        &self,
        listener: &Self::Listener,
        parameters: &Parameters,
    ) -> Result<Propagation, InvokeError> {
        self.inner.invoke(listener, parameters)
    }
}
