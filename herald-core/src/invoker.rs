//! # Invocation Capability (Invoker)
//!
//! The dispatcher never calls a listener directly. It hands the listener and a
//! set of candidate [`Parameters`] to an [`Invoker`], which resolves the
//! listener's arguments and runs it.
//!
//! # Responsibilities
//!
//! 1. **Resolution**: Match the listener's declared parameters against the
//!    candidates (and any other source the invoker knows about).
//! 2. **Execution**: Run the listener with the resolved arguments.
//! 3. **Normalisation**: Report the outcome as a [`Propagation`].
//!
//! The listener type is owned by the invoker, so the dispatcher stays agnostic
//! of how callables are represented. It only requires that listeners can be
//! cloned into snapshots and compared for removal.

use crate::{error::InvokeError, parameters::Parameters, propagation::Propagation};
use std::sync::Arc;

/// Resolves a listener's parameters and invokes it.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an `Invoker`",
    label = "missing `Invoker` implementation",
    note = "Invokers must implement `invoke` for their `Listener` type."
)]
pub trait Invoker: Send + Sync {
    /// The callable type this invoker runs.
    ///
    /// Equality is the listener identity used for removal.
    type Listener: Clone + PartialEq + Send + Sync + 'static;

    /// Invoke `listener`, resolving its arguments from `parameters`.
    ///
    /// Fails with [`InvokeError::UnresolvedParameter`] when a required
    /// parameter is not present and cannot be resolved otherwise.
    fn invoke(
        &self,
        listener: &Self::Listener,
        parameters: &Parameters,
    ) -> Result<Propagation, InvokeError>;
}

impl<I: Invoker + ?Sized> Invoker for &I {
    type Listener = I::Listener;

    fn invoke(
        &self,
        listener: &Self::Listener,
        parameters: &Parameters,
    ) -> Result<Propagation, InvokeError> {
        (**self).invoke(listener, parameters)
    }
}

impl<I: Invoker + ?Sized> Invoker for Arc<I> {
    type Listener = I::Listener;

    fn invoke(
        &self,
        listener: &Self::Listener,
        parameters: &Parameters,
    ) -> Result<Propagation, InvokeError> {
        (**self).invoke(listener, parameters)
    }
}

impl<I: Invoker + ?Sized> Invoker for Box<I> {
    type Listener = I::Listener;

    fn invoke(
        &self,
        listener: &Self::Listener,
        parameters: &Parameters,
    ) -> Result<Propagation, InvokeError> {
        (**self).invoke(listener, parameters)
    }
}
