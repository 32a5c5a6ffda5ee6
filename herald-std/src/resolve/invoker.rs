//! The standard resolving invoker.

use super::{Callback, Container};
use herald_core::{InvokeError, Invoker, Parameters, Propagation};
use std::sync::Arc;

/// Invokes [`Callback`]s, resolving each declared parameter from the
/// dispatch parameters first and the [`Container`] second.
///
/// A required parameter found in neither fails with
/// [`InvokeError::UnresolvedParameter`]; an optional one is simply left out.
#[derive(Debug, Clone, Default)]
pub struct ResolvingInvoker {
    container: Container,
}

impl ResolvingInvoker {
    /// Create an invoker with an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an invoker backed by `container`.
    pub fn with_container(container: Container) -> Self {
        Self { container }
    }

    /// The fallback container.
    pub fn container(&self) -> &Container {
        &self.container
    }

    fn resolve(
        &self,
        listener: &Callback,
        parameters: &Parameters,
    ) -> Result<Parameters, InvokeError> {
        let mut args = Parameters::new();
        for spec in listener.parameters() {
            let value = parameters
                .get_shared(spec.name())
                .or_else(|| self.container.get_shared(spec.name()));
            match value {
                Some(value) => args.insert_shared(spec.name(), Arc::clone(value)),
                None if spec.is_required() => return Err(InvokeError::unresolved(spec.name())),
                None => {}
            }
        }
        Ok(args)
    }
}

impl Invoker for ResolvingInvoker {
    type Listener = Callback;

    fn invoke(
        &self,
        listener: &Callback,
        parameters: &Parameters,
    ) -> Result<Propagation, InvokeError> {
        let args = self.resolve(listener, parameters)?;
        // Resolution errors raised inside the callback keep their kind.
        listener
            .call(&args)
            .map_err(|err| match err.downcast::<InvokeError>() {
                Ok(invoke) => *invoke,
                Err(other) => InvokeError::Listener(other),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_explicit_parameters_win_over_container() {
        let seen = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&seen);
        let cb = Callback::new(move |args: &Parameters| {
            *sink.lock().unwrap() = args.get::<&str>("who").copied();
        })
        .requires("who");

        let invoker = ResolvingInvoker::with_container(Container::new().with("who", "container"));

        invoker.invoke(&cb, &Parameters::new()).unwrap();
        assert_eq!(*seen.lock().unwrap(), Some("container"));

        invoker
            .invoke(&cb, &Parameters::new().with("who", "explicit"))
            .unwrap();
        assert_eq!(*seen.lock().unwrap(), Some("explicit"));
    }

    #[test]
    fn test_missing_required_parameter() {
        let cb = Callback::new(|_: &Parameters| ()).requires("event");
        let err = ResolvingInvoker::new()
            .invoke(&cb, &Parameters::new())
            .unwrap_err();
        assert!(matches!(
            err,
            InvokeError::UnresolvedParameter { ref parameter } if parameter == "event"
        ));
    }

    #[test]
    fn test_only_declared_parameters_are_passed() {
        let cb = Callback::new(|args: &Parameters| {
            assert_eq!(args.names().collect::<Vec<_>>(), vec!["a"]);
        })
        .requires("a")
        .optional("missing");

        let params = Parameters::new().with("a", 1u8).with("b", 2u8);
        ResolvingInvoker::new().invoke(&cb, &params).unwrap();
    }

    #[test]
    fn test_callback_errors() {
        let typed = Callback::try_new(|args: &Parameters| {
            args.require::<u64>("n")?;
            Ok::<_, InvokeError>(())
        })
        .optional("n");
        let err = ResolvingInvoker::new()
            .invoke(&typed, &Parameters::new())
            .unwrap_err();
        assert!(err.is_unresolved());

        let failing = Callback::try_new(|_: &Parameters| Err::<(), _>("boom"));
        let err = ResolvingInvoker::new()
            .invoke(&failing, &Parameters::new())
            .unwrap_err();
        assert!(matches!(err, InvokeError::Listener(_)));
    }
}
