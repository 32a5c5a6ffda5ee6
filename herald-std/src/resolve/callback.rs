//! Callback listeners.

use herald_core::{BoxError, IntoPropagation, Parameters, Propagation};
use std::{
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

type CallbackFn = dyn Fn(&Parameters) -> Result<Propagation, BoxError> + Send + Sync;

/// A declared callback parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterSpec {
    name: String,
    required: bool,
}

impl ParameterSpec {
    /// The parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether invocation fails when the parameter cannot be resolved.
    pub fn is_required(&self) -> bool {
        self.required
    }
}

/// A shareable listener function with declared parameters.
///
/// The function receives only the parameters it declared, already resolved.
/// Clones share the function and compare equal; independently constructed
/// callbacks never do, even if built from the same closure code.
///
/// # Example
///
/// ```rust,ignore
/// let greet = Callback::try_new(|args: &Parameters| {
///     let name = args.require::<String>("event")?;
///     println!("hello {name}");
///     Ok::<_, InvokeError>(())
/// })
/// .requires("event");
/// ```
#[derive(Clone)]
pub struct Callback {
    func: Arc<CallbackFn>,
    parameters: Vec<ParameterSpec>,
}

impl Callback {
    /// Wrap an infallible function.
    pub fn new<F, R>(func: F) -> Self
    where
        F: Fn(&Parameters) -> R + Send + Sync + 'static,
        R: IntoPropagation,
    {
        Self {
            func: Arc::new(move |args: &Parameters| -> Result<Propagation, BoxError> {
                Ok(func(args).into_propagation())
            }),
            parameters: Vec::new(),
        }
    }

    /// Wrap a fallible function; its error fails the dispatch.
    pub fn try_new<F, R, E>(func: F) -> Self
    where
        F: Fn(&Parameters) -> Result<R, E> + Send + Sync + 'static,
        R: IntoPropagation,
        E: Into<BoxError>,
    {
        Self {
            func: Arc::new(move |args: &Parameters| -> Result<Propagation, BoxError> {
                func(args).map(IntoPropagation::into_propagation).map_err(Into::into)
            }),
            parameters: Vec::new(),
        }
    }

    /// Declare a required parameter.
    pub fn requires(self, name: impl Into<String>) -> Self {
        self.declare(name.into(), true)
    }

    /// Declare an optional parameter.
    pub fn optional(self, name: impl Into<String>) -> Self {
        self.declare(name.into(), false)
    }

    fn declare(mut self, name: String, required: bool) -> Self {
        match self.parameters.iter_mut().find(|p| p.name == name) {
            Some(spec) => spec.required = required,
            None => self.parameters.push(ParameterSpec { name, required }),
        }
        self
    }

    /// The declared parameters, in declaration order.
    pub fn parameters(&self) -> &[ParameterSpec] {
        &self.parameters
    }

    /// Run the function with already resolved arguments.
    pub fn call(&self, args: &Parameters) -> Result<Propagation, BoxError> {
        (self.func)(args)
    }

    fn addr(&self) -> *const () {
        Arc::as_ptr(&self.func) as *const ()
    }
}

impl PartialEq for Callback {
    fn eq(&self, other: &Self) -> bool {
        self.addr() == other.addr()
    }
}

impl Eq for Callback {}

impl Hash for Callback {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr().hash(state);
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("addr", &self.addr())
            .field("parameters", &self.parameters)
            .finish()
    }
}
