//! # herald - In-Process Event Dispatcher
//!
//! `herald` maps named events to priority-ordered listeners and invokes them
//! on demand. Each listener's arguments are resolved by an [`Invoker`]; the
//! standard [`ResolvingInvoker`] matches declared parameter names against the
//! dispatch payload, extra parameters and a shared [`Container`].
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use herald::prelude::*;
//!
//! let dispatcher = EventDispatcher::new(ResolvingInvoker::new());
//!
//! let audit = Callback::try_new(|args: &Parameters| {
//!     let order = args.require::<Order>("event")?;
//!     println!("order {} placed", order.id);
//!     Ok::<_, InvokeError>(())
//! })
//! .requires("event");
//!
//! dispatcher.add_listener_with_priority("order.placed", audit.clone(), 10)?;
//! dispatcher.dispatch_payload("order.placed", Order { id: 7 })?;
//! dispatcher.remove_listener("order.placed", &audit);
//! ```
//!
//! ## Ordering
//!
//! Lower priorities run first; listeners sharing a priority run in
//! registration order. A listener returning `false` (or
//! [`Propagation::Stop`]) halts the dispatch.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use herald_core::{
    // Error types
    BoxError,
    HeraldError,
    InvalidPriority,
    InvokeError,
    // Priority
    IntoPriority,
    Priority,
    // Propagation
    IntoPropagation,
    Propagation,
    // Invocation
    Invoker,
    Parameters,
    Value,
};

// Dispatcher
pub use herald_std::dispatcher::{
    EVENT_NAME_PARAMETER, EVENT_PARAMETER, EventContext, EventDispatcher, ListenerMap,
    PriorityTable,
};

// Resolution
pub use herald_std::resolve::{Callback, Container, ParameterSpec, ResolvingInvoker};

/// Invoker decorators.
pub mod invokers {
    pub use herald_std::invokers::{LoggingInvoker, TracingInvoker};
}

/// Testing utilities.
pub mod testing {
    pub use herald_std::testing::{CallLog, FailingInvoker};
}

/// Prelude module - common imports for Herald.
///
/// # Usage
///
/// ```rust,ignore
/// use herald::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Callback, Container, EventContext, EventDispatcher, HeraldError, IntoPriority,
        InvalidPriority, InvokeError, Invoker, Parameters, Priority, Propagation,
        ResolvingInvoker,
    };
}
