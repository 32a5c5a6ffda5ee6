//! Propagation control.
//!
//! A listener's return value decides whether dispatch moves on to the next
//! listener. [`IntoPropagation`] maps ordinary return values onto
//! [`Propagation`], with boolean `false` acting as the stop sentinel.

/// Whether dispatch continues after a listener returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Propagation {
    /// Continue to the next listener.
    #[default]
    Continue,
    /// Halt dispatch; remaining listeners are skipped.
    Stop,
}

impl Propagation {
    /// Returns `true` for [`Propagation::Stop`].
    pub fn is_stop(self) -> bool {
        self == Propagation::Stop
    }
}

/// Trait for converting a listener's return value into a [`Propagation`].
///
/// # Default Implementations
///
/// - `()` → Continue
/// - `bool` → `false` = Stop, `true` = Continue
/// - `Propagation` → As is
/// - `Option<T>` → `None` = Continue, otherwise delegates to `T`
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be returned from a listener",
    label = "missing `IntoPropagation` implementation",
    note = "Listeners return `()`, `bool` (`false` stops propagation) or `Propagation`."
)]
pub trait IntoPropagation {
    /// Convert the value into propagation behavior.
    fn into_propagation(self) -> Propagation;
}

impl IntoPropagation for () {
    fn into_propagation(self) -> Propagation {
        Propagation::Continue
    }
}

impl IntoPropagation for bool {
    fn into_propagation(self) -> Propagation {
        if self {
            Propagation::Continue
        } else {
            Propagation::Stop
        }
    }
}

impl IntoPropagation for Propagation {
    fn into_propagation(self) -> Propagation {
        self
    }
}

impl<T: IntoPropagation> IntoPropagation for Option<T> {
    fn into_propagation(self) -> Propagation {
        match self {
            Some(t) => t.into_propagation(),
            None => Propagation::Continue,
        }
    }
}
