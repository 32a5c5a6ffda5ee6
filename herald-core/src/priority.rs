//! Listener priorities.
//!
//! A [`Priority`] is a non-negative integer; lower values run first.
//! Untrusted input goes through [`IntoPriority`], which is where the
//! non-negative-integer rule is enforced.

use crate::error::InvalidPriority;
use std::fmt;

/// Invocation priority of a listener. Lower runs first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority(u64);

impl Priority {
    /// The default priority, `0`.
    pub const DEFAULT: Priority = Priority(0);

    /// Create a priority from an already non-negative value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// The numeric value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u64> for Priority {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl PartialEq<u64> for Priority {
    fn eq(&self, other: &u64) -> bool {
        self.0 == *other
    }
}

/// Conversion of a candidate value into a validated [`Priority`].
///
/// # Rules
///
/// - Signed integers: negative values are rejected
/// - Unsigned integers: accepted if they fit in `u64`
/// - Floats: always rejected, even integral ones like `1.0`
/// - Strings: always rejected, even numeric ones like `"3"`
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a listener priority",
    label = "not convertible to `Priority`",
    note = "Priorities are non-negative integers; use an integer type or `Priority`."
)]
pub trait IntoPriority {
    /// Validate and convert.
    fn into_priority(self) -> Result<Priority, InvalidPriority>;
}

impl IntoPriority for Priority {
    fn into_priority(self) -> Result<Priority, InvalidPriority> {
        Ok(self)
    }
}

impl IntoPriority for &Priority {
    fn into_priority(self) -> Result<Priority, InvalidPriority> {
        Ok(*self)
    }
}

macro_rules! impl_into_priority_int {
    ($($t:ty),*) => {
        $(
            impl IntoPriority for $t {
                fn into_priority(self) -> Result<Priority, InvalidPriority> {
                    u64::try_from(self)
                        .map(Priority)
                        .map_err(|_| InvalidPriority::new(self.to_string()))
                }
            }
        )*
    };
}

impl_into_priority_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl IntoPriority for f32 {
    fn into_priority(self) -> Result<Priority, InvalidPriority> {
        Err(InvalidPriority::new(self.to_string()))
    }
}

impl IntoPriority for f64 {
    fn into_priority(self) -> Result<Priority, InvalidPriority> {
        Err(InvalidPriority::new(self.to_string()))
    }
}

impl IntoPriority for &str {
    fn into_priority(self) -> Result<Priority, InvalidPriority> {
        Err(InvalidPriority::new(self))
    }
}

impl IntoPriority for String {
    fn into_priority(self) -> Result<Priority, InvalidPriority> {
        Err(InvalidPriority::new(self))
    }
}

impl IntoPriority for &String {
    fn into_priority(self) -> Result<Priority, InvalidPriority> {
        Err(InvalidPriority::new(self.as_str()))
    }
}
