//! Dynamic fixture slot values.

use std::fmt;
use std::sync::Arc;

use crate::report::Report;

/// The value held by an evaluated fixture slot.
///
/// Cloning is O(1); clones share the same underlying allocation, so every
/// access to an evaluated slot observes the identical stored reference.
#[derive(Clone)]
pub enum FixtureValue {
    /// Absent result. Never decorated; renders as `nil`.
    Nil,
    /// An evaluated, decorated value.
    Value(Arc<dyn Report>),
}

impl FixtureValue {
    /// Creates the nil value.
    #[must_use]
    pub const fn nil() -> Self {
        Self::Nil
    }

    /// Wraps a reported value into a shared slot value.
    #[must_use]
    pub fn of<T: Report>(value: T) -> Self {
        Self::Value(Arc::new(value))
    }

    /// Returns true if this value is nil.
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// A view of the stored value's reporting operations.
    #[must_use]
    pub fn as_report(&self) -> Option<&dyn Report> {
        match self {
            Self::Nil => None,
            Self::Value(value) => Some(value.as_ref()),
        }
    }

    /// Attempts a typed view of the exact stored type.
    ///
    /// Decorated slots store a wrapper type; see the decoration layer for
    /// helpers that see through it to the wrapped value.
    #[must_use]
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.as_report()?.as_any().downcast_ref::<T>()
    }

    /// True when both handles share the same stored allocation.
    #[must_use]
    pub fn shares_allocation(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Value(a), Self::Value(b)) => {
                std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
            }
            (Self::Nil, Self::Nil) => true,
            _ => false,
        }
    }
}

impl fmt::Display for FixtureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => f.write_str("nil"),
            Self::Value(value) => value.plain(f),
        }
    }
}

impl fmt::Debug for FixtureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => f.write_str("nil"),
            Self::Value(value) => value.diagnostic(f),
        }
    }
}

/// Raw output of a fixture initializer, before decoration.
///
/// The memoization layer routes `Value` through the decorator exactly
/// once; `Nil` is stored as [`FixtureValue::Nil`] untouched.
pub enum Raw {
    /// Absent result; explicit pass-through, not an error.
    Nil,
    /// A value awaiting decoration.
    Value(Box<dyn Report>),
}

impl Raw {
    /// Creates the nil result.
    #[must_use]
    pub const fn nil() -> Self {
        Self::Nil
    }

    /// Wraps a reported value.
    #[must_use]
    pub fn of<T: Report>(value: T) -> Self {
        Self::Value(Box::new(value))
    }

    /// Maps `None` to nil and `Some` to a wrapped value.
    #[must_use]
    pub fn from_option<T: Report>(value: Option<T>) -> Self {
        value.map_or(Self::Nil, Self::of)
    }

    /// Returns true if this result is nil.
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }
}

impl<T: Report> From<T> for Raw {
    fn from(value: T) -> Self {
        Self::of(value)
    }
}

impl fmt::Debug for Raw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => f.write_str("Raw::Nil"),
            Self::Value(value) => {
                f.write_str("Raw::Value(")?;
                value.diagnostic(f)?;
                f.write_str(")")
            }
        }
    }
}
