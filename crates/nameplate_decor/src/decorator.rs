//! Decoration of raw fixture output.

use nameplate_foundation::{FixtureValue, Label, Raw, Report, render_diagnostic, render_plain};

use crate::labeled::{CapturedIdentity, Labeled};
use crate::mode::DebugMode;

/// The concrete stored type of a decorated slot value.
pub type StoredLabeled = Labeled<Box<dyn Report>>;

/// Applies identity decoration to raw fixture output.
///
/// The debug-augmentation mode is injected once at construction and read
/// from this immutable field on every call.
#[derive(Copy, Clone, Debug, Default)]
pub struct Decorator {
    mode: DebugMode,
}

impl Decorator {
    /// Creates a decorator with an explicit mode.
    #[must_use]
    pub const fn new(mode: DebugMode) -> Self {
        Self { mode }
    }

    /// Creates a decorator with the mode resolved from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(DebugMode::from_env())
    }

    /// The injected debug-augmentation mode.
    #[must_use]
    pub const fn mode(&self) -> DebugMode {
        self.mode
    }

    /// Captures the original conversions when augmentation is active.
    ///
    /// The two operations are captured independently; a conversion that
    /// errors is swallowed and its segment omitted. Instrumentation must
    /// never fail a test that would otherwise pass.
    fn capture(&self, value: &dyn Report) -> Option<CapturedIdentity> {
        if !self.mode.is_augmented() {
            return None;
        }
        Some(CapturedIdentity {
            plain: render_plain(value).ok(),
            diagnostic: render_diagnostic(value).ok(),
        })
    }

    /// Rewrites `value`'s textual identity to `label`.
    #[must_use]
    pub fn decorate<T: Report>(&self, value: T, label: &Label) -> Labeled<T> {
        match self.capture(&value) {
            Some(original) => Labeled::with_original(value, label.clone(), original),
            None => Labeled::new(value, label.clone()),
        }
    }

    /// Decorates an already type-erased value.
    #[must_use]
    pub fn decorate_erased(&self, value: Box<dyn Report>, label: &Label) -> StoredLabeled {
        match self.capture(value.as_ref()) {
            Some(original) => Labeled::with_original(value, label.clone(), original),
            None => Labeled::new(value, label.clone()),
        }
    }

    /// Routes raw initializer output into a slot value.
    ///
    /// Nil passes through untouched; values are wrapped exactly once.
    #[must_use]
    pub fn apply(&self, raw: Raw, label: &Label) -> FixtureValue {
        match raw {
            Raw::Nil => FixtureValue::Nil,
            Raw::Value(value) => FixtureValue::of(self.decorate_erased(value, label)),
        }
    }
}

/// A view of the decoration wrapper stored in a slot value.
///
/// Returns `None` for nil slots and for values that were not stored
/// through a [`Decorator`].
#[must_use]
pub fn labeled_ref(value: &FixtureValue) -> Option<&StoredLabeled> {
    value.as_report()?.as_any().downcast_ref::<StoredLabeled>()
}

/// A typed view through the decoration to the wrapped value.
#[must_use]
pub fn inner_ref<T: 'static>(value: &FixtureValue) -> Option<&T> {
    labeled_ref(value)?.get().as_ref().as_any().downcast_ref::<T>()
}
