//! Per-test-instance memoization slots.

use std::collections::HashMap;
use std::sync::Arc;

use nameplate_foundation::FixtureValue;

/// The memoization slots of one test instance.
///
/// A slot is unevaluated while absent and evaluated once stored; the
/// transition happens at most once per instance. Slots reset only when
/// the next instance is created with a fresh store.
#[derive(Debug, Default)]
pub struct MemoStore {
    slots: HashMap<Arc<str>, FixtureValue>,
}

impl MemoStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored value, sharing the original allocation.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<FixtureValue> {
        self.slots.get(name).cloned()
    }

    /// True when the slot has transitioned to evaluated.
    #[must_use]
    pub fn is_evaluated(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    /// Stores an evaluated value.
    ///
    /// Decoration is applied before storing and never reapplied; storing
    /// into an already evaluated slot is a logic error.
    pub fn store(&mut self, name: impl Into<Arc<str>>, value: FixtureValue) {
        let name = name.into();
        debug_assert!(
            !self.slots.contains_key(&name),
            "slot evaluated twice: {name}"
        );
        self.slots.insert(name, value);
    }

    /// Number of evaluated slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when no slot has been evaluated yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
