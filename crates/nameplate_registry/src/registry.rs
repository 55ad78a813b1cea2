//! The per-group fixture registry and its evaluation driver.

use std::sync::Arc;

use nameplate_foundation::{Error, FixtureValue, Raw, Result};

use crate::context::{InstanceState, Scope};
use crate::definition::{FixtureDefinition, Initializer};

/// Per-group store of fixture definitions.
///
/// Backed by a persistent map, so group snapshots and nested-group
/// inheritance are O(1) structurally shared clones. Redefining a name
/// shadows the previous definition: the last registration wins, with no
/// uniqueness error, matching the host framework's native lazy-fixture
/// semantics.
#[derive(Clone, Debug, Default)]
pub struct FixtureRegistry {
    definitions: im::HashMap<Arc<str>, FixtureDefinition>,
}

impl FixtureRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers or shadows a fixture definition.
    ///
    /// No evaluation happens at definition time.
    pub fn define<F, R>(&mut self, name: &str, label: Option<&str>, init: F)
    where
        F: Fn(&mut dyn Scope) -> R + 'static,
        R: Into<Raw>,
    {
        self.insert(FixtureDefinition::new(name, label, Initializer::new(init)));
    }

    /// Inserts a prebuilt definition, shadowing any previous one.
    pub fn insert(&mut self, definition: FixtureDefinition) {
        self.definitions
            .insert(Arc::from(definition.name()), definition);
    }

    /// Looks up a definition by name.
    #[must_use]
    pub fn definition(&self, name: &str) -> Option<&FixtureDefinition> {
        self.definitions.get(name)
    }

    /// True when a definition exists under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    /// Iterates the defined fixture names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.definitions.keys().map(|name| &**name)
    }

    /// Number of definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// True when no fixture is defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

/// Drives the lazy-fixture contract for one access.
///
/// 1. An evaluated slot returns its stored value (the identical shared
///    reference on every later access).
/// 2. Otherwise the initializer runs in the instance's scope; it may
///    resolve other fixtures re-entrantly.
/// 3. Non-nil output is routed through the decorator with the
///    definition's label; nil is stored as-is.
/// 4. The slot transitions to evaluated and the value is returned.
///
/// # Errors
///
/// Fails when no fixture is defined under `name`. Initializer panics
/// propagate unmodified.
pub fn get_or_compute<S: InstanceState>(state: &mut S, name: &str) -> Result<FixtureValue> {
    if let Some(value) = state.slots().lookup(name) {
        return Ok(value);
    }

    let definition = state
        .registry()
        .definition(name)
        .cloned()
        .ok_or_else(|| Error::unknown_fixture(name))?;

    let raw = definition.initializer().invoke(state);
    let value = state.decorator().apply(raw, definition.label());
    state.slots_mut().store(definition.name(), value.clone());
    Ok(value)
}
