//! Per-test evaluation state.

use std::sync::Arc;

use nameplate_decor::Decorator;
use nameplate_foundation::{FixtureValue, Result};
use nameplate_registry::{FixtureRegistry, InstanceState, MemoStore, Scope, get_or_compute};

use crate::group::TestGroup;

/// One test's evaluation state: fresh memoization slots, a snapshot of
/// the group's definitions, and the decorator.
///
/// Instances are independent; slots reset only by building the next
/// instance. Within an instance, the first access to a fixture evaluates
/// and decorates it, and every later access returns the already-decorated
/// value by reference.
pub struct TestInstance {
    test_name: Arc<str>,
    handle_visible: bool,
    registry: FixtureRegistry,
    decorator: Decorator,
    slots: MemoStore,
}

impl TestInstance {
    /// Builds a fresh instance for one test in a group.
    #[must_use]
    pub fn new(group: &TestGroup, test_name: &str) -> Self {
        Self {
            test_name: test_name.into(),
            handle_visible: group.integration().passes_instance_handle(),
            registry: group.registry().clone(),
            decorator: Decorator::new(group.debug_mode()),
            slots: MemoStore::new(),
        }
    }

    /// Resolves a fixture by name: lazy, memoized, decorated.
    ///
    /// # Errors
    ///
    /// Fails when no fixture is defined under `name`.
    pub fn fixture(&mut self, name: &str) -> Result<FixtureValue> {
        get_or_compute(self, name)
    }

    /// The test this instance was built for.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.test_name
    }

    /// True when the named slot has been evaluated in this instance.
    #[must_use]
    pub fn is_evaluated(&self, name: &str) -> bool {
        self.slots.is_evaluated(name)
    }

    /// Number of evaluated slots.
    #[must_use]
    pub fn evaluated_count(&self) -> usize {
        self.slots.len()
    }
}

impl Scope for TestInstance {
    fn fixture(&mut self, name: &str) -> Result<FixtureValue> {
        TestInstance::fixture(self, name)
    }

    fn test_name(&self) -> Option<&str> {
        if self.handle_visible {
            Some(&self.test_name)
        } else {
            None
        }
    }
}

impl InstanceState for TestInstance {
    fn registry(&self) -> &FixtureRegistry {
        &self.registry
    }

    fn slots(&self) -> &MemoStore {
        &self.slots
    }

    fn slots_mut(&mut self) -> &mut MemoStore {
        &mut self.slots
    }

    fn decorator(&self) -> &Decorator {
        &self.decorator
    }
}
