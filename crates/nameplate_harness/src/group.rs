//! Test groups: fixture registration and hook ordering.

use std::sync::Arc;

use nameplate_decor::DebugMode;
use nameplate_foundation::{Raw, Result};
use nameplate_registry::{FixtureRegistry, Scope};

use crate::hooks::Hook;
use crate::host::{HostVersion, Integration};
use crate::instance::TestInstance;

/// A test group: the registry host and hook registrar.
///
/// Groups are cheap to clone. A nested group created with [`child`]
/// shares structure with its parent through persistent collections and
/// inherits every definition and hook registered before the split; it
/// may shadow freely without affecting the parent.
///
/// [`child`]: TestGroup::child
#[derive(Clone, Debug)]
pub struct TestGroup {
    name: Arc<str>,
    integration: Integration,
    mode: DebugMode,
    registry: FixtureRegistry,
    hooks: im::Vector<Hook>,
}

impl TestGroup {
    /// Creates a root group bound to the modern integration strategy,
    /// with the debug-augmentation mode resolved from the environment.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self::with_integration(name, Integration::Modern, DebugMode::from_env())
    }

    /// Creates a root group for a specific host version.
    ///
    /// # Errors
    ///
    /// Fails loudly when the host version has no known integration
    /// strategy.
    pub fn for_host(name: &str, version: HostVersion) -> Result<Self> {
        Ok(Self::with_integration(
            name,
            Integration::select(version)?,
            DebugMode::from_env(),
        ))
    }

    fn with_integration(name: &str, integration: Integration, mode: DebugMode) -> Self {
        Self {
            name: name.into(),
            integration,
            mode,
            registry: FixtureRegistry::new(),
            hooks: im::Vector::new(),
        }
    }

    /// Overrides the debug-augmentation mode.
    ///
    /// Decorators for instances of this group are built from the
    /// overridden mode instead of the environment.
    #[must_use]
    pub fn with_debug_mode(mut self, mode: DebugMode) -> Self {
        self.mode = mode;
        self
    }

    /// The group's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The integration strategy this group tree was bound to.
    #[must_use]
    pub fn integration(&self) -> Integration {
        self.integration
    }

    /// The debug-augmentation mode instances of this group use.
    #[must_use]
    pub fn debug_mode(&self) -> DebugMode {
        self.mode
    }

    /// The group's fixture definitions.
    #[must_use]
    pub fn registry(&self) -> &FixtureRegistry {
        &self.registry
    }

    /// The group's before-each hooks, in registration order.
    #[must_use]
    pub fn hooks(&self) -> &im::Vector<Hook> {
        &self.hooks
    }

    /// Registers a memoized, label-decorated fixture accessor.
    ///
    /// The accessor is inherited by nested groups. Redefining a name
    /// shadows the previous definition: the last registration wins. No
    /// evaluation happens at definition time.
    pub fn define_lazy<F, R>(&mut self, name: &str, label: Option<&str>, init: F)
    where
        F: Fn(&mut dyn Scope) -> R + 'static,
        R: Into<Raw>,
    {
        self.registry.define(name, label, init);
    }

    /// Like [`define_lazy`], plus a before-each hook forcing evaluation
    /// for every test in this group and its descendants.
    ///
    /// The initializer's side effects run exactly once per test, before
    /// the test body, even when the fixture is never referenced by name.
    ///
    /// [`define_lazy`]: TestGroup::define_lazy
    pub fn define_eager<F, R>(&mut self, name: &str, label: Option<&str>, init: F)
    where
        F: Fn(&mut dyn Scope) -> R + 'static,
        R: Into<Raw>,
    {
        self.define_lazy(name, label, init);
        self.hooks.push_back(Hook::eager(name));
    }

    /// Registers a before-each callback, after all previously registered
    /// hooks.
    pub fn before(&mut self, name: &str, run: impl Fn(&mut TestInstance) -> Result<()> + 'static) {
        self.hooks.push_back(Hook::user(name, run));
    }

    /// Creates a nested group inheriting this group's definitions and
    /// hooks.
    #[must_use]
    pub fn child(&self, name: &str) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    /// Runs one test: fresh instance, hooks in registration order, then
    /// the body.
    ///
    /// # Errors
    ///
    /// Propagates hook errors (which abort the run before the body) and
    /// the body's own error.
    pub fn run<B, T>(&self, test_name: &str, body: B) -> Result<T>
    where
        B: FnOnce(&mut TestInstance) -> Result<T>,
    {
        let mut instance = TestInstance::new(self, test_name);
        for hook in &self.hooks {
            hook.fire(&mut instance)?;
        }
        body(&mut instance)
    }
}
