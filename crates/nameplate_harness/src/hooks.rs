//! Before-each hooks.

use std::fmt;
use std::sync::Arc;

use nameplate_foundation::Result;

use crate::instance::TestInstance;

/// What registered a hook.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HookKind {
    /// Registered directly through `before`.
    User,
    /// Registered by an eager fixture definition.
    EagerFixture,
}

/// A before-each callback.
///
/// Hooks run ahead of the test body, in registration order, after every
/// previously registered hook. Cheap to clone; the callback is shared
/// across group clones.
#[derive(Clone)]
pub struct Hook {
    kind: HookKind,
    name: Arc<str>,
    run: Arc<dyn Fn(&mut TestInstance) -> Result<()>>,
}

impl Hook {
    /// Creates a user hook.
    #[must_use]
    pub fn user(name: &str, run: impl Fn(&mut TestInstance) -> Result<()> + 'static) -> Self {
        Self {
            kind: HookKind::User,
            name: name.into(),
            run: Arc::new(run),
        }
    }

    /// Creates a hook that forces an eager fixture's evaluation.
    ///
    /// Forcing runs the full accessor chain, so the fixture's side
    /// effects happen even when no test body references it by name.
    #[must_use]
    pub fn eager(fixture: &str) -> Self {
        let name: Arc<str> = fixture.into();
        let target = name.clone();
        Self {
            kind: HookKind::EagerFixture,
            name,
            run: Arc::new(move |instance| instance.fixture(&target).map(|_| ())),
        }
    }

    /// What registered this hook.
    #[must_use]
    pub fn kind(&self) -> HookKind {
        self.kind
    }

    /// The hook's diagnostic name (the fixture name for eager hooks).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Runs the hook against a test instance.
    ///
    /// # Errors
    ///
    /// Propagates the callback's error; a failing hook aborts the run
    /// before the test body.
    pub fn fire(&self, instance: &mut TestInstance) -> Result<()> {
        (self.run)(instance)
    }
}

impl fmt::Debug for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hook({:?}, {})", self.kind, self.name)
    }
}
