//! Evaluation contexts for fixture initializers.

use nameplate_decor::Decorator;
use nameplate_foundation::{FixtureValue, Result};

use crate::memo::MemoStore;
use crate::registry::FixtureRegistry;

/// The evaluation context handed to a fixture initializer.
///
/// Initializers run in the test instance's context and may resolve other
/// fixtures through it. A cyclic initializer (one that re-enters its own
/// slot before completing) is unsupported and recurses until the stack
/// overflows; that is a caller error, not a guarded condition.
pub trait Scope {
    /// Resolves another fixture in the same instance, evaluating it
    /// lazily and memoizing the result.
    ///
    /// # Errors
    ///
    /// Fails when no fixture is defined under `name`.
    fn fixture(&mut self, name: &str) -> Result<FixtureValue>;

    /// The currently running test's name, when the host integration
    /// passes the instance handle through to initializers.
    fn test_name(&self) -> Option<&str>;
}

/// Storage and configuration surface the evaluation driver needs from a
/// test instance.
pub trait InstanceState: Scope {
    /// The definitions in scope for this instance.
    fn registry(&self) -> &FixtureRegistry;

    /// The instance's memoization slots.
    fn slots(&self) -> &MemoStore;

    /// Mutable access to the memoization slots.
    fn slots_mut(&mut self) -> &mut MemoStore;

    /// The decorator configured for this instance.
    fn decorator(&self) -> &Decorator;
}
