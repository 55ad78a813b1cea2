//! Fixture definitions.

use std::fmt;
use std::sync::Arc;

use nameplate_foundation::{Label, Raw};

use crate::context::Scope;

/// A fixture initializer.
///
/// Runs in the test instance's evaluation scope and produces raw,
/// not-yet-decorated output. Cheap to clone; the underlying closure is
/// shared across group and definition clones.
#[derive(Clone)]
pub struct Initializer(Arc<dyn Fn(&mut dyn Scope) -> Raw>);

impl Initializer {
    /// Wraps a closure whose return value converts into raw output.
    ///
    /// Plain values convert directly; return [`Raw::nil`] or
    /// [`Raw::from_option`] for absent results.
    #[must_use]
    pub fn new<F, R>(init: F) -> Self
    where
        F: Fn(&mut dyn Scope) -> R + 'static,
        R: Into<Raw>,
    {
        Self(Arc::new(move |scope| init(scope).into()))
    }

    /// Runs the initializer in the given scope.
    ///
    /// Panics inside the closure propagate unmodified; the test fails
    /// normally and this layer never catches.
    #[must_use]
    pub fn invoke(&self, scope: &mut dyn Scope) -> Raw {
        (self.0)(scope)
    }
}

impl fmt::Debug for Initializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Initializer")
    }
}

/// A named fixture: label plus initializer.
///
/// Created at group-definition time and immutable thereafter. The label
/// defaults to the fixture name's textual form when not supplied.
#[derive(Clone, Debug)]
pub struct FixtureDefinition {
    name: Arc<str>,
    label: Label,
    initializer: Initializer,
}

impl FixtureDefinition {
    /// Creates a definition; a missing label falls back to the name.
    #[must_use]
    pub fn new(name: &str, label: Option<&str>, initializer: Initializer) -> Self {
        let name: Arc<str> = Arc::from(name);
        let label = label.map_or_else(|| Label::from(name.clone()), Label::from);
        Self {
            name,
            label,
            initializer,
        }
    }

    /// The fixture's unique name within its group.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The display label.
    #[must_use]
    pub fn label(&self) -> &Label {
        &self.label
    }

    /// The initializer.
    #[must_use]
    pub fn initializer(&self) -> &Initializer {
        &self.initializer
    }
}
