//! The debug-augmentation mode.

use std::env;

/// Whether decorated values append their original textual identity.
///
/// Resolved once from the ambient environment and injected into the
/// [`Decorator`](crate::Decorator) at construction; never re-read or
/// mutated afterwards.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DebugMode {
    /// Labels replace the original identity outright.
    #[default]
    Off,
    /// Labels carry the original identity in a parenthesized suffix.
    Augment,
}

impl DebugMode {
    /// Environment variable consulted by [`DebugMode::from_env`].
    pub const ENV_VAR: &'static str = "NAMEPLATE_DEBUG";

    /// Resolves the mode from the ambient environment.
    ///
    /// Any resolution failure (unset variable, non-unicode content,
    /// unrecognized value) yields [`DebugMode::Off`]; augmentation must
    /// never break a run that would otherwise pass.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_value(env::var(Self::ENV_VAR).ok().as_deref())
    }

    /// Interprets an environment value; anything unreadable is `Off`.
    #[must_use]
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some(v) if matches!(v.trim(), "1" | "true" | "yes") => Self::Augment,
            _ => Self::Off,
        }
    }

    /// True when augmentation is active.
    #[must_use]
    pub const fn is_augmented(self) -> bool {
        matches!(self, Self::Augment)
    }
}
