//! The identity-decorating wrapper.

use std::fmt;
use std::ops::{Deref, DerefMut};

use nameplate_foundation::Label;

/// The original textual identity of a value, captured before decoration.
///
/// Each operation is captured independently; an operation whose capture
/// failed is simply absent, and its segment is omitted from the rendered
/// output.
#[derive(Clone, Debug, Default)]
pub struct CapturedIdentity {
    /// The original plain string conversion, when capture succeeded.
    pub plain: Option<String>,
    /// The original diagnostic conversion, when capture succeeded.
    pub diagnostic: Option<String>,
}

/// A value whose textual identity has been rewritten to a label.
///
/// Both conversions render the label's text verbatim; when an original
/// identity was captured, each conversion appends its own segment as
/// `label (original)`. Nothing else about the wrapped value changes:
/// method calls go through [`Deref`], and equality compares wrapped
/// values only.
#[derive(Clone)]
pub struct Labeled<T> {
    value: T,
    label: Label,
    original: Option<CapturedIdentity>,
}

impl<T> Labeled<T> {
    /// Wraps a value without capturing its original identity.
    #[must_use]
    pub fn new(value: T, label: Label) -> Self {
        Self {
            value,
            label,
            original: None,
        }
    }

    /// Wraps a value, retaining its captured original identity.
    #[must_use]
    pub fn with_original(value: T, label: Label, original: CapturedIdentity) -> Self {
        Self {
            value,
            label,
            original: Some(original),
        }
    }

    /// The display label.
    #[must_use]
    pub fn label(&self) -> &Label {
        &self.label
    }

    /// The captured original identity, when augmentation was active.
    #[must_use]
    pub fn original(&self) -> Option<&CapturedIdentity> {
        self.original.as_ref()
    }

    /// A shared reference to the wrapped value.
    #[must_use]
    pub fn get(&self) -> &T {
        &self.value
    }

    /// A mutable reference to the wrapped value.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Unwraps the value, discarding the decoration.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.value
    }
}

fn write_identity(
    f: &mut fmt::Formatter<'_>,
    label: &Label,
    segment: Option<&str>,
) -> fmt::Result {
    f.write_str(label.as_str())?;
    if let Some(original) = segment {
        write!(f, " ({original})")?;
    }
    Ok(())
}

impl<T> fmt::Display for Labeled<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let segment = self.original.as_ref().and_then(|o| o.plain.as_deref());
        write_identity(f, &self.label, segment)
    }
}

impl<T> fmt::Debug for Labeled<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let segment = self.original.as_ref().and_then(|o| o.diagnostic.as_deref());
        write_identity(f, &self.label, segment)
    }
}

impl<T> Deref for Labeled<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T> DerefMut for Labeled<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T> AsRef<T> for Labeled<T> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

impl<T> AsMut<T> for Labeled<T> {
    fn as_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T: PartialEq> PartialEq for Labeled<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for Labeled<T> {}

impl<T: PartialEq> PartialEq<T> for Labeled<T> {
    fn eq(&self, other: &T) -> bool {
        &self.value == other
    }
}
