//! Display labels for decorated fixture values.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The human-chosen display string substituted for a value's default
/// textual identity.
///
/// Labels are immutable and cheap to clone; the text is shared across
/// every place the label flows.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Label(Arc<str>);

impl Label {
    /// Creates a label from its display text.
    #[must_use]
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        Self(text.into())
    }

    /// The label's display text, verbatim.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Escapes the label for embedding inside a quoted string literal.
    ///
    /// Backslashes and double quotes are prefixed with a backslash so the
    /// embedded literal terminates where intended. Unquoting the result
    /// recovers the label's literal content exactly; rendering through
    /// [`fmt::Display`] never escapes.
    #[must_use]
    pub fn escaped(&self) -> Cow<'_, str> {
        if self.0.contains(['"', '\\']) {
            let mut out = String::with_capacity(self.0.len() + 2);
            for c in self.0.chars() {
                if matches!(c, '"' | '\\') {
                    out.push('\\');
                }
                out.push(c);
            }
            Cow::Owned(out)
        } else {
            Cow::Borrowed(&self.0)
        }
    }

    /// Returns true if the label text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Label({:?})", &*self.0)
    }
}

impl From<&str> for Label {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Label {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<Arc<str>> for Label {
    fn from(text: Arc<str>) -> Self {
        Self(text)
    }
}
