//! The two textual-identity operations of a reported value.
//!
//! Test reporters read a value through exactly two conversions: the plain
//! string form and the diagnostic (inspection) form. [`Report`] captures
//! those two operations behind an object-safe trait so evaluated fixtures
//! of different types can share one slot representation.

use std::any::Any;
use std::fmt;

/// A value that can report its textual identity.
///
/// Every `Display + Debug` type reports through the blanket
/// implementation: `plain` delegates to [`fmt::Display`] and `diagnostic`
/// to [`fmt::Debug`].
pub trait Report: Any {
    /// Writes the plain string conversion.
    fn plain(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Writes the diagnostic (inspection) conversion.
    fn diagnostic(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Upcasts to [`Any`] for typed downcasts.
    fn as_any(&self) -> &dyn Any;
}

impl<T> Report for T
where
    T: fmt::Display + fmt::Debug + 'static,
{
    fn plain(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }

    fn diagnostic(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

struct PlainOf<'a>(&'a dyn Report);

impl fmt::Display for PlainOf<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.plain(f)
    }
}

struct DiagnosticOf<'a>(&'a dyn Report);

impl fmt::Display for DiagnosticOf<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.diagnostic(f)
    }
}

/// Renders the plain conversion into an owned string.
///
/// A conversion that errors surfaces as `Err` instead of panicking, so
/// callers can treat a failing conversion as absent.
///
/// # Errors
///
/// Returns the underlying [`fmt::Error`] when the value's plain
/// conversion reports one.
pub fn render_plain(value: &dyn Report) -> Result<String, fmt::Error> {
    let mut out = String::new();
    fmt::write(&mut out, format_args!("{}", PlainOf(value)))?;
    Ok(out)
}

/// Renders the diagnostic conversion into an owned string.
///
/// # Errors
///
/// Returns the underlying [`fmt::Error`] when the value's diagnostic
/// conversion reports one.
pub fn render_diagnostic(value: &dyn Report) -> Result<String, fmt::Error> {
    let mut out = String::new();
    fmt::write(&mut out, format_args!("{}", DiagnosticOf(value)))?;
    Ok(out)
}
