//! Core types for the Nameplate fixture-labeling system.
//!
//! This crate provides:
//! - [`Label`] - The display string substituted for a value's textual identity
//! - [`Report`] - The two textual-identity operations of a reported value
//! - [`FixtureValue`] - The dynamic value held by an evaluated fixture slot
//! - [`Raw`] - Initializer output prior to decoration
//! - [`Error`] - Rich error types with categorized kinds

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod label;
pub mod report;
pub mod value;

pub use error::{Error, ErrorKind, Result};
pub use label::Label;
pub use report::{Report, render_diagnostic, render_plain};
pub use value::{FixtureValue, Raw};
