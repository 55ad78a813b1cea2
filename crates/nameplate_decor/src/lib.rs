//! Identity decoration for Nameplate.
//!
//! This crate provides:
//! - [`DebugMode`] - The process-wide debug-augmentation flag
//! - [`Labeled`] - A wrapper rewriting a value's textual identity to a label
//! - [`Decorator`] - Applies decoration to raw fixture output
//! - [`labeled_ref`] / [`inner_ref`] - Typed views through stored decorations

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod decorator;
pub mod labeled;
pub mod mode;

pub use decorator::{Decorator, StoredLabeled, inner_ref, labeled_ref};
pub use labeled::{CapturedIdentity, Labeled};
pub use mode::DebugMode;
