//! Test groups, eager hooks, and host integration for Nameplate.
//!
//! This crate provides:
//! - [`HostVersion`] / [`Integration`] - The version-selected host boundary
//! - [`TestGroup`] - Fixture registrar with nested-group inheritance
//! - [`Hook`] - Ordered before-each callbacks, including eager fixtures
//! - [`TestInstance`] - One test's evaluation state

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod group;
pub mod hooks;
pub mod host;
pub mod instance;

pub use group::TestGroup;
pub use hooks::{Hook, HookKind};
pub use host::{HostVersion, Integration};
pub use instance::TestInstance;
