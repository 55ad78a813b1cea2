//! Nameplate - readable labels for memoized test fixtures
//!
//! This crate re-exports all layers of the Nameplate system for
//! convenient access. For detailed documentation, see the individual
//! layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: nameplate_harness    — Test groups, eager hooks, host versions
//! Layer 2: nameplate_registry   — Definitions, registry, memoization
//! Layer 1: nameplate_decor      — Identity decoration, debug augmentation
//! Layer 0: nameplate_foundation — Core types (Label, Report, FixtureValue, Error)
//! ```

pub use nameplate_decor as decor;
pub use nameplate_foundation as foundation;
pub use nameplate_harness as harness;
pub use nameplate_registry as registry;
