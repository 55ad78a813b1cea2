//! Error types for the Nameplate system.
//!
//! Uses `thiserror` for ergonomic error definition.

use thiserror::Error;

/// The main error type for Nameplate operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an unknown fixture error.
    #[must_use]
    pub fn unknown_fixture(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownFixture(name.into()))
    }

    /// Creates an unsupported host version error.
    #[must_use]
    pub fn unsupported_host_version(
        found: impl Into<String>,
        minimum: impl Into<String>,
    ) -> Self {
        Self::new(ErrorKind::UnsupportedHostVersion {
            found: found.into(),
            minimum: minimum.into(),
        })
    }

    /// Creates an invalid host version error.
    #[must_use]
    pub fn invalid_host_version(text: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidHostVersion(text.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// No fixture is defined under the requested name.
    #[error("unknown fixture: {0}")]
    UnknownFixture(String),

    /// The host framework version has no known integration strategy.
    #[error("unsupported host framework version {found} (minimum supported {minimum})")]
    UnsupportedHostVersion {
        /// The version the host reported.
        found: String,
        /// The oldest version with a known strategy.
        minimum: String,
    },

    /// A host version string could not be parsed.
    #[error("invalid host version: {0}")]
    InvalidHostVersion(String),
}

/// A specialized result type for Nameplate operations.
pub type Result<T> = std::result::Result<T, Error>;
