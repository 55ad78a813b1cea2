//! The host framework boundary: versions and integration strategies.

use std::fmt;
use std::str::FromStr;

use nameplate_foundation::{Error, Result};

/// A host framework version triple.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HostVersion {
    /// Major version.
    pub major: u32,
    /// Minor version.
    pub minor: u32,
    /// Patch version.
    pub patch: u32,
}

impl HostVersion {
    /// Creates a version triple.
    #[must_use]
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for HostVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for HostVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = [0_u32; 3];
        let mut count = 0;
        for component in s.split('.') {
            if count == 3 {
                return Err(Error::invalid_host_version(s));
            }
            parts[count] = component
                .parse()
                .map_err(|_| Error::invalid_host_version(s))?;
            count += 1;
        }
        if count == 0 {
            return Err(Error::invalid_host_version(s));
        }
        Ok(Self::new(parts[0], parts[1], parts[2]))
    }
}

/// The version-selected integration strategy.
///
/// The host framework exposed three historically different extension
/// points; the matching strategy is selected once, when the group tree is
/// built, and never branches inside the core afterwards.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Integration {
    /// Hosts before 2.8: group-class extension, bare initializers.
    Legacy,
    /// Hosts from 2.8 up to 3.0: example-group extension, bare
    /// initializers.
    Transitional,
    /// Hosts 3.0 and later: memoized-helper extension; initializers may
    /// receive the running test's handle.
    Modern,
}

impl Integration {
    /// Oldest host version with a known integration strategy.
    pub const MINIMUM: HostVersion = HostVersion::new(1, 0, 0);

    const TRANSITIONAL_FLOOR: HostVersion = HostVersion::new(2, 8, 0);
    const MODERN_FLOOR: HostVersion = HostVersion::new(3, 0, 0);

    /// Selects the strategy for a host version.
    ///
    /// # Errors
    ///
    /// Versions below [`Self::MINIMUM`] have no known strategy and fail
    /// loudly here, at load time, rather than silently misbehaving.
    pub fn select(version: HostVersion) -> Result<Self> {
        if version < Self::MINIMUM {
            return Err(Error::unsupported_host_version(
                version.to_string(),
                Self::MINIMUM.to_string(),
            ));
        }
        Ok(if version < Self::TRANSITIONAL_FLOOR {
            Self::Legacy
        } else if version < Self::MODERN_FLOOR {
            Self::Transitional
        } else {
            Self::Modern
        })
    }

    /// Whether initializers receive the running test's handle.
    #[must_use]
    pub const fn passes_instance_handle(self) -> bool {
        matches!(self, Self::Modern)
    }
}
