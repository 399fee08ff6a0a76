use crate::error::ParseError;
use std::fmt;
use std::str::FromStr;

/// Semantic version representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SemanticVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl SemanticVersion {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        SemanticVersion {
            major,
            minor,
            patch,
        }
    }

    /// Bump version according to bump type
    ///
    /// Returns `None` when the incremented component does not fit in `u64`.
    pub fn bump(&self, bump_type: VersionBump) -> Option<Self> {
        match bump_type {
            VersionBump::Major => Some(SemanticVersion {
                major: self.major.checked_add(1)?,
                minor: 0,
                patch: 0,
            }),
            VersionBump::Minor => Some(SemanticVersion {
                major: self.major,
                minor: self.minor.checked_add(1)?,
                patch: 0,
            }),
            VersionBump::Patch => Some(SemanticVersion {
                major: self.major,
                minor: self.minor,
                patch: self.patch.checked_add(1)?,
            }),
        }
    }
}

impl FromStr for SemanticVersion {
    type Err = ParseError;

    /// Parse a bare `MAJOR.MINOR.PATCH` triple.
    ///
    /// The grammar check is delegated to `semver`, which already rejects
    /// leading zeros and wrong arity; anything it accepts beyond the bare
    /// triple (pre-release or build metadata) is rejected here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = semver::Version::parse(s)
            .map_err(|e| ParseError::InvalidVersion(format!("'{}': {}", s, e)))?;

        if !parsed.pre.is_empty() || !parsed.build.is_empty() {
            return Err(ParseError::InvalidVersion(format!(
                "'{}': expected MAJOR.MINOR.PATCH without suffix",
                s
            )));
        }

        Ok(SemanticVersion::new(parsed.major, parsed.minor, parsed.patch))
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Version bump type decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
}
