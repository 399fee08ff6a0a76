use super::SemanticVersion;
use std::fmt;

/// Default pre-release label for staging builds
pub const STAGE_SUFFIX: &str = "stage";

/// The computed next release: a version and an optional pre-release label
///
/// The label is an opaque literal; it is never incremented or parsed back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseDecision {
    pub version: SemanticVersion,
    pub pre_release: Option<String>,
}

impl ReleaseDecision {
    /// A production release without pre-release label
    pub fn release(version: SemanticVersion) -> Self {
        ReleaseDecision {
            version,
            pre_release: None,
        }
    }

    /// A pre-release carrying the given label
    pub fn pre_release(version: SemanticVersion, label: impl Into<String>) -> Self {
        ReleaseDecision {
            version,
            pre_release: Some(label.into()),
        }
    }

    pub fn is_pre_release(&self) -> bool {
        self.pre_release.is_some()
    }
}

impl fmt::Display for ReleaseDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.pre_release {
            Some(label) => write!(f, "{}-{}", self.version, label),
            None => write!(f, "{}", self.version),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_display() {
        let decision = ReleaseDecision::release(SemanticVersion::new(2, 0, 0));
        assert_eq!(decision.to_string(), "2.0.0");
        assert!(!decision.is_pre_release());
    }

    #[test]
    fn test_pre_release_display() {
        let decision = ReleaseDecision::pre_release(SemanticVersion::new(1, 2, 4), STAGE_SUFFIX);
        assert_eq!(decision.to_string(), "1.2.4-stage");
        assert!(decision.is_pre_release());
    }
}
