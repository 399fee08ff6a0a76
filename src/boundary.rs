use std::fmt;

/// Non-fatal conditions met while resolving the current release.
/// These are reported to the user but do not change the exit status.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// No tag describes HEAD; the configured initial version was used
    NoPriorTag { initial_version: String },
    /// The latest tag carried a suffix that was dropped before bumping
    SuffixDiscarded { tag: String, version: String },
}

impl BoundaryWarning {
    /// Check whether reading `tag` as a version throws away a `-` suffix
    pub fn suffix_discarded(tag: &str, version: &str) -> Option<Self> {
        let trimmed = tag.trim();
        let unprefixed = trimmed.strip_prefix('v').unwrap_or(trimmed);
        if unprefixed.contains('-') {
            Some(BoundaryWarning::SuffixDiscarded {
                tag: tag.to_string(),
                version: version.to_string(),
            })
        } else {
            None
        }
    }
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoPriorTag { initial_version } => {
                write!(
                    f,
                    "No release tag found, starting from initial version {}",
                    initial_version
                )
            }
            BoundaryWarning::SuffixDiscarded { tag, version } => {
                write!(f, "Tag '{}' read as version {}", tag, version)
            }
        }
    }
}
