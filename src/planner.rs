//! Version bump decision logic
//!
//! Turns a raw release version, a branch and a breaking-change flag into the
//! next version. Everything here is pure: no git access, no logging.

use crate::domain::decision::STAGE_SUFFIX;
use crate::domain::{BranchKind, ReleaseDecision, SemanticVersion, VersionBump};
use crate::error::{ParseError, PlanError, PolicyError};

/// Where the current version comes from when looking it up in the repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LatestTag {
    /// Name of the nearest tag reachable from HEAD
    Found(String),
    /// The repository has no tag describing HEAD
    NoPriorTag,
}

/// What to do when the repository has no prior release tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingTagPolicy {
    /// Treat the missing tag as this version (first release)
    Initial(SemanticVersion),
    /// Refuse to compute a version
    Fail,
}

impl Default for MissingTagPolicy {
    fn default() -> Self {
        MissingTagPolicy::Initial(SemanticVersion::new(1, 0, 0))
    }
}

/// Applies the branch-based bump policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionPlanner {
    develop_branch: String,
    main_branch: String,
    stage_suffix: String,
}

impl Default for VersionPlanner {
    fn default() -> Self {
        VersionPlanner {
            develop_branch: crate::domain::branch::DEVELOP_BRANCH.to_string(),
            main_branch: crate::domain::branch::MAIN_BRANCH.to_string(),
            stage_suffix: STAGE_SUFFIX.to_string(),
        }
    }
}

impl VersionPlanner {
    /// Create a planner with custom branch names and staging label
    pub fn new(
        develop_branch: impl Into<String>,
        main_branch: impl Into<String>,
        stage_suffix: impl Into<String>,
    ) -> Self {
        VersionPlanner {
            develop_branch: develop_branch.into(),
            main_branch: main_branch.into(),
            stage_suffix: stage_suffix.into(),
        }
    }

    /// Clean up a raw version string.
    ///
    /// Trims whitespace, strips one leading `v` and drops everything from the
    /// first `-` on. No numeric validation happens here.
    ///
    /// ```
    /// use release_bump::planner::VersionPlanner;
    /// assert_eq!(VersionPlanner::normalize(" v1.4.9-rc1 ").unwrap(), "1.4.9");
    /// ```
    pub fn normalize(raw: &str) -> Result<String, ParseError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ParseError::Empty);
        }

        let unprefixed = trimmed.strip_prefix('v').unwrap_or(trimmed);
        let cleaned = match unprefixed.find('-') {
            Some(pos) => &unprefixed[..pos],
            None => unprefixed,
        };

        if cleaned.is_empty() {
            return Err(ParseError::Empty);
        }

        Ok(cleaned.to_string())
    }

    /// Parse a strict `MAJOR.MINOR.PATCH` triple
    pub fn parse_version(s: &str) -> Result<SemanticVersion, ParseError> {
        s.parse()
    }

    /// Map a branch name onto its bump policy
    pub fn classify(&self, branch_name: &str) -> BranchKind {
        BranchKind::classify(branch_name, &self.develop_branch, &self.main_branch)
    }

    /// Compute the next release for `current` on `branch`.
    ///
    /// - Develop: patch bump with the staging label, whatever `has_breaking` says
    /// - Main: major bump if `has_breaking`, minor bump otherwise
    /// - anything else: [`PolicyError::UnsupportedBranch`]
    ///
    /// A component already at `u64::MAX` yields [`PolicyError::VersionOverflow`].
    pub fn bump(
        &self,
        current: SemanticVersion,
        branch: &BranchKind,
        has_breaking: bool,
    ) -> Result<ReleaseDecision, PolicyError> {
        let bump_type = match branch {
            BranchKind::Develop => VersionBump::Patch,
            BranchKind::Main if has_breaking => VersionBump::Major,
            BranchKind::Main => VersionBump::Minor,
            BranchKind::Unsupported(name) => {
                return Err(PolicyError::UnsupportedBranch(name.clone()))
            }
        };

        let next = current
            .bump(bump_type)
            .ok_or_else(|| PolicyError::VersionOverflow(current.to_string()))?;

        match branch {
            BranchKind::Develop if !self.stage_suffix.is_empty() => Ok(
                ReleaseDecision::pre_release(next, self.stage_suffix.clone()),
            ),
            _ => Ok(ReleaseDecision::release(next)),
        }
    }

    /// Full pipeline from raw inputs: normalize, parse, classify, bump.
    ///
    /// Input errors are reported before the branch policy is consulted.
    pub fn plan(
        &self,
        branch_name: &str,
        raw_version: &str,
        has_breaking: bool,
    ) -> Result<ReleaseDecision, PlanError> {
        let current = Self::parse_version(&Self::normalize(raw_version)?)?;
        let branch = self.classify(branch_name);
        Ok(self.bump(current, &branch, has_breaking)?)
    }

    /// Decide the current version from a repository tag lookup
    pub fn resolve_current(
        latest: &LatestTag,
        policy: MissingTagPolicy,
    ) -> Result<SemanticVersion, PlanError> {
        match (latest, policy) {
            (LatestTag::Found(tag), _) => Ok(Self::parse_version(&Self::normalize(tag)?)?),
            (LatestTag::NoPriorTag, MissingTagPolicy::Initial(version)) => Ok(version),
            (LatestTag::NoPriorTag, MissingTagPolicy::Fail) => Err(PlanError::NoPriorTag),
        }
    }
}
