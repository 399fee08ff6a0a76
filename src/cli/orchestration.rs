//! Release workflow orchestration
//!
//! Wires configuration, the repository and the planner into one invocation.
//! Kept apart from `main.rs` so it can be driven without clap and tested
//! against [crate::git::MockRepository].

use tracing::{debug, info, warn};

use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::domain::{is_breaking_change, parse_bool_flag, ReleaseDecision, SemanticVersion};
use crate::error::{ReleaseBumpError, Result};
use crate::git::Repository;
use crate::planner::{LatestTag, VersionPlanner};

/// Arguments for the release workflow
///
/// Mirrors the CLI arguments without depending on clap. A `None` version or
/// flag means "read it from the repository".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReleaseArgs {
    /// Branch the release is computed for
    pub branch: String,

    /// Latest release version, raw as given
    pub latest_version: Option<String>,

    /// Breaking-change flag, raw as given
    pub has_breaking: Option<String>,

    /// Create an annotated tag for the computed version
    pub create_tag: bool,

    /// Compute everything but never write a tag
    pub dry_run: bool,
}

impl ReleaseArgs {
    /// Whether any step of the workflow has to touch the repository
    pub fn needs_repository(&self) -> bool {
        self.latest_version.is_none()
            || self.has_breaking.is_none()
            || (self.create_tag && !self.dry_run)
    }
}

/// Result of a successful release workflow
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseOutcome {
    /// The computed next release
    pub decision: ReleaseDecision,

    /// Tag name, when tagging was requested
    pub tag: Option<String>,

    /// Whether the tag was actually written
    pub tag_created: bool,

    /// Non-fatal conditions to report
    pub warnings: Vec<BoundaryWarning>,
}

/// Main release workflow
///
/// 1. Resolve the current version (argument, or latest tag + missing-tag policy)
/// 2. Resolve the breaking-change flag (argument, or HEAD commit message)
/// 3. Apply the branch bump policy
/// 4. Optionally create the annotated tag
///
/// Input errors surface before the branch policy is applied.
pub fn run_release<R: Repository>(
    args: &ReleaseArgs,
    config: &Config,
    repo: Option<&R>,
) -> Result<ReleaseOutcome> {
    let planner = config.planner();
    let mut warnings = Vec::new();

    let current = match &args.latest_version {
        Some(raw) => VersionPlanner::parse_version(&VersionPlanner::normalize(raw)?)?,
        None => {
            let repo = repo.ok_or(ReleaseBumpError::RepositoryRequired(
                "look up the latest release tag",
            ))?;
            resolve_from_repository(repo, config, &mut warnings)?
        }
    };
    debug!(%current, "resolved current version");

    let has_breaking = match &args.has_breaking {
        Some(raw) => parse_bool_flag(raw)?,
        None => {
            let repo = repo.ok_or(ReleaseBumpError::RepositoryRequired(
                "read the latest commit message",
            ))?;
            let message = repo.latest_commit_message()?;
            is_breaking_change(&message, &config.release.breaking_change_indicators)
        }
    };
    debug!(has_breaking, "resolved breaking-change flag");

    let branch = planner.classify(&args.branch);
    let decision = planner.bump(current, &branch, has_breaking)?;
    info!(
        branch = %args.branch,
        kind = %branch,
        pre_release = decision.is_pre_release(),
        %decision,
        "computed next release"
    );

    for warning in &warnings {
        warn!("{}", warning);
    }

    let mut outcome = ReleaseOutcome {
        decision,
        tag: None,
        tag_created: false,
        warnings,
    };

    if args.create_tag {
        let version = outcome.decision.to_string();
        let tag = config.release.render_tag_name(&version);

        if args.dry_run {
            debug!(%tag, "dry run, tag not created");
        } else {
            let repo = repo.ok_or(ReleaseBumpError::RepositoryRequired("create a tag"))?;
            repo.create_annotated_tag(&tag, &config.release.render_tag_message(&version))?;
            outcome.tag_created = true;
        }
        outcome.tag = Some(tag);
    }

    Ok(outcome)
}

fn resolve_from_repository<R: Repository>(
    repo: &R,
    config: &Config,
    warnings: &mut Vec<BoundaryWarning>,
) -> Result<SemanticVersion> {
    let current = match repo.latest_tag()? {
        LatestTag::Found(tag) => {
            let current = VersionPlanner::parse_version(&VersionPlanner::normalize(&tag)?)?;
            if let Some(warning) = BoundaryWarning::suffix_discarded(&tag, &current.to_string()) {
                warnings.push(warning);
            }
            current
        }
        LatestTag::NoPriorTag => {
            let policy = config.missing_tag_policy()?;
            let current = VersionPlanner::resolve_current(&LatestTag::NoPriorTag, policy)?;
            warnings.push(BoundaryWarning::NoPriorTag {
                initial_version: current.to_string(),
            });
            current
        }
    };

    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::MockRepository;

    fn explicit(branch: &str, version: &str, breaking: &str) -> ReleaseArgs {
        ReleaseArgs {
            branch: branch.to_string(),
            latest_version: Some(version.to_string()),
            has_breaking: Some(breaking.to_string()),
            ..ReleaseArgs::default()
        }
    }

    #[test]
    fn test_needs_repository() {
        assert!(!explicit("main", "1.0.0", "false").needs_repository());

        let mut args = explicit("main", "1.0.0", "false");
        args.create_tag = true;
        assert!(args.needs_repository());
        args.dry_run = true;
        assert!(!args.needs_repository());

        let args = ReleaseArgs {
            branch: "main".to_string(),
            ..ReleaseArgs::default()
        };
        assert!(args.needs_repository());
    }

    #[test]
    fn test_explicit_inputs_need_no_repository() {
        let outcome = run_release::<MockRepository>(
            &explicit("develop", "1.2.3", "false"),
            &Config::default(),
            None,
        )
        .unwrap();

        assert_eq!(outcome.decision.to_string(), "1.2.4-stage");
        assert_eq!(outcome.tag, None);
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn test_missing_repository_is_reported() {
        let args = ReleaseArgs {
            branch: "main".to_string(),
            has_breaking: Some("false".to_string()),
            ..ReleaseArgs::default()
        };
        let err = run_release::<MockRepository>(&args, &Config::default(), None).unwrap_err();
        assert!(matches!(err, ReleaseBumpError::RepositoryRequired(_)));
    }

    #[test]
    fn test_bootstrap_settings_ignored_when_tag_exists() {
        let mut config = Config::default();
        config.bootstrap.initial_version = "not-a-version".to_string();
        let repo = MockRepository::default().with_latest_tag("1.4.0");
        let args = ReleaseArgs {
            branch: "main".to_string(),
            has_breaking: Some("false".to_string()),
            ..ReleaseArgs::default()
        };

        let outcome = run_release(&args, &config, Some(&repo)).unwrap();
        assert_eq!(outcome.decision.to_string(), "1.5.0");

        let empty = MockRepository::default();
        let err = run_release(&args, &config, Some(&empty)).unwrap_err();
        assert!(matches!(err, ReleaseBumpError::Config(_)));
    }

    #[test]
    fn test_invalid_flag_is_rejected() {
        let err = run_release::<MockRepository>(
            &explicit("main", "1.2.3", "maybe"),
            &Config::default(),
            None,
        )
        .unwrap_err();
        assert!(err.to_string().contains("maybe"));
    }
}
