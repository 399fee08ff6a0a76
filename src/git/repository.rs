use crate::error::{ReleaseBumpError, Result};
use crate::planner::LatestTag;
use git2::{DescribeFormatOptions, DescribeOptions, ErrorCode, Repository as Git2Repo};
use std::path::Path;
use tracing::debug;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;
        debug!(path = %repo.path().display(), "opened repository");

        Ok(Git2Repository { repo })
    }
}

impl super::Repository for Git2Repository {
    fn latest_tag(&self) -> Result<LatestTag> {
        match self.repo.head() {
            Ok(_) => {}
            Err(e) if matches!(e.code(), ErrorCode::NotFound | ErrorCode::UnbornBranch) => {
                debug!("HEAD is unborn, no tag can describe it");
                return Ok(LatestTag::NoPriorTag);
            }
            Err(e) => return Err(e.into()),
        }

        // libgit2 reports an empty tag set as a generic describe failure
        if self.repo.tag_names(None)?.is_empty() {
            debug!("repository has no tags");
            return Ok(LatestTag::NoPriorTag);
        }

        let mut describe_opts = DescribeOptions::new();
        describe_opts.describe_tags();

        let describe = match self.repo.describe(&describe_opts) {
            Ok(describe) => describe,
            Err(e) if e.code() == ErrorCode::NotFound => {
                debug!(reason = %e.message(), "no tag describes HEAD");
                return Ok(LatestTag::NoPriorTag);
            }
            Err(e) => return Err(e.into()),
        };

        let mut format_opts = DescribeFormatOptions::new();
        format_opts.abbreviated_size(0);
        let tag = describe.format(Some(&format_opts))?;

        debug!(%tag, "found latest tag");
        Ok(LatestTag::Found(tag))
    }

    fn latest_commit_message(&self) -> Result<String> {
        let commit = self.repo.head()?.peel_to_commit()?;
        let message = String::from_utf8_lossy(commit.message_bytes()).into_owned();

        debug!(commit = %commit.id(), "read HEAD commit message");
        Ok(message)
    }

    fn create_annotated_tag(&self, name: &str, message: &str) -> Result<()> {
        let target = self
            .repo
            .head()
            .and_then(|head| head.peel(git2::ObjectType::Commit))
            .map_err(|e| ReleaseBumpError::tag(format!("Cannot resolve HEAD: {}", e)))?;

        let tagger = self
            .repo
            .signature()
            .map_err(|e| ReleaseBumpError::tag(format!("Cannot determine tagger: {}", e)))?;

        self.repo
            .tag(name, &target, &tagger, message, false)
            .map_err(|e| ReleaseBumpError::tag(format!("Cannot create tag '{}': {}", name, e)))?;

        debug!(tag = name, target = %target.id(), "created annotated tag");
        Ok(())
    }
}
