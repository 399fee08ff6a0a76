use crate::error::{ReleaseBumpError, Result};
use crate::git::Repository;
use crate::planner::LatestTag;
use std::cell::RefCell;

/// Mock repository for testing without actual git operations
#[derive(Default)]
pub struct MockRepository {
    latest_tag: Option<String>,
    head_message: Option<String>,
    created_tags: RefCell<Vec<(String, String)>>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tag returned by `latest_tag`
    pub fn with_latest_tag(mut self, tag: impl Into<String>) -> Self {
        self.latest_tag = Some(tag.into());
        self
    }

    /// Set the HEAD commit message
    pub fn with_head_message(mut self, message: impl Into<String>) -> Self {
        self.head_message = Some(message.into());
        self
    }

    /// Tags created so far, as `(name, message)` pairs
    pub fn created_tags(&self) -> Vec<(String, String)> {
        self.created_tags.borrow().clone()
    }
}

impl Repository for MockRepository {
    fn latest_tag(&self) -> Result<LatestTag> {
        Ok(match &self.latest_tag {
            Some(tag) => LatestTag::Found(tag.clone()),
            None => LatestTag::NoPriorTag,
        })
    }

    fn latest_commit_message(&self) -> Result<String> {
        self.head_message
            .clone()
            .ok_or_else(|| git2::Error::from_str("reference 'refs/heads/main' not found").into())
    }

    fn create_annotated_tag(&self, name: &str, message: &str) -> Result<()> {
        let mut created = self.created_tags.borrow_mut();
        let exists = created.iter().any(|(existing, _)| existing == name)
            || self.latest_tag.as_deref() == Some(name);
        if exists {
            return Err(ReleaseBumpError::tag(format!("Tag '{}' already exists", name)));
        }

        created.push((name.to_string(), message.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_repository_without_tag() {
        let repo = MockRepository::new();
        assert_eq!(repo.latest_tag().unwrap(), LatestTag::NoPriorTag);
    }

    #[test]
    fn test_mock_repository_tag_and_message() {
        let repo = MockRepository::new()
            .with_latest_tag("v1.0.0")
            .with_head_message("fix: typo");

        assert_eq!(
            repo.latest_tag().unwrap(),
            LatestTag::Found("v1.0.0".to_string())
        );
        assert_eq!(repo.latest_commit_message().unwrap(), "fix: typo");
    }

    #[test]
    fn test_mock_repository_missing_head() {
        let repo = MockRepository::new();
        assert!(matches!(
            repo.latest_commit_message(),
            Err(ReleaseBumpError::Git(_))
        ));
    }

    #[test]
    fn test_mock_repository_records_tags() {
        let repo = MockRepository::new();
        repo.create_annotated_tag("1.1.0", "Release version 1.1.0")
            .unwrap();

        assert_eq!(
            repo.created_tags(),
            vec![("1.1.0".to_string(), "Release version 1.1.0".to_string())]
        );
        assert!(repo.create_annotated_tag("1.1.0", "again").is_err());
    }
}
