//! Git operations abstraction layer
//!
//! The planner never talks to git directly. Everything it needs from the
//! repository goes through the [Repository] trait:
//!
//! - [repository::Git2Repository]: a real implementation using the `git2` crate
//! - [mock::MockRepository]: an in-memory implementation for testing
//!
//! ```rust
//! # use release_bump::git::Repository;
//! # use release_bump::planner::LatestTag;
//! # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
//! match repo.latest_tag()? {
//!     LatestTag::Found(tag) => println!("latest release: {}", tag),
//!     LatestTag::NoPriorTag => println!("first release"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;
use crate::planner::LatestTag;

/// Repository operations the release flow depends on
///
/// ## Error Handling
///
/// Implementations map underlying failures (like `git2::Error`) onto
/// [crate::error::ReleaseBumpError]. A repository that simply has no tag yet
/// is not an error: it is reported as [LatestTag::NoPriorTag].
pub trait Repository {
    /// Nearest tag reachable from HEAD
    ///
    /// Equivalent of `git describe --tags --abbrev=0`: the tag name only,
    /// without distance or commit suffix.
    ///
    /// # Returns
    /// * `Ok(LatestTag::Found(name))` - A tag describes HEAD
    /// * `Ok(LatestTag::NoPriorTag)` - No tag is reachable, or HEAD is unborn
    /// * `Err` - Any other git failure
    fn latest_tag(&self) -> Result<LatestTag>;

    /// Full message of the commit HEAD points to
    fn latest_commit_message(&self) -> Result<String>;

    /// Create an annotated tag on HEAD
    ///
    /// # Arguments
    /// * `name` - Name for the new tag (e.g., "1.3.0")
    /// * `message` - Annotation message
    ///
    /// # Returns
    /// * `Ok(())` - Success
    /// * `Err` - If the tag already exists, HEAD is unborn, or git fails
    fn create_annotated_tag(&self, name: &str, message: &str) -> Result<()>;
}
