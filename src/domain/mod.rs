//! Domain logic - pure business rules independent of git operations

pub mod branch;
pub mod commit;
pub mod decision;
pub mod version;

pub use branch::BranchKind;
pub use commit::{is_breaking_change, parse_bool_flag};
pub use decision::ReleaseDecision;
pub use version::{SemanticVersion, VersionBump};
