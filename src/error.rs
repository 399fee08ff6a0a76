use thiserror::Error;

/// Failures while turning raw input into domain values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("version string is empty")]
    Empty,

    #[error("invalid version: {0}")]
    InvalidVersion(String),

    #[error("invalid boolean flag '{0}': expected true or false")]
    InvalidFlag(String),
}

/// Failures raised by the bump policy itself
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error("unsupported branch: {0}")]
    UnsupportedBranch(String),

    #[error("cannot bump {0}: component would overflow")]
    VersionOverflow(String),
}

/// Any failure of the planning step, before anything touches git
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Policy(#[from] PolicyError),

    #[error("no prior release tag found and bootstrapping is disabled")]
    NoPriorTag,
}

/// Unified error type for release-bump operations
#[derive(Error, Debug)]
pub enum ReleaseBumpError {
    #[error(transparent)]
    Plan(#[from] PlanError),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("A git repository is required to {0}")]
    RepositoryRequired(&'static str),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in release-bump
pub type Result<T> = std::result::Result<T, ReleaseBumpError>;

impl ReleaseBumpError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseBumpError::Config(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        ReleaseBumpError::Tag(msg.into())
    }
}

impl From<ParseError> for ReleaseBumpError {
    fn from(err: ParseError) -> Self {
        ReleaseBumpError::Plan(PlanError::Parse(err))
    }
}

impl From<PolicyError> for ReleaseBumpError {
    fn from(err: PolicyError) -> Self {
        ReleaseBumpError::Plan(PlanError::Policy(err))
    }
}
