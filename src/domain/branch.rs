use std::fmt;

/// Default name of the staging branch
pub const DEVELOP_BRANCH: &str = "develop";

/// Default name of the production branch
pub const MAIN_BRANCH: &str = "main";

/// Which bump policy a branch falls under
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchKind {
    Develop,
    Main,
    Unsupported(String),
}

impl BranchKind {
    /// Classify a branch against explicit develop/main names.
    ///
    /// Matching is exact and case-sensitive; `Main` wins if both names are
    /// configured identically.
    pub fn classify(name: &str, develop: &str, main: &str) -> Self {
        if name == main {
            BranchKind::Main
        } else if name == develop {
            BranchKind::Develop
        } else {
            BranchKind::Unsupported(name.to_string())
        }
    }
}

impl fmt::Display for BranchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BranchKind::Develop => write!(f, "develop"),
            BranchKind::Main => write!(f, "main"),
            BranchKind::Unsupported(name) => write!(f, "unsupported ({})", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_default_names(name: &str) -> BranchKind {
        BranchKind::classify(name, DEVELOP_BRANCH, MAIN_BRANCH)
    }

    #[test]
    fn test_main_branch() {
        assert_eq!(from_default_names("main"), BranchKind::Main);
    }

    #[test]
    fn test_develop_branch() {
        assert_eq!(from_default_names("develop"), BranchKind::Develop);
    }

    #[test]
    fn test_other_branches_unsupported() {
        assert_eq!(
            from_default_names("release"),
            BranchKind::Unsupported("release".to_string())
        );
        assert_eq!(
            from_default_names("master"),
            BranchKind::Unsupported("master".to_string())
        );
        assert_eq!(
            from_default_names("Main"),
            BranchKind::Unsupported("Main".to_string())
        );
    }

    #[test]
    fn test_custom_names() {
        assert_eq!(
            BranchKind::classify("master", "dev", "master"),
            BranchKind::Main
        );
        assert_eq!(BranchKind::classify("dev", "dev", "master"), BranchKind::Develop);
        assert_eq!(
            BranchKind::classify("main", "dev", "master"),
            BranchKind::Unsupported("main".to_string())
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(from_default_names("main").to_string(), "main");
        assert_eq!(from_default_names("develop").to_string(), "develop");
        assert_eq!(
            from_default_names("hotfix").to_string(),
            "unsupported (hotfix)"
        );
    }
}
