use crate::error::ParseError;

/// Default commit message prefix that marks a breaking change
pub const BREAKING_CHANGE_PREFIX: &str = "BREAKING CHANGE:";

/// Check whether a commit message announces a breaking change.
///
/// Only a leading marker counts; surrounding whitespace of the message is
/// ignored, a marker further down in the body is not.
pub fn is_breaking_change<S: AsRef<str>>(message: &str, indicators: &[S]) -> bool {
    let message = message.trim_start();
    indicators.iter().any(|marker| {
        let marker: &str = marker.as_ref();
        !marker.is_empty() && message.starts_with(marker)
    })
}

/// Parse the breaking-change flag passed on the command line
pub fn parse_bool_flag(raw: &str) -> Result<bool, ParseError> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        other => Err(ParseError::InvalidFlag(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT: &[&str] = &[BREAKING_CHANGE_PREFIX];

    #[test]
    fn test_leading_marker_is_breaking() {
        assert!(is_breaking_change(
            "BREAKING CHANGE: drop v1 API",
            DEFAULT
        ));
        assert!(is_breaking_change(
            "\n  BREAKING CHANGE: drop v1 API\n",
            DEFAULT
        ));
    }

    #[test]
    fn test_marker_in_body_is_not_breaking() {
        assert!(!is_breaking_change(
            "feat: new api\n\nBREAKING CHANGE: removed old one",
            DEFAULT
        ));
    }

    #[test]
    fn test_marker_is_case_sensitive() {
        assert!(!is_breaking_change("breaking change: nope", DEFAULT));
    }

    #[test]
    fn test_custom_indicators() {
        let indicators = vec!["BREAKING CHANGE:".to_string(), "BREAKING-CHANGE:".to_string()];
        assert!(is_breaking_change("BREAKING-CHANGE: x", &indicators));
        assert!(!is_breaking_change("fix: x", &indicators));
    }

    #[test]
    fn test_empty_indicator_never_matches() {
        assert!(!is_breaking_change("fix: x", &[""]));
    }

    #[test]
    fn test_parse_bool_flag() {
        assert_eq!(parse_bool_flag("true"), Ok(true));
        assert_eq!(parse_bool_flag("1"), Ok(true));
        assert_eq!(parse_bool_flag("False"), Ok(false));
        assert_eq!(parse_bool_flag("0"), Ok(false));
        assert_eq!(
            parse_bool_flag("yes"),
            Err(ParseError::InvalidFlag("yes".to_string()))
        );
        assert!(parse_bool_flag("").is_err());
    }
}
