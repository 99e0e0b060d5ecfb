// submission.rs — Immutable submission snapshot and registration-title parsing.
//
// A Submission is a point-in-time view of a proposed registry change. The
// engine never mutates it; callers re-fetch a fresh snapshot between runs.
// The declared package identity and version come from the submission title,
// which follows the fixed "Register <package> <version>" convention.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Open/closed state of a submission on the review surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionState {
    Open,
    Closed,
}

/// A point-in-time snapshot of a proposed registry change.
///
/// Immutable for the duration of one evaluation run. `head_sha` identifies
/// the exact revision the verdict applies to; statuses are posted against it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    /// Submission number on the review surface (comment updates target this).
    pub number: u64,
    /// Raw title, e.g. "Register Foo v1.2.3".
    pub title: String,
    /// Declared package identity, parsed from the title.
    pub package: String,
    /// Declared version, parsed from the title (leading "v" stripped).
    pub version: String,
    /// Head revision identifier (statuses are posted against this).
    pub head_sha: String,
    /// Submitter identity.
    pub author: String,
    /// Whether the submission is still open.
    pub state: SubmissionState,
}

impl Submission {
    pub fn is_open(&self) -> bool {
        self.state == SubmissionState::Open
    }
}

/// Errors from registration-title parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TitleError {
    /// The title does not match "Register <package> <version>".
    #[error("malformed registration title '{title}' (expected \"Register <package> <version>\")")]
    Malformed { title: String },
}

/// Parse a registration title into `(package, version)`.
///
/// The grammar is exactly three whitespace-separated tokens: the literal
/// `Register`, the package identity, and the version. The version may carry
/// a leading `v` (as in `v1.2.3`), which is stripped.
pub fn parse_registration_title(title: &str) -> Result<(String, String), TitleError> {
    fn malformed(title: &str) -> TitleError {
        TitleError::Malformed {
            title: title.to_string(),
        }
    }

    let mut tokens = title.split_whitespace();
    let keyword = tokens.next().ok_or_else(|| malformed(title))?;
    let package = tokens.next().ok_or_else(|| malformed(title))?;
    let version = tokens.next().ok_or_else(|| malformed(title))?;
    if keyword != "Register" || tokens.next().is_some() {
        return Err(malformed(title));
    }

    // "v1.2.3" and "1.2.3" are the same declared version.
    let version = match version.strip_prefix('v') {
        Some(rest) if rest.starts_with(|c: char| c.is_ascii_digit()) => rest,
        _ => version,
    };

    Ok((package.to_string(), version.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_title() {
        let (package, version) = parse_registration_title("Register Foo 1.2.3").unwrap();
        assert_eq!(package, "Foo");
        assert_eq!(version, "1.2.3");
    }

    #[test]
    fn strips_v_prefix() {
        let (_, version) = parse_registration_title("Register Foo v1.2.3").unwrap();
        assert_eq!(version, "1.2.3");
    }

    #[test]
    fn keeps_non_numeric_v_token() {
        // "vendored" is a (strange) version string, not a v-prefixed number.
        let (_, version) = parse_registration_title("Register Foo vendored").unwrap();
        assert_eq!(version, "vendored");
    }

    #[test]
    fn lone_v_is_kept_as_the_version() {
        // No digit follows, so nothing is stripped and the token survives
        // as-is; whether "v" resolves is the install predicate's problem.
        let (_, version) = parse_registration_title("Register Foo v").unwrap();
        assert_eq!(version, "v");
    }

    #[test]
    fn rejects_wrong_keyword() {
        let err = parse_registration_title("Unregister Foo 1.2.3").unwrap_err();
        assert!(matches!(err, TitleError::Malformed { .. }));
    }

    #[test]
    fn rejects_missing_tokens() {
        assert!(parse_registration_title("Register Foo").is_err());
        assert!(parse_registration_title("Register").is_err());
        assert!(parse_registration_title("").is_err());
    }

    #[test]
    fn rejects_trailing_tokens() {
        assert!(parse_registration_title("Register Foo 1.2.3 extra").is_err());
    }

    #[test]
    fn state_round_trips_through_serde() {
        let json = serde_json::to_string(&SubmissionState::Open).unwrap();
        assert_eq!(json, "\"open\"");
        let state: SubmissionState = serde_json::from_str("\"closed\"").unwrap();
        assert_eq!(state, SubmissionState::Closed);
    }
}
