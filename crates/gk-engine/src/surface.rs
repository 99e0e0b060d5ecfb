// surface.rs — The external review surface.
//
// The review surface is where humans watch the decision land: a commit
// status against the head revision, and one review comment per submission.
// Both writes are idempotent upserts — the engine may retry them, and
// concurrent runs race under last-writer-wins (the surface's own
// serialization, if any, is relied upon).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The tri-state status visible on the review surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusState {
    Pending,
    Failure,
    Success,
}

impl std::fmt::Display for StatusState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            StatusState::Pending => "pending",
            StatusState::Failure => "failure",
            StatusState::Success => "success",
        };
        f.write_str(s)
    }
}

/// A review-surface call failed (transport or API error).
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("review surface call failed: {0}")]
    Transport(String),
}

/// Client for the external review surface.
///
/// Both methods must be idempotent: invoking either twice with identical
/// arguments leaves external state equivalent to invoking it once. The
/// engine wraps every call in the retry wrapper on that assumption.
pub trait ReviewSurface {
    /// Post a status against a head revision. Re-posting the same state and
    /// description is a no-op on the surface.
    fn post_status(
        &self,
        head_sha: &str,
        state: StatusState,
        description: &str,
    ) -> Result<(), SurfaceError>;

    /// Create or replace the engine's review comment on a submission.
    fn update_comment(&self, submission_number: u64, body: &str) -> Result<(), SurfaceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_state_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&StatusState::Pending).unwrap(), "\"pending\"");
        assert_eq!(serde_json::to_string(&StatusState::Success).unwrap(), "\"success\"");
    }

    #[test]
    fn status_state_displays_lowercase() {
        assert_eq!(StatusState::Failure.to_string(), "failure");
    }
}
