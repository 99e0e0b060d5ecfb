// error.rs — The engine's failure taxonomy.
//
// Three structurally distinct kinds so callers can branch without string
// matching:
//
// - PreconditionFailed: the run never started; nothing was written to the
//   review surface. Not transient, never retried.
// - GuidelinesNotMet: the run finished, both the failure status and the
//   itemized comment were written, and the submission was rejected.
// - ExternalCallExhausted: a retried surface write failed on every attempt.
//   Takes precedence over GuidelinesNotMet when the final report itself
//   cannot be written.

use thiserror::Error;

use crate::surface::SurfaceError;

/// A precondition rejected the submission before any guideline ran.
#[derive(Debug, Error)]
pub enum Precondition {
    #[error("submission #{number} is not open")]
    SubmissionNotOpen { number: u64 },

    #[error("author '{author}' is not authorized for automatic review")]
    AuthorNotAuthorized { author: String },
}

/// Errors surfaced by [`crate::Evaluator::evaluate_new_submission`].
#[derive(Debug, Error)]
pub enum EvaluationError {
    /// Rejected before any external write.
    #[error("precondition failed: {0}")]
    PreconditionFailed(#[from] Precondition),

    /// One or more guidelines failed; status and comment were written.
    #[error("{failed} of {total} guidelines not met for {package} {version}")]
    GuidelinesNotMet {
        package: String,
        version: String,
        failed: usize,
        total: usize,
    },

    /// A retried review-surface write failed on every attempt.
    #[error("'{operation}' failed after {attempts} attempts")]
    ExternalCallExhausted {
        operation: &'static str,
        attempts: u32,
        #[source]
        source: SurfaceError,
    },
}

impl From<crate::retry::Exhausted<SurfaceError>> for EvaluationError {
    fn from(err: crate::retry::Exhausted<SurfaceError>) -> Self {
        EvaluationError::ExternalCallExhausted {
            operation: err.operation,
            attempts: err.attempts,
            source: err.source,
        }
    }
}
