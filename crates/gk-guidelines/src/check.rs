// check.rs — Collaborator seams: guideline predicates and the registry view.
//
// The engine owns sequencing and reporting; the actual rule logic lives
// behind these traits. A predicate is a pure function over one immutable
// submission snapshot plus a read-only registry view. Predicates must not
// panic for well-formed input and must not perform writes — the expensive
// dynamic checks may read the network (install/load probes), but they never
// change observable state.

use serde::{Deserialize, Serialize};

use crate::submission::Submission;

/// A single predicate verdict: pass, or fail with an explanatory message.
///
/// The message is empty exactly when the check passed; failing messages are
/// quoted verbatim in the review comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutcome {
    pub passed: bool,
    pub message: String,
}

impl CheckOutcome {
    pub fn pass() -> Self {
        Self {
            passed: true,
            message: String::new(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            message: message.into(),
        }
    }
}

/// Read-only view of the target registry's current state.
///
/// Used by the dependency, name-distance, and install/load predicates.
/// Implementations are external collaborators (a registry clone, an API
/// client); tests use in-memory fixtures.
pub trait RegistrySnapshot {
    /// Names of packages already registered, excluding generated packages.
    fn package_names(&self) -> Vec<String>;

    /// Whether a package with the given name is already registered.
    fn has_package(&self, name: &str) -> bool {
        self.package_names().iter().any(|n| n == name)
    }
}

/// Everything a predicate may look at.
#[derive(Clone, Copy)]
pub struct EvaluationContext<'a> {
    pub submission: &'a Submission,
    pub registry: &'a dyn RegistrySnapshot,
}

/// One guideline predicate, supplied by an external collaborator.
///
/// Implemented for any `Fn(&EvaluationContext) -> CheckOutcome`, so tests
/// and call sites can pass plain closures.
pub trait GuidelineCheck: Send + Sync {
    fn evaluate(&self, cx: &EvaluationContext<'_>) -> CheckOutcome;
}

impl<F> GuidelineCheck for F
where
    F: Fn(&EvaluationContext<'_>) -> CheckOutcome + Send + Sync,
{
    fn evaluate(&self, cx: &EvaluationContext<'_>) -> CheckOutcome {
        self(cx)
    }
}
