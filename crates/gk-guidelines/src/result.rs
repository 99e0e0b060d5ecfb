// result.rs — Aggregated verdicts for one evaluation run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The verdict of one catalog slot for one run.
///
/// `index` and `name` identify the slot; `message` is non-empty exactly when
/// the slot failed. Produced once per run, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidelineResult {
    pub index: usize,
    pub name: String,
    pub passed: bool,
    pub message: String,
}

/// All verdicts of one evaluation run, in catalog order.
///
/// Serializable so runs can be audit-logged as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationOutcome {
    /// Identifier of the evaluation run that produced these results.
    pub run_id: Uuid,
    /// When aggregation happened.
    pub evaluated_at: DateTime<Utc>,
    /// One result per catalog slot, in catalog order.
    pub results: Vec<GuidelineResult>,
}

impl EvaluationOutcome {
    pub fn new(run_id: Uuid, results: Vec<GuidelineResult>) -> Self {
        Self {
            run_id,
            evaluated_at: Utc::now(),
            results,
        }
    }

    /// Logical AND of every slot's verdict.
    pub fn overall_pass(&self) -> bool {
        self.results.iter().all(|r| r.passed)
    }

    /// Failing results, in catalog order.
    pub fn failing(&self) -> Vec<&GuidelineResult> {
        self.results.iter().filter(|r| !r.passed).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(index: usize, name: &str, passed: bool, message: &str) -> GuidelineResult {
        GuidelineResult {
            index,
            name: name.to_string(),
            passed,
            message: message.to_string(),
        }
    }

    #[test]
    fn overall_pass_is_the_conjunction() {
        let outcome = EvaluationOutcome::new(
            Uuid::new_v4(),
            vec![result(0, "a", true, ""), result(1, "b", true, "")],
        );
        assert!(outcome.overall_pass());

        let outcome = EvaluationOutcome::new(
            Uuid::new_v4(),
            vec![result(0, "a", true, ""), result(1, "b", false, "nope")],
        );
        assert!(!outcome.overall_pass());
    }

    #[test]
    fn failing_preserves_catalog_order() {
        let outcome = EvaluationOutcome::new(
            Uuid::new_v4(),
            vec![
                result(0, "a", false, "first"),
                result(1, "b", true, ""),
                result(2, "c", false, "second"),
            ],
        );
        let failing = outcome.failing();
        assert_eq!(failing.len(), 2);
        assert_eq!(failing[0].message, "first");
        assert_eq!(failing[1].message, "second");
    }

    #[test]
    fn empty_outcome_passes() {
        let outcome = EvaluationOutcome::new(Uuid::new_v4(), vec![]);
        assert!(outcome.overall_pass());
        assert!(outcome.failing().is_empty());
    }

    #[test]
    fn outcome_serializes_for_audit_logging() {
        let outcome =
            EvaluationOutcome::new(Uuid::new_v4(), vec![result(0, "name-length", false, "short")]);
        let json = serde_json::to_string(&outcome).unwrap();
        assert!(json.contains("\"name-length\""));
        let restored: EvaluationOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.results, outcome.results);
    }
}
