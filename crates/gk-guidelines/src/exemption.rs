// exemption.rs — Exemption resolution for generated-package submissions.
//
// The narrow `generated_authors` tier gets relaxed naming guidelines, but
// only for submissions that actually match the generated naming pattern.
// The asymmetry is deliberate: a narrow-tier author submitting an ordinary
// package is evaluated as a normal author, and if they are not also in the
// general tier the authorization precondition rejects them outright.

use serde::{Deserialize, Serialize};

use crate::config::AuthConfig;

/// Whether the relaxed-guideline exemption applies to this run.
///
/// Computed once per evaluation run and consumed by the catalog to resolve
/// `UnlessExempt` slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExemptionDecision {
    pub granted: bool,
}

/// Resolve the exemption for one submission.
///
/// Granted only when the declared identity matches the generated naming
/// pattern AND the author is in the narrow generated tier.
pub fn resolve(author: &str, is_generated: bool, auth: &AuthConfig) -> ExemptionDecision {
    let granted = is_generated && auth.is_generated_author(author);
    if granted {
        tracing::debug!(author, "generated-package exemption granted");
    }
    ExemptionDecision { granted }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth() -> AuthConfig {
        AuthConfig {
            authorized_authors: vec!["alice".to_string()],
            generated_authors: vec!["wrapper-bot".to_string()],
            generated_name_pattern: "*_bin".to_string(),
        }
    }

    #[test]
    fn granted_for_generated_submission_by_narrow_tier() {
        let decision = resolve("wrapper-bot", true, &auth());
        assert!(decision.granted);
    }

    #[test]
    fn not_granted_for_general_tier_author() {
        // General-tier authors never get the relaxed guidelines, even for
        // generated-pattern names.
        let decision = resolve("alice", true, &auth());
        assert!(!decision.granted);
    }

    #[test]
    fn not_granted_for_ordinary_submission_by_narrow_tier() {
        let decision = resolve("wrapper-bot", false, &auth());
        assert!(!decision.granted);
    }

    #[test]
    fn not_granted_for_unknown_author() {
        let decision = resolve("mallory", true, &auth());
        assert!(!decision.granted);
    }
}
