// engine.rs — The evaluation orchestrator.
//
// One run processes one submission snapshot, in program order:
//
// 1. Preconditions: submission open, author authorized → typed rejection
//    with no external write of any kind.
// 2. Post `pending` status.
// 3. Resolve the generated-package exemption once.
// 4. Phase 1 (static guidelines); on any failure, post an intermediate
//    `failure` status for fast feedback — but keep going.
// 5. Phase 2 (dynamic guidelines) always runs: install/load diagnostics are
//    valuable even when phase 1 already failed.
// 6. Aggregate, compose the report, post the final status and comment.
//
// Every surface write goes through the retry wrapper; retry exhaustion
// surfaces as ExternalCallExhausted and takes precedence over
// GuidelinesNotMet.

use uuid::Uuid;

use gk_guidelines::{
    exemption, AuthConfig, Catalog, EvaluationContext, EvaluationOutcome, Phase, RegistrySnapshot,
    Submission,
};

use crate::error::{EvaluationError, Precondition};
use crate::report;
use crate::retry::{retry, RetryPolicy};
use crate::surface::{ReviewSurface, StatusState};

/// The evaluation orchestrator — the single chokepoint for deciding and
/// reporting whether a submission is auto-approved.
pub struct Evaluator<'a> {
    catalog: &'a Catalog,
    auth: &'a AuthConfig,
    surface: &'a dyn ReviewSurface,
    registry: &'a dyn RegistrySnapshot,
    retry: RetryPolicy,
}

impl<'a> Evaluator<'a> {
    pub fn new(
        catalog: &'a Catalog,
        auth: &'a AuthConfig,
        surface: &'a dyn ReviewSurface,
        registry: &'a dyn RegistrySnapshot,
    ) -> Self {
        Self {
            catalog,
            auth,
            surface,
            registry,
            retry: RetryPolicy::default(),
        }
    }

    /// Override the retry budget for surface writes.
    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry = policy;
        self
    }

    /// Evaluate one new-package submission end to end.
    ///
    /// On `Ok`, the surface shows a `success` status and the pass comment.
    /// On `GuidelinesNotMet`, the surface shows a `failure` status and the
    /// itemized comment. On a precondition rejection, the surface was not
    /// touched at all.
    pub fn evaluate_new_submission(
        &self,
        submission: &Submission,
    ) -> Result<EvaluationOutcome, EvaluationError> {
        let run_id = Uuid::new_v4();
        tracing::info!(
            %run_id,
            number = submission.number,
            package = %submission.package,
            version = %submission.version,
            "starting automatic review"
        );

        if !submission.is_open() {
            tracing::info!(%run_id, "submission is not open, skipping");
            return Err(Precondition::SubmissionNotOpen {
                number: submission.number,
            }
            .into());
        }
        // The narrow generated tier only authorizes generated-pattern
        // submissions, so the kind is resolved before the authorization
        // precondition.
        let is_generated = self.auth.is_generated_name(&submission.package);
        if !self.auth.is_authorized(&submission.author, is_generated) {
            tracing::info!(%run_id, author = %submission.author, "author not authorized");
            return Err(Precondition::AuthorNotAuthorized {
                author: submission.author.clone(),
            }
            .into());
        }

        self.post_status(submission, StatusState::Pending, report::PENDING_DESCRIPTION)?;

        let exemption = exemption::resolve(&submission.author, is_generated, self.auth);

        let cx = EvaluationContext {
            submission,
            registry: self.registry,
        };

        let mut results = self
            .catalog
            .evaluate_phase(Phase::Static, &cx, &exemption, is_generated);
        if results.iter().any(|r| !r.passed) {
            // Fast feedback before the expensive dynamic checks run. The
            // comment is only written once all diagnostics are in.
            tracing::info!(%run_id, "static guidelines failed, posting early failure status");
            self.post_status(submission, StatusState::Failure, report::FAILURE_DESCRIPTION)?;
        }

        // Dynamic checks always run: their diagnostics are wanted even when
        // the static phase already failed.
        results.extend(
            self.catalog
                .evaluate_phase(Phase::Dynamic, &cx, &exemption, is_generated),
        );

        let outcome = EvaluationOutcome::new(run_id, results);
        if outcome.overall_pass() {
            let description = report::success_description(&submission.package, &submission.head_sha);
            self.post_status(submission, StatusState::Success, &description)?;
            self.update_comment(
                submission,
                &report::pass_report(&submission.version, exemption.granted),
            )?;
            tracing::info!(%run_id, "all guidelines met, submission approved");
            Ok(outcome)
        } else {
            self.post_status(submission, StatusState::Failure, report::FAILURE_DESCRIPTION)?;
            let failing = outcome.failing();
            self.update_comment(submission, &report::fail_report(&failing))?;
            tracing::info!(%run_id, failed = failing.len(), "guidelines not met");
            Err(EvaluationError::GuidelinesNotMet {
                package: submission.package.clone(),
                version: submission.version.clone(),
                failed: failing.len(),
                total: outcome.results.len(),
            })
        }
    }

    fn post_status(
        &self,
        submission: &Submission,
        state: StatusState,
        description: &str,
    ) -> Result<(), EvaluationError> {
        retry(&self.retry, "post status", || {
            self.surface.post_status(&submission.head_sha, state, description)
        })?;
        Ok(())
    }

    fn update_comment(&self, submission: &Submission, body: &str) -> Result<(), EvaluationError> {
        retry(&self.retry, "update comment", || {
            self.surface.update_comment(submission.number, body)
        })?;
        Ok(())
    }
}
