//! # gk-guidelines
//!
//! Submission model, guideline catalog, and exemption rules for Gatekeeper.
//!
//! A [`Catalog`] is an immutable ordered list of guideline slots. Each slot
//! names one acceptance rule for a registry submission and carries an
//! externally supplied predicate (a [`GuidelineCheck`]). The engine crate
//! resolves every slot against a [`Submission`] snapshot and aggregates the
//! verdicts into an [`EvaluationOutcome`].
//!
//! ## Key invariants
//!
//! - **Catalog order is report order**: slots are evaluated and reported in
//!   their declared order; predicates never depend on one another.
//! - **Full diagnostics**: resolution never short-circuits — every slot
//!   produces a [`GuidelineResult`] even when earlier slots already failed.
//! - **Exemption is narrow**: relaxed naming rules apply only to
//!   generated-pattern submissions from the narrow authorized set.

pub mod catalog;
pub mod check;
pub mod config;
pub mod exemption;
pub mod result;
pub mod submission;

pub use catalog::{Applicability, Catalog, GuidelineSlot, Phase, StandardChecks};
pub use check::{CheckOutcome, EvaluationContext, GuidelineCheck, RegistrySnapshot};
pub use config::{AuthConfig, ConfigError};
pub use exemption::ExemptionDecision;
pub use result::{EvaluationOutcome, GuidelineResult};
pub use submission::{parse_registration_title, Submission, SubmissionState, TitleError};
