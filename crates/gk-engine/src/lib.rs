//! # gk-engine
//!
//! Evaluation orchestrator for Gatekeeper.
//!
//! The [`Evaluator`] runs the guideline catalog against one submission
//! snapshot and reports the decision to an external review surface:
//!
//! 1. Preconditions (submission open, author authorized) — rejected
//!    submissions produce a typed error before any external write.
//! 2. `pending` status posted.
//! 3. Static guidelines evaluated; an intermediate `failure` status gives
//!    fast feedback when any fail.
//! 4. Dynamic guidelines always evaluated — full diagnostics beat fail-fast.
//! 5. Final status and review comment written, both retried and idempotent.
//!
//! ## Key invariants
//!
//! - **No write before preconditions**: closed or unauthorized submissions
//!   never touch the review surface.
//! - **Full diagnostics**: phase 2 runs even when phase 1 already failed.
//! - **Typed failures**: precondition rejection, guideline rejection, and
//!   retry exhaustion are distinct error kinds — callers branch without
//!   string matching.

pub mod engine;
pub mod error;
pub mod report;
pub mod retry;
pub mod surface;

pub use engine::Evaluator;
pub use error::{EvaluationError, Precondition};
pub use retry::{retry, Exhausted, RetryPolicy};
pub use surface::{ReviewSurface, StatusState, SurfaceError};
