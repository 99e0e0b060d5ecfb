// retry.rs — Bounded retry for external writes.
//
// Every review-surface write goes through retry() so a transient network
// error does not abort an otherwise-finished evaluation. Operations must be
// idempotent: posting the same status or comment twice is safe, and retry()
// may invoke the operation up to max_attempts times.

use std::time::Duration;

use thiserror::Error;

/// Bounded retry budget for one external operation.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Total invocation budget (not "retries after the first").
    pub max_attempts: u32,
    /// Sleep between attempts.
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    /// A policy that never sleeps — for tests.
    pub fn immediate(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            delay: Duration::ZERO,
        }
    }
}

/// A retried operation failed on every attempt.
///
/// Carries the last failure unmodified as the error source.
#[derive(Debug, Error)]
#[error("'{operation}' failed after {attempts} attempts: {source}")]
pub struct Exhausted<E: std::error::Error + 'static> {
    pub operation: &'static str,
    pub attempts: u32,
    #[source]
    pub source: E,
}

/// Run `op` until it succeeds or the attempt budget is spent.
///
/// Returns the first success value, or [`Exhausted`] wrapping the last
/// failure. A `max_attempts` of zero is treated as one attempt.
pub fn retry<T, E, F>(policy: &RetryPolicy, operation: &'static str, mut op: F) -> Result<T, Exhausted<E>>
where
    E: std::error::Error + 'static,
    F: FnMut() -> Result<T, E>,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;
    loop {
        match op() {
            Ok(value) => return Ok(value),
            Err(err) if attempt >= max_attempts => {
                return Err(Exhausted {
                    operation,
                    attempts: max_attempts,
                    source: err,
                });
            }
            Err(err) => {
                tracing::warn!(
                    operation,
                    attempt,
                    max_attempts,
                    error = %err,
                    "external call failed, retrying"
                );
                std::thread::sleep(policy.delay);
                attempt += 1;
            }
        }
    }
}
