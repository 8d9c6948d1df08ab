//! Ready-made `on_failed_attempt` hooks.
//!
//! The engine itself never logs or counts; these produce hooks for callers
//! who want each rejected attempt surfaced through `tracing` or `metrics`.

use core::fmt::Display;

use metrics::counter;

use crate::engine::FailedAttempt;

/// A hook that logs each rejected attempt at warn level.
pub fn log_failed_attempts<T, E: Display>(
    operation: impl Into<String>,
) -> impl FnMut(FailedAttempt<'_, T, E>) + Send {
    let operation = operation.into();
    move |attempt| match attempt.last_error {
        Some(error) => tracing::warn!(
            operation = %operation,
            attempt = attempt.attempt,
            remaining = attempt.remaining,
            error = %error,
            "Attempt failed, retrying"
        ),
        None => tracing::warn!(
            operation = %operation,
            attempt = attempt.attempt,
            remaining = attempt.remaining,
            "Retry condition unfulfilled, retrying"
        ),
    }
}

/// A hook that increments `metric` once per rejected attempt.
pub fn count_failed_attempts<T, E>(
    metric: &'static str,
) -> impl FnMut(FailedAttempt<'_, T, E>) + Send {
    move |_| counter!(metric).increment(1)
}
