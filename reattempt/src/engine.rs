//! The retry loop: invoke, consult the retry condition, notify, spend the
//! budget, back off, resolve.

use core::fmt::Display;
use core::future::Future;
use std::any;

use crate::config::RetryConfig;
use crate::error::{BudgetExhausted, RetryError};

/// Snapshot of an attempt the retry condition rejected, passed to the
/// `on_failed_attempt` hook.
#[derive(Debug, Clone, Copy)]
pub struct FailedAttempt<'a, T, E> {
    /// 1-based number of the rejected attempt.
    pub attempt: u32,
    /// Retries left in the budget; exactly 0 on the attempt that exhausts it.
    pub remaining: u32,
    /// Result of the most recent successful attempt, if any.
    pub last_result: Option<&'a T>,
    /// Error of this attempt, if it failed.
    pub last_error: Option<&'a E>,
}

/// State owned by a single `run`; never shared across invocations.
struct AttemptState<T, E> {
    attempts: u32,
    last_result: Option<T>,
    last_error: Option<E>,
    exhausted: bool,
}

impl<T, E> AttemptState<T, E> {
    fn new() -> Self {
        Self {
            attempts: 0,
            last_result: None,
            last_error: None,
            exhausted: false,
        }
    }
}

impl<T, E: Display> RetryConfig<T, E> {
    /// Runs `operation` until the retry condition is satisfied or the
    /// attempt budget runs out.
    ///
    /// The condition is consulted after every attempt, the first included;
    /// returning false stops the loop immediately and resolves to that
    /// attempt's outcome, whatever the remaining budget. The backoff
    /// strategy is consulted only when another attempt will actually run.
    ///
    /// ```ignore
    /// let history = RetryConfig::on_any_error()
    ///     .retries(30)
    ///     .exponential_backoff(Duration::from_secs(1))
    ///     .run(|| fetch_account_match_history(http_client, account))
    ///     .await?;
    /// ```
    pub async fn run<F, Fut>(&mut self, mut operation: F) -> Result<T, RetryError<E>>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let mut state = AttemptState::new();
        loop {
            match operation().await {
                Ok(value) => {
                    state.last_result = Some(value);
                    state.last_error = None;
                }
                // A failed attempt does not reset the previous result.
                Err(error) => state.last_error = Some(error),
            }
            if !(self.retry_when)(state.last_result.as_ref(), state.last_error.as_ref()) {
                break;
            }
            if let Some(hook) = self.on_failed_attempt.as_mut() {
                hook(FailedAttempt {
                    attempt: state.attempts + 1,
                    remaining: self.max_retries - state.attempts,
                    last_result: state.last_result.as_ref(),
                    last_error: state.last_error.as_ref(),
                });
            }
            let had_budget = state.attempts < self.max_retries;
            state.attempts += 1;
            if !had_budget {
                state.exhausted = true;
                break;
            }
            let mut delay = (self.backoff)(state.attempts, state.last_error.as_ref());
            if let Some(max_delay) = self.max_delay
                && !max_delay.is_zero()
            {
                delay = delay.min(max_delay);
            }
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
        }

        if state.exhausted && self.exhausted_error {
            let operation_name = self
                .operation_name
                .clone()
                .unwrap_or_else(|| any::type_name::<F>().to_owned());
            return Err(RetryError::Exhausted(BudgetExhausted::new(
                operation_name,
                state.attempts,
                state.last_error,
            )));
        }
        match (state.last_error, state.last_result) {
            (Some(error), _) => Err(RetryError::Operation(error)),
            (None, Some(value)) => Ok(value),
            // The loop body always records a result or an error first.
            (None, None) => unreachable!("retry loop exited before any attempt"),
        }
    }
}
