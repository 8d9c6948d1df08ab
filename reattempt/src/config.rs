use core::time::Duration;

use crate::backoff::{self, BackoffFn};
use crate::condition::ConditionFn;
use crate::engine::FailedAttempt;

/// Boxed per-attempt notification hook.
pub type OnFailedAttempt<T, E> = Box<dyn FnMut(FailedAttempt<'_, T, E>) + Send>;

/// Per-invocation retry configuration.
///
/// The retry condition is the only required piece and is taken by the
/// constructor; everything else has a default. `max_retries` counts retries
/// beyond the first attempt, so the operation runs at most
/// `max_retries + 1` times.
pub struct RetryConfig<T, E> {
    pub(crate) max_retries: u32,
    pub(crate) exhausted_error: bool,
    pub(crate) operation_name: Option<String>,
    pub(crate) max_delay: Option<Duration>,
    pub(crate) retry_when: ConditionFn<T, E>,
    pub(crate) backoff: BackoffFn<E>,
    pub(crate) on_failed_attempt: Option<OnFailedAttempt<T, E>>,
}

impl<T, E> RetryConfig<T, E> {
    /// A configuration with the given retry condition, 2 retries and no
    /// delay between attempts.
    pub fn new(retry_when: impl FnMut(Option<&T>, Option<&E>) -> bool + Send + 'static) -> Self {
        Self {
            max_retries: 2,
            exhausted_error: false,
            operation_name: None,
            max_delay: None,
            retry_when: Box::new(retry_when),
            backoff: backoff::none(),
            on_failed_attempt: None,
        }
    }

    /// Shorthand for [`RetryConfig::new`] with
    /// [`condition::on_any_error`](crate::condition::on_any_error).
    pub fn on_any_error() -> Self {
        Self::new(|_: Option<&T>, error: Option<&E>| error.is_some())
    }

    /// Retries allowed beyond the first attempt.
    pub fn retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Fail with [`BudgetExhausted`](crate::BudgetExhausted) when the budget
    /// runs out, instead of surfacing the last result or error.
    pub fn exhausted_error(mut self) -> Self {
        self.exhausted_error = true;
        self
    }

    /// Label used in diagnostics; defaults to the operation's type name.
    pub fn operation_name(mut self, name: impl Into<String>) -> Self {
        self.operation_name = Some(name.into());
        self
    }

    /// Upper clamp on each computed delay. Ignored when zero.
    pub fn max_delay(mut self, max_delay: Duration) -> Self {
        self.max_delay = Some(max_delay);
        self
    }

    pub fn no_backoff(mut self) -> Self {
        self.backoff = backoff::none();
        self
    }

    pub fn fixed_backoff(mut self, base: Duration) -> Self {
        self.backoff = backoff::fixed(base);
        self
    }

    pub fn linear_backoff(mut self, base: Duration) -> Self {
        self.backoff = backoff::linear(base);
        self
    }

    pub fn exponential_backoff(mut self, base: Duration) -> Self {
        self.backoff = backoff::exponential(base);
        self
    }

    /// Custom delay strategy; see [`backoff::BackoffFn`] for the contract.
    pub fn custom_backoff(
        mut self,
        backoff: impl FnMut(u32, Option<&E>) -> Duration + Send + 'static,
    ) -> Self {
        self.backoff = Box::new(backoff);
        self
    }

    /// Hook fired once per attempt the retry condition rejected, the final
    /// budget-exhausting one included. The hook observes; it cannot steer
    /// the loop.
    pub fn on_failed_attempt(
        mut self,
        hook: impl FnMut(FailedAttempt<'_, T, E>) + Send + 'static,
    ) -> Self {
        self.on_failed_attempt = Some(Box::new(hook));
        self
    }
}
