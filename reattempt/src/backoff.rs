//! Delay strategies: pure functions from (attempts so far, last error) to a
//! wait duration. The engine clamps the computed value by `max_delay` and
//! only consults a strategy when another attempt will actually run.

use core::time::Duration;

/// Boxed delay strategy as stored in a [`RetryConfig`](crate::RetryConfig).
///
/// The last error is passed for error-sensitive strategies; the built-ins
/// ignore it.
pub type BackoffFn<E> = Box<dyn FnMut(u32, Option<&E>) -> Duration + Send>;

/// No waiting between attempts.
pub fn none<E>() -> BackoffFn<E> {
    Box::new(|_, _| Duration::ZERO)
}

/// The same `base` wait before every retry.
pub fn fixed<E>(base: Duration) -> BackoffFn<E> {
    Box::new(move |_, _| base)
}

/// `base` scaled by the number of attempts so far.
pub fn linear<E>(base: Duration) -> BackoffFn<E> {
    Box::new(move |attempts, _| base.saturating_mul(attempts))
}

/// Doubling backoff: `base` on the first retry, then 2x, 4x, 8x...
///
/// Attempt counts of at most 1 collapse to the base delay, so the exponent
/// never goes negative. The shift is capped at 31 and the multiply
/// saturates.
pub fn exponential<E>(base: Duration) -> BackoffFn<E> {
    Box::new(move |attempts, _| base.saturating_mul(1u32 << attempts.saturating_sub(1).min(31)))
}
