//! Retry semantics for asynchronous operations.
//!
//! Re-invokes a fallible async operation until a retry condition is
//! satisfied, the condition says stop, or the attempt budget runs out. The
//! retry condition sees successful results as well as errors, so business
//! failures (a rate-limited response inside an `Ok`) can drive retries
//! without being turned into errors first.
//!
//! # Example
//!
//! ```ignore
//! use std::time::Duration;
//! use reattempt::RetryConfig;
//!
//! let salts = RetryConfig::on_any_error()
//!     .retries(30)
//!     .fixed_backoff(Duration::from_secs(1))
//!     .run(|| fetch_salts(match_id))
//!     .await?;
//! ```

pub mod backoff;
pub mod condition;
mod config;
mod engine;
mod error;
pub mod observe;
mod settings;
mod wrap;

pub use backoff::BackoffFn;
pub use condition::{ConditionFn, RetryWhen};
pub use config::{OnFailedAttempt, RetryConfig};
pub use engine::FailedAttempt;
pub use error::{BudgetExhausted, RetryError};
pub use settings::{BackoffKind, RetrySettings};
pub use wrap::{Retryable, wrap};
