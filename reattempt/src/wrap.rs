use core::fmt::Display;
use core::future::Future;
use std::any;

use crate::config::RetryConfig;
use crate::error::RetryError;

/// Binds an operation to a fixed retry configuration.
///
/// Every [`Retryable::call`] routes through the retry engine with the stored
/// configuration; when the configuration carries no operation name, the
/// operation's type name is used. Retry logic itself lives in
/// [`RetryConfig::run`] only.
pub fn wrap<F, Fut, T, E>(operation: F, mut config: RetryConfig<T, E>) -> Retryable<F, T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    if config.operation_name.is_none() {
        config.operation_name = Some(any::type_name::<F>().to_owned());
    }
    Retryable { operation, config }
}

/// An operation bound to its retry configuration, see [`wrap`].
pub struct Retryable<F, T, E> {
    operation: F,
    config: RetryConfig<T, E>,
}

impl<F, Fut, T, E> Retryable<F, T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    /// One transparent invocation of the wrapped operation.
    ///
    /// The configuration is shared across calls; attempt state is not, so
    /// every call starts with a full retry budget.
    pub async fn call(&mut self) -> Result<T, RetryError<E>> {
        let operation = &mut self.operation;
        self.config.run(|| operation()).await
    }
}
