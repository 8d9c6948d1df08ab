use core::fmt::Display;

use thiserror::Error;

/// Error channel of the retry engine.
#[derive(Error, Debug)]
pub enum RetryError<E> {
    /// The last captured operation error, propagated unchanged.
    #[error("{0}")]
    Operation(E),
    /// The attempt budget ran out while the retry condition still wanted
    /// another attempt. Only produced when the configuration asks for it.
    #[error("{0}")]
    Exhausted(BudgetExhausted<E>),
}

impl<E> RetryError<E> {
    /// The underlying operation error, from either variant.
    pub fn into_inner(self) -> Option<E> {
        match self {
            Self::Operation(error) => Some(error),
            Self::Exhausted(exhausted) => exhausted.into_cause(),
        }
    }
}

/// The attempt budget was exhausted.
///
/// Carries the operation name, the number of attempts consumed and the error
/// captured on the final attempt, if there was one. The message is fixed at
/// construction.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct BudgetExhausted<E> {
    message: String,
    operation: String,
    attempts: u32,
    cause: Option<E>,
}

impl<E: Display> BudgetExhausted<E> {
    pub(crate) fn new(operation: String, attempts: u32, cause: Option<E>) -> Self {
        let message = match &cause {
            Some(error) => format!(
                "Max re-attempts of {attempts} reached for operation \"{operation}\". Caused by thrown error: {error}"
            ),
            None => format!(
                "Max re-attempts of {attempts} reached for operation \"{operation}\". Caused by: unfulfilled retry condition"
            ),
        };
        Self {
            message,
            operation,
            attempts,
            cause,
        }
    }
}

impl<E> BudgetExhausted<E> {
    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// Attempts consumed, the first invocation included.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// The error captured on the final attempt, if the final attempt failed.
    pub fn cause(&self) -> Option<&E> {
        self.cause.as_ref()
    }

    pub fn into_cause(self) -> Option<E> {
        self.cause
    }
}
