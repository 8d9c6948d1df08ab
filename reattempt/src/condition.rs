//! Retry conditions: decide, after each attempt, whether another one is
//! wanted. A condition sees the last successful result alongside the last
//! error, so it doubles as the success test.

/// Boxed retry condition as stored in a [`RetryConfig`](crate::RetryConfig).
pub type ConditionFn<T, E> = Box<dyn FnMut(Option<&T>, Option<&E>) -> bool + Send>;

/// Retry whenever the last attempt failed.
pub fn on_any_error<T, E>() -> ConditionFn<T, E> {
    Box::new(|_, error| error.is_some())
}

/// Retry unconditionally; only the attempt budget stops the loop.
pub fn always<T, E>() -> ConditionFn<T, E> {
    Box::new(|_, _| true)
}

/// Retry when the last attempt neither failed nor produced a value.
///
/// For operations whose success type is an `Option`: an absent result or a
/// successful `None` both count as empty.
pub fn on_none_result<U, E>() -> ConditionFn<Option<U>, E> {
    Box::new(|result, error| error.is_none() && !matches!(result, Some(Some(_))))
}

/// Accumulator for composite retry conditions.
///
/// Registered rules are OR-combined: the built condition is true as soon as
/// any error rule matches the last error or any result rule matches the last
/// result. With no rules registered it never retries.
///
/// ```ignore
/// let retry_when = RetryWhen::new()
///     .on_result(|status: &u16| *status == 429)
///     .on_error_type::<std::io::Error>()
///     .build();
/// ```
pub struct RetryWhen<T, E> {
    error_rules: Vec<Box<dyn FnMut(&E) -> bool + Send>>,
    result_rules: Vec<Box<dyn FnMut(&T) -> bool + Send>>,
}

impl<T, E> Default for RetryWhen<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> RetryWhen<T, E> {
    pub fn new() -> Self {
        Self {
            error_rules: Vec::new(),
            result_rules: Vec::new(),
        }
    }

    /// Registers a rule over the last error.
    pub fn on_error(mut self, rule: impl FnMut(&E) -> bool + Send + 'static) -> Self {
        self.error_rules.push(Box::new(rule));
        self
    }

    /// Registers a rule over the last result.
    pub fn on_result(mut self, rule: impl FnMut(&T) -> bool + Send + 'static) -> Self {
        self.result_rules.push(Box::new(rule));
        self
    }

    /// Produces the condition suitable for [`RetryConfig::new`](crate::RetryConfig::new).
    pub fn build(mut self) -> ConditionFn<T, E>
    where
        T: 'static,
        E: 'static,
    {
        Box::new(move |result, error| {
            if let Some(error) = error
                && self.error_rules.iter_mut().any(|rule| rule(error))
            {
                return true;
            }
            if let Some(result) = result
                && self.result_rules.iter_mut().any(|rule| rule(result))
            {
                return true;
            }
            false
        })
    }
}

impl<T> RetryWhen<T, anyhow::Error> {
    /// Registers retry on a specific underlying error type.
    pub fn on_error_type<Target>(self) -> Self
    where
        Target: std::error::Error + Send + Sync + 'static,
    {
        self.on_error(|error: &anyhow::Error| error.is::<Target>())
    }
}
