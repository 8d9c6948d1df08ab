use core::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::RetryConfig;

/// Declarative form of [`RetryConfig`], for configuration files and
/// environment-driven setups.
///
/// The retry condition cannot be expressed declaratively and stays a code
/// argument of [`RetrySettings::into_config`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RetrySettings {
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    #[serde(default)]
    pub backoff: BackoffKind,
    #[serde(default)]
    pub base_delay_ms: u64,
    #[serde(default)]
    pub max_delay_ms: Option<u64>,
    #[serde(default)]
    pub exhausted_error: bool,
    #[serde(default)]
    pub operation_name: Option<String>,
}

fn default_max_retries() -> u32 {
    2
}

impl Default for RetrySettings {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            backoff: BackoffKind::None,
            base_delay_ms: 0,
            max_delay_ms: None,
            exhausted_error: false,
            operation_name: None,
        }
    }
}

/// The built-in delay strategies by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackoffKind {
    #[default]
    None,
    Fixed,
    Linear,
    Exponential,
}

impl RetrySettings {
    /// Materializes a [`RetryConfig`] with the given retry condition.
    pub fn into_config<T, E>(
        self,
        retry_when: impl FnMut(Option<&T>, Option<&E>) -> bool + Send + 'static,
    ) -> RetryConfig<T, E> {
        let base = Duration::from_millis(self.base_delay_ms);
        let mut config = RetryConfig::new(retry_when).retries(self.max_retries);
        config = match self.backoff {
            BackoffKind::None => config.no_backoff(),
            BackoffKind::Fixed => config.fixed_backoff(base),
            BackoffKind::Linear => config.linear_backoff(base),
            BackoffKind::Exponential => config.exponential_backoff(base),
        };
        if let Some(max_delay_ms) = self.max_delay_ms {
            config = config.max_delay(Duration::from_millis(max_delay_ms));
        }
        if self.exhausted_error {
            config = config.exhausted_error();
        }
        if let Some(name) = self.operation_name {
            config = config.operation_name(name);
        }
        config
    }
}
