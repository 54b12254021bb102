use crate::{EventSink, SyncEvent};

use dash_client::ClientError;
use dash_config::RetryConfig;

use std::time::Duration;

use tokio::time::sleep;

/// Fixed-delay retry budget for refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the initial attempt
    pub max_retries: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from(&RetryConfig::default())
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(config: &RetryConfig) -> Self {
        Self {
            max_retries: config.max_retries,
            delay: config.delay(),
        }
    }
}

impl RetryPolicy {
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            delay: Duration::ZERO,
        }
    }
}

/// Trait for errors that can indicate retryability
pub trait IsRetryable {
    fn is_retryable(&self) -> bool;
}

impl IsRetryable for ClientError {
    fn is_retryable(&self) -> bool {
        ClientError::is_retryable(self)
    }
}

/// Why [`with_retry`] gave up.
#[derive(Debug)]
pub enum RetryError<E> {
    /// At least one retry happened and every attempt failed retryably.
    Exhausted { attempts: u32, last: E },
    /// Non-retryable failure, or a retryable one with no retries allowed.
    Failed { attempts: u32, error: E },
}

impl<E> RetryError<E> {
    pub fn attempts(&self) -> u32 {
        match self {
            Self::Exhausted { attempts, .. } | Self::Failed { attempts, .. } => *attempts,
        }
    }

    pub fn into_inner(self) -> E {
        match self {
            Self::Exhausted { last, .. } => last,
            Self::Failed { error, .. } => error,
        }
    }
}

/// Execute an async operation with retry logic
///
/// Retries only errors reporting [`IsRetryable::is_retryable`], waiting
/// `policy.delay` before each retry, and at most `policy.max_retries` times.
pub async fn with_retry<F, Fut, T, E>(
    policy: &RetryPolicy,
    operation_name: &'static str,
    events: &dyn EventSink,
    mut operation: F,
) -> Result<T, RetryError<E>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display + IsRetryable,
{
    let mut attempts = 0;

    loop {
        attempts += 1;

        match operation().await {
            Ok(result) => {
                if attempts > 1 {
                    events.emit(SyncEvent::Recovered {
                        operation: operation_name,
                        attempts,
                    });
                }
                return Ok(result);
            }
            Err(e) => {
                events.emit(SyncEvent::AttemptFailed {
                    operation: operation_name,
                    attempt: attempts,
                    error: e.to_string(),
                });

                if !e.is_retryable() {
                    return Err(RetryError::Failed { attempts, error: e });
                }

                let retries_used = attempts - 1;
                if retries_used >= policy.max_retries {
                    return Err(if retries_used == 0 {
                        RetryError::Failed { attempts, error: e }
                    } else {
                        RetryError::Exhausted { attempts, last: e }
                    });
                }

                events.emit(SyncEvent::RetryScheduled {
                    operation: operation_name,
                    attempt: attempts,
                    delay: policy.delay,
                });

                sleep(policy.delay).await;
            }
        }
    }
}
