//! Bounded retry with a fixed backoff, shared by both transports.

use std::time::Duration;

use crate::Result;
use crate::transport::Delay;

/// Attempt bound and sleep between attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Attempts before giving up.
    pub max_attempts: usize,
    /// Sleep between attempts.
    pub backoff: Duration,
}

impl RetryPolicy {
    /// Policy of `max_attempts` tries, `backoff` apart.
    pub fn new(max_attempts: usize, backoff: Duration) -> Self {
        Self {
            max_attempts,
            backoff,
        }
    }
}

/// Call `attempt` until it yields `Some`, sleeping `policy.backoff` after
/// each miss. Returns `Ok(None)` once `policy.max_attempts` calls have
/// missed. Errors from `attempt` abort immediately.
pub fn retry_with_backoff<T, F>(
    policy: &RetryPolicy,
    delay: &mut dyn Delay,
    mut attempt: F,
) -> Result<Option<T>>
where
    F: FnMut(usize) -> Result<Option<T>>,
{
    for n in 0..policy.max_attempts {
        if let Some(value) = attempt(n)? {
            return Ok(Some(value));
        }
        log::trace!("attempt {}/{} missed", n + 1, policy.max_attempts);
        if n + 1 < policy.max_attempts {
            delay.delay(policy.backoff);
        }
    }
    Ok(None)
}
