//! Default timings.
//!
//! The readiness wait and polling bounds were picked empirically on real
//! boards; transports take them through their config structs so callers
//! can override them.

use std::time::Duration;

/// How long the polling transport waits for the readiness line.
pub const DEFAULT_READY_TIMEOUT_MS: u64 = 15_000;

/// Status-byte polls before giving up.
pub const DEFAULT_POLL_ATTEMPTS: usize = 100;

/// Sleep between status-byte polls.
pub const DEFAULT_POLL_BACKOFF_MS: u64 = 10;

/// Length-byte peeks on the stream transport (~15 s with the default backoff).
pub const DEFAULT_STREAM_ATTEMPTS: usize = 1_500;

/// Reset line low time.
pub const DEFAULT_RESET_HOLD_MS: u64 = 10;
/// Settle time after reset.
pub const DEFAULT_RESET_SETTLE_MS: u64 = 10;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Default bound on the readiness-line wait.
pub fn default_ready_timeout() -> Duration {
    ms(DEFAULT_READY_TIMEOUT_MS)
}
