//! Small helpers shared across the crate: hex rendering, default timings
//! and the bounded retry loop used by the transports.

pub mod hex;
pub mod retry;
pub mod timeout;

pub use self::hex::*;
pub use retry::{RetryPolicy, retry_with_backoff};
pub use timeout::*;
