// libpn532/src/transport/mod.rs

//! Transports move raw frames between the host and the chip.
//!
//! [`PollingTransport`] suits status-gated packet buses (I2C),
//! [`StreamTransport`] buffered serial links (HSU). Both are built from
//! caller-supplied primitives in [`traits`].

pub mod mock;
pub mod polling;
pub mod stream;
pub mod traits;

pub use mock::{MockBus, MockDelay, MockLine, MockStream, MockTransport};
pub use polling::{PollingConfig, PollingTransport};
pub use stream::{IoStream, StreamConfig, StreamTransport};
pub use traits::{Bus, ByteStream, Delay, DigitalLine, Level, StdDelay, Transport};

/// Hex-dump raw wire bytes at trace level.
#[cfg(feature = "diagnostics")]
pub(crate) fn trace_frame(dir: &str, bytes: &[u8]) {
    log::trace!("{} {}", dir, crate::utils::bytes_to_hex_spaced(bytes));
}

#[cfg(not(feature = "diagnostics"))]
#[inline(always)]
pub(crate) fn trace_frame(_dir: &str, _bytes: &[u8]) {}
