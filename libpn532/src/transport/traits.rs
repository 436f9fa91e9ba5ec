// libpn532/src/transport/traits.rs

//! Transport trait and the hardware primitives transports are built from.

use std::time::Duration;

use crate::Result;

/// Transport trait abstracts bus synchronisation away from the command
/// channel. Implementations move whole wire frames.
pub trait Transport {
    /// Write one encoded frame to the chip.
    fn write_frame(&mut self, frame: &[u8]) -> Result<()>;

    /// Read one frame of at most `max_size` bytes (header and footer
    /// included). Implementations may return trailing padding after the
    /// postamble.
    fn read_frame(&mut self, max_size: usize) -> Result<Vec<u8>>;

    /// Bring the chip's host interface out of low-power mode.
    fn wakeup(&mut self) -> Result<()>;
}

/// Digital line level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Logic low.
    Low,
    /// Logic high.
    High,
}

/// A single GPIO line (reset, IRQ).
pub trait DigitalLine {
    /// Drive the line.
    fn set_level(&mut self, level: Level) -> Result<()>;

    /// Current level.
    fn level(&mut self) -> Result<Level>;

    /// Block until the line reads `level` or `timeout` elapses. Returns
    /// `false` on timeout.
    fn wait_for_level(&mut self, level: Level, timeout: Duration) -> Result<bool>;
}

/// Register-less packet bus (I2C-style): every read returns exactly
/// `buf.len()` bytes.
pub trait Bus {
    /// One bus write transaction.
    fn write(&mut self, data: &[u8]) -> Result<()>;

    /// Fill `buf` in one bus read transaction.
    fn read(&mut self, buf: &mut [u8]) -> Result<()>;
}

/// Continuous byte stream (UART-style) with look-ahead.
pub trait ByteStream {
    /// Look at the byte `offset` positions ahead without consuming it.
    /// `None` means the byte has not arrived yet.
    fn peek_at(&mut self, offset: usize) -> Result<Option<u8>>;

    /// Consume exactly `n` bytes, blocking until they are available.
    fn read_exact(&mut self, n: usize) -> Result<Vec<u8>>;

    /// Write and flush `data`.
    fn write_all(&mut self, data: &[u8]) -> Result<()>;
}

/// Blocking sleep.
pub trait Delay {
    /// Sleep for `duration`.
    fn delay(&mut self, duration: Duration);

    /// Sleep for `ms` milliseconds.
    fn delay_ms(&mut self, ms: u64) {
        self.delay(Duration::from_millis(ms));
    }
}

/// Delay backed by `std::thread::sleep`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdDelay;

impl Delay for StdDelay {
    fn delay(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
