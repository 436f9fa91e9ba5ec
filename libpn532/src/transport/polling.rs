// libpn532/src/transport/polling.rs

//! Status-gated packet bus transport (I2C wiring).
//!
//! The chip prefixes every read with a status byte: `0x00` while it is
//! still busy, anything else once a frame is waiting (the chip sends
//! `0x01`). Reads are optionally gated by the IRQ line.

use std::time::Duration;

use crate::transport::traits::{Bus, Delay, DigitalLine, Level, Transport};
use crate::utils::retry::{RetryPolicy, retry_with_backoff};
use crate::utils::timeout::{DEFAULT_POLL_ATTEMPTS, DEFAULT_POLL_BACKOFF_MS, default_ready_timeout, ms};
use crate::{Error, Result};

const STATUS_BUSY: u8 = 0x00;

/// Bounds for [`PollingTransport`] reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollingConfig {
    /// Bound on the readiness-line wait. Expiry is logged, not fatal.
    pub ready_timeout: Duration,
    /// Level the readiness line takes when a frame is pending.
    pub ready_level: Level,
    /// Status-byte poll count and backoff.
    pub retry: RetryPolicy,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            ready_timeout: default_ready_timeout(),
            ready_level: Level::Low,
            retry: RetryPolicy::new(DEFAULT_POLL_ATTEMPTS, ms(DEFAULT_POLL_BACKOFF_MS)),
        }
    }
}

/// Transport over a status-gated packet bus.
pub struct PollingTransport {
    bus: Box<dyn Bus>,
    ready: Option<Box<dyn DigitalLine>>,
    delay: Box<dyn Delay>,
    config: PollingConfig,
}

impl PollingTransport {
    /// Transport over `bus` with default bounds and no readiness line.
    /// `delay` sleeps between status polls.
    pub fn new(bus: impl Bus + 'static, delay: impl Delay + 'static) -> Self {
        Self {
            bus: Box::new(bus),
            ready: None,
            delay: Box::new(delay),
            config: PollingConfig::default(),
        }
    }

    /// Gate reads on the chip's IRQ line.
    pub fn with_ready_line(mut self, line: impl DigitalLine + 'static) -> Self {
        self.ready = Some(Box::new(line));
        self
    }

    /// Replace the read bounds.
    pub fn with_config(mut self, config: PollingConfig) -> Self {
        self.config = config;
        self
    }

    /// Current read bounds.
    pub fn config(&self) -> &PollingConfig {
        &self.config
    }

    fn wait_ready(&mut self) -> Result<()> {
        let Some(line) = self.ready.as_mut() else {
            return Ok(());
        };
        let level = self.config.ready_level;
        let timeout = self.config.ready_timeout;
        if !line.wait_for_level(level, timeout)? {
            log::warn!(
                "ready line did not go {:?} within {:?}; polling status anyway",
                level,
                timeout
            );
        }
        Ok(())
    }
}

impl Transport for PollingTransport {
    fn write_frame(&mut self, frame: &[u8]) -> Result<()> {
        super::trace_frame("bus >>", frame);
        self.bus.write(frame)
    }

    fn read_frame(&mut self, max_size: usize) -> Result<Vec<u8>> {
        self.wait_ready()?;

        let mut buf = vec![0u8; max_size + 1];
        let bus = &mut self.bus;
        let ready = retry_with_backoff(&self.config.retry, self.delay.as_mut(), |_| {
            bus.read(&mut buf)?;
            match buf[0] {
                STATUS_BUSY => Ok(None),
                other => {
                    log::trace!("status byte {:#04x}", other);
                    Ok(Some(()))
                }
            }
        })?;

        if ready.is_none() {
            log::debug!(
                "status byte stayed busy for {} polls",
                self.config.retry.max_attempts
            );
            return Err(Error::Timeout);
        }

        buf.remove(0);
        super::trace_frame("bus <<", &buf);
        Ok(buf)
    }

    fn wakeup(&mut self) -> Result<()> {
        // the bus wakes the chip on its own address match
        Ok(())
    }
}
