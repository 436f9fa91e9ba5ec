// libpn532/src/device/builder.rs

//! Session builder.

use std::time::Duration;

use crate::device::config::DeviceConfig;
use crate::device::handle::Device;
use crate::transport::{Delay, DigitalLine, StdDelay, Transport};
use crate::types::ChipType;
use crate::{Error, Result};

/// Helper to construct a Device with optional configuration.
pub struct DeviceBuilder {
    transport: Option<Box<dyn Transport>>,
    reset_line: Option<Box<dyn DigitalLine>>,
    delay: Option<Box<dyn Delay>>,
    config: DeviceConfig,
}

impl Default for DeviceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceBuilder {
    /// Empty builder; a transport must be supplied.
    pub fn new() -> Self {
        Self {
            transport: None,
            reset_line: None,
            delay: None,
            config: DeviceConfig::default(),
        }
    }

    /// Provide an already-created transport instance (polling, stream or mock).
    pub fn with_transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Box::new(transport));
        self
    }

    /// Reset line, pulsed low by `Device::reset`.
    pub fn with_reset_line(mut self, line: impl DigitalLine + 'static) -> Self {
        self.reset_line = Some(Box::new(line));
        self
    }

    /// Sleep source for reset timing. Defaults to [`StdDelay`].
    pub fn with_delay(mut self, delay: impl Delay + 'static) -> Self {
        self.delay = Some(Box::new(delay));
        self
    }

    /// Chip variant.
    pub fn chip(mut self, chip: ChipType) -> Self {
        self.config.chip = chip;
        self
    }

    /// Reset hold and settle times.
    pub fn reset_timing(mut self, hold: Duration, settle: Duration) -> Self {
        self.config.reset_hold = hold;
        self.config.reset_settle = settle;
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: DeviceConfig) -> Self {
        self.config = config;
        self
    }

    /// Consume the builder and return a session in the uninitialised
    /// state. Requires a transport.
    pub fn build(self) -> Result<Device> {
        let transport = self
            .transport
            .ok_or_else(|| Error::InvalidArgument("no transport configured".into()))?;
        let delay = self.delay.unwrap_or_else(|| Box::new(StdDelay));
        Ok(Device::from_parts(transport, self.reset_line, delay, self.config))
    }

    /// Build and power the chip up (`reset` + `wakeup`).
    pub fn build_on(self) -> Result<Device> {
        let mut device = self.build()?;
        device.on()?;
        Ok(device)
    }
}
