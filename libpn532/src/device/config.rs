// libpn532/src/device/config.rs

//! Per-session chip and reset timing configuration.

use std::time::Duration;

use crate::types::ChipType;
use crate::utils::timeout::{DEFAULT_RESET_HOLD_MS, DEFAULT_RESET_SETTLE_MS, ms};

/// Session-level settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceConfig {
    /// Chip variant; decides the power mode after reset.
    pub chip: ChipType,
    /// How long the reset line is held low.
    pub reset_hold: Duration,
    /// Sleep after every reset before the chip is addressed.
    pub reset_settle: Duration,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            chip: ChipType::default(),
            reset_hold: ms(DEFAULT_RESET_HOLD_MS),
            reset_settle: ms(DEFAULT_RESET_SETTLE_MS),
        }
    }
}

impl DeviceConfig {
    /// Defaults for `chip`.
    pub fn for_chip(chip: ChipType) -> Self {
        Self {
            chip,
            ..Self::default()
        }
    }
}
