// libpn532/src/device/power.rs

//! Power modes tracked by the session.

use derive_more::Display;

/// Chip power mode as tracked by the session.
///
/// After a hardware reset the chip sits in its type default (`LowVBat`
/// for PN532). The only way out of `LowVBat` is a SAM configuration
/// command, which moves it to `Normal`.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PowerMode {
    /// Reset default on PN532; only SAM configuration is accepted.
    #[display(fmt = "low-vbat")]
    LowVBat,
    /// Fully operational.
    #[display(fmt = "normal")]
    Normal,
    /// Powered down; needs a reset.
    #[display(fmt = "power-down")]
    PowerDown,
}

impl PowerMode {
    /// Whether chip commands other than SAM configuration are accepted.
    pub fn accepts_commands(&self) -> bool {
        matches!(self, PowerMode::Normal)
    }
}
