// libpn532/src/protocol/commands/sam.rs

//! SAMConfiguration command parameters.

use derive_more::Display;

use crate::{Error, Result};

/// SAM (Security Access Module) operating mode.
#[repr(u8)]
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum SamMode {
    /// SAM not used.
    Normal = 0x01,
    /// Chip and SAM appear as one card (unsupported).
    VirtualCard = 0x02,
    /// Host talks to the SAM through the chip.
    WiredCard = 0x03,
    /// Chip and SAM both visible to an external reader.
    DualCard = 0x04,
}

/// Encode SAMConfiguration parameters: Mode + Timeout + IRQ.
///
/// Virtual card mode and the timeout it relies on are not supported.
pub fn encode_sam_configuration(mode: SamMode, timeout: Option<u8>, use_irq: bool) -> Result<Vec<u8>> {
    if mode == SamMode::VirtualCard {
        return Err(Error::Unimplemented("SAM virtual card mode".into()));
    }
    if let Some(t) = timeout {
        return Err(Error::Unimplemented(format!("SAM timeout ({:#04x})", t)));
    }
    Ok(vec![mode as u8, 0x00, use_irq as u8])
}
