// libpn532/src/protocol/responses/firmware.rs

//! GetFirmwareVersion reply.

use crate::protocol::parser;
use crate::Result;

/// GetFirmwareVersion reply: IC + Ver + Rev + Support
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FirmwareVersion {
    /// IC byte (`0x32` for PN532).
    pub ic: u8,
    /// Firmware version.
    pub version: u8,
    /// Firmware revision.
    pub revision: u8,
    /// Supported protocol bitfield
    pub support: u8,
}

impl FirmwareVersion {
    /// Response length in bytes.
    pub const LEN: usize = 4;

    /// Decode a GetFirmwareVersion response payload.
    /// Layout: ic(1) + version(1) + revision(1) + support(1)
    pub fn decode(data: &[u8]) -> Result<Self> {
        parser::ensure_len(data, Self::LEN)?;
        Ok(Self {
            ic: data[0],
            version: data[1],
            revision: data[2],
            support: data[3],
        })
    }

    /// Support bit 0.
    pub fn supports_iso14443_type_a(&self) -> bool {
        self.support & 0x01 != 0
    }

    /// Support bit 1.
    pub fn supports_iso14443_type_b(&self) -> bool {
        self.support & 0x02 != 0
    }

    /// Support bit 2.
    pub fn supports_iso18092(&self) -> bool {
        self.support & 0x04 != 0
    }
}
