// libpn532/src/protocol/responses/status.rs

//! GetGeneralStatus reply and the per-target records it carries.

use derive_more::Display;

use crate::protocol::parser;
use crate::protocol::responses::SamStatus;
use crate::{Error, Result};

/// Bit rate reported for an active target.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BitRate {
    /// Code `0x00`.
    #[display(fmt = "106 kbps")]
    Kbps106,
    /// Code `0x01`.
    #[display(fmt = "212 kbps")]
    Kbps212,
    /// Code `0x02`.
    #[display(fmt = "424 kbps")]
    Kbps424,
}

impl BitRate {
    /// Nominal rate in bit/s.
    pub fn bits_per_second(&self) -> u32 {
        match self {
            BitRate::Kbps106 => 106_000,
            BitRate::Kbps212 => 212_000,
            BitRate::Kbps424 => 424_000,
        }
    }
}

impl TryFrom<u8> for BitRate {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            0x00 => Ok(BitRate::Kbps106),
            0x01 => Ok(BitRate::Kbps212),
            0x02 => Ok(BitRate::Kbps424),
            other => Err(Error::InvalidResponse(format!(
                "unknown bit rate code {:#04x}",
                other
            ))),
        }
    }
}

/// One active target reported by GetGeneralStatus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetInfo {
    /// Logical target number (Tg).
    pub logical_number: u8,
    /// Rx bit rate.
    pub bit_rate_reception: BitRate,
    /// Tx bit rate.
    pub bit_rate_transmission: BitRate,
    /// Raw modulation type byte.
    pub modulation_type: u8,
}

impl TargetInfo {
    /// Bytes per target record.
    pub const LEN: usize = 4;

    fn decode(data: &[u8]) -> Result<Self> {
        Ok(Self {
            logical_number: data[0],
            bit_rate_reception: BitRate::try_from(data[1])?,
            bit_rate_transmission: BitRate::try_from(data[2])?,
            modulation_type: data[3],
        })
    }
}

/// GetGeneralStatus reply.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneralStatus {
    /// Last error reported by the chip.
    pub error_code: u8,
    /// An external RF field is present.
    pub field_present: bool,
    /// Active targets, at most two.
    pub targets: Vec<TargetInfo>,
    /// Trailing SAM status byte.
    pub sam_status: SamStatus,
}

impl GeneralStatus {
    /// Largest reply: err + field + nbtg + 2 targets + sam
    pub const MAX_LEN: usize = 3 + 2 * TargetInfo::LEN + 1;

    /// Decode a GetGeneralStatus response payload.
    /// Layout: err(1) + field(1) + nbtg(1) + targets(4*nbtg) + sam_status(1)
    pub fn decode(data: &[u8]) -> Result<Self> {
        let error_code = parser::byte_at(data, 0)?;
        let field_present = parser::byte_at(data, 1)? != 0;
        let count = parser::byte_at(data, 2)? as usize;
        if count > 2 {
            return Err(Error::InvalidResponse(format!(
                "general status reports {} targets",
                count
            )));
        }

        let mut targets = Vec::with_capacity(count);
        for i in 0..count {
            let slice = parser::slice_at(data, 3 + i * TargetInfo::LEN, TargetInfo::LEN)?;
            targets.push(TargetInfo::decode(slice)?);
        }

        let sam_status = SamStatus::new(parser::byte_at(data, 3 + count * TargetInfo::LEN)?);

        Ok(Self {
            error_code,
            field_present,
            targets,
            sam_status,
        })
    }
}
