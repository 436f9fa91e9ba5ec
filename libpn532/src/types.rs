// libpn532/src/types.rs

//! Small value types shared across the crate.

use derive_more::Display;

use crate::Error;
use crate::constants::MIFARE_BLOCK_LEN;

/// Card UID (4, 7 or 10 bytes for ISO14443A)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Uid(Vec<u8>);

impl Uid {
    /// Wrap raw UID bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Raw UID bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Number of UID bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for a zero-length UID.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lowercase hex, no separators.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

/// One 16-byte Mifare Classic block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockData([u8; MIFARE_BLOCK_LEN]);

impl BlockData {
    /// Wrap a block read from a card.
    pub fn from_bytes(bytes: [u8; MIFARE_BLOCK_LEN]) -> Self {
        Self(bytes)
    }

    /// Raw block bytes.
    pub fn as_bytes(&self) -> &[u8; MIFARE_BLOCK_LEN] {
        &self.0
    }

    /// Space-separated hex.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.as_bytes())
    }

    /// Printable ASCII with every other byte shown as `.`.
    pub fn to_ascii_safe(&self) -> String {
        self.0
            .iter()
            .map(|&b| {
                if b.is_ascii_graphic() || b == b' ' {
                    b as char
                } else {
                    '.'
                }
            })
            .collect()
    }
}

impl TryFrom<&[u8]> for BlockData {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != MIFARE_BLOCK_LEN {
            return Err(Error::InvalidLength {
                expected: MIFARE_BLOCK_LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; MIFARE_BLOCK_LEN];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

/// Reader chip variant
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChipType {
    /// PN532 (the default).
    #[default]
    #[display(fmt = "PN532")]
    Pn532,
    /// PN533.
    #[display(fmt = "PN533")]
    Pn533,
}

impl ChipType {
    /// Power mode the chip enters after a hardware reset.
    pub fn default_power_mode(&self) -> crate::device::PowerMode {
        match self {
            ChipType::Pn532 => crate::device::PowerMode::LowVBat,
            ChipType::Pn533 => crate::device::PowerMode::Normal,
        }
    }

    /// IC byte reported by GetFirmwareVersion.
    pub fn from_ic(ic: u8) -> Option<Self> {
        match ic {
            0x32 => Some(Self::Pn532),
            0x33 => Some(Self::Pn533),
            _ => None,
        }
    }
}
