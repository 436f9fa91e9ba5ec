// libpn532/src/card/mifare.rs

//! Mifare Classic key material and the 1K sector layout (16 sectors of 4
//! blocks, the last block of each sector being the trailer).

use derive_more::Display;

use crate::constants::{MIFARE_CMD_AUTH_A, MIFARE_CMD_AUTH_B};

/// Blocks in each 1K sector.
pub const BLOCKS_PER_SECTOR: u8 = 4;

/// 6-byte sector key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MifareKey([u8; 6]);

impl MifareKey {
    /// Factory transport key.
    pub const DEFAULT: MifareKey = MifareKey([0xFF; 6]);

    /// Key from raw bytes.
    pub const fn new(bytes: [u8; 6]) -> Self {
        Self(bytes)
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }
}

impl Default for MifareKey {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Which sector key to authenticate with.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyType {
    /// Key A (the default).
    #[default]
    #[display(fmt = "A")]
    A,
    /// Key B.
    #[display(fmt = "B")]
    B,
}

impl KeyType {
    /// Mifare authentication opcode.
    pub fn command(&self) -> u8 {
        match self {
            KeyType::A => MIFARE_CMD_AUTH_A,
            KeyType::B => MIFARE_CMD_AUTH_B,
        }
    }
}

/// True for the last block of a sector.
pub fn is_sector_trailer(block: u8) -> bool {
    block % BLOCKS_PER_SECTOR == BLOCKS_PER_SECTOR - 1
}

/// Sector holding `block`.
pub fn sector_of(block: u8) -> u8 {
    block / BLOCKS_PER_SECTOR
}

/// First block of `sector`.
pub fn first_block(sector: u8) -> u8 {
    sector * BLOCKS_PER_SECTOR
}
