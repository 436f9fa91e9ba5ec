// libpn532/src/card/mod.rs

//! Mifare Classic cards on top of a powered-on session.

use crate::device::Device;
use crate::protocol::responses::ListedTarget;
use crate::types::{BlockData, Uid};
use crate::{Error, Result};

pub mod mifare;
pub mod operations;

pub use mifare::{KeyType, MifareKey, first_block, is_sector_trailer, sector_of};

/// A Mifare Classic card selected as logical target `target`.
///
/// The card does not own the session; every operation borrows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MifareCard {
    uid: Uid,
    target: u8,
}

impl MifareCard {
    /// Card with a known UID at logical target `target`.
    pub fn new(uid: Uid, target: u8) -> Self {
        Self { uid, target }
    }

    /// Build from an InListPassiveTarget reply. Fails if no target was
    /// found.
    pub fn from_listed(listed: &ListedTarget) -> Result<Self> {
        let target = listed
            .target_number()
            .ok_or_else(|| Error::InvalidResponse("no target in field".into()))?;
        let uid = listed
            .uid()
            .ok_or_else(|| Error::InvalidResponse("target reply carries no UID".into()))?;
        Ok(Self { uid, target })
    }

    /// Card UID.
    pub fn uid(&self) -> &Uid {
        &self.uid
    }

    /// Logical target number.
    pub fn target(&self) -> u8 {
        self.target
    }

    /// Authenticate the sector holding `block`.
    pub fn authenticate(
        &self,
        device: &mut Device,
        block: u8,
        key_type: KeyType,
        key: &MifareKey,
    ) -> Result<()> {
        operations::authenticate(device, self.target, block, key_type, key, &self.uid)
    }

    /// Read one block. The sector must be authenticated.
    pub fn read(&self, device: &mut Device, block: u8) -> Result<BlockData> {
        operations::read_block(device, self.target, block)
    }

    /// Authenticate `sector` and read all of its blocks.
    pub fn read_sector(
        &self,
        device: &mut Device,
        sector: u8,
        key_type: KeyType,
        key: &MifareKey,
    ) -> Result<Vec<BlockData>> {
        operations::read_sector(device, self.target, sector, key_type, key, &self.uid)
    }
}
