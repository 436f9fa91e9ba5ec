// libpn532/src/card/operations/read.rs

//! Block and sector reads.

use crate::card::mifare::{BLOCKS_PER_SECTOR, KeyType, MifareKey, first_block};
use crate::constants::{MIFARE_BLOCK_LEN, MIFARE_CMD_READ};
use crate::device::Device;
use crate::types::{BlockData, Uid};
use crate::Result;

use super::auth::authenticate;

/// Read one 16-byte block. The block's sector must already be
/// authenticated.
pub fn read_block(device: &mut Device, target: u8, block: u8) -> Result<BlockData> {
    let reply = device.data_exchange(target, &[MIFARE_CMD_READ, block, 0x00, 0x00], MIFARE_BLOCK_LEN)?;
    BlockData::try_from(reply.as_slice())
}

/// Authenticate `sector` once and read all of its blocks, trailer
/// included. Stops at the first failure.
pub fn read_sector(
    device: &mut Device,
    target: u8,
    sector: u8,
    key_type: KeyType,
    key: &MifareKey,
    uid: &Uid,
) -> Result<Vec<BlockData>> {
    let first = first_block(sector);
    authenticate(device, target, first, key_type, key, uid)?;
    (first..first + BLOCKS_PER_SECTOR)
        .map(|block| read_block(device, target, block))
        .collect()
}
