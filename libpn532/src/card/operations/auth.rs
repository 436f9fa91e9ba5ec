// libpn532/src/card/operations/auth.rs

//! Mifare Classic key authentication.

use crate::card::mifare::{KeyType, MifareKey};
use crate::device::Device;
use crate::types::Uid;
use crate::{Error, Result};

/// Authenticate `block`'s sector on `target` with `key`.
///
/// Payload: `[auth-op, block, key(6), uid]`. The chip answers with an
/// empty application payload on success.
pub fn authenticate(
    device: &mut Device,
    target: u8,
    block: u8,
    key_type: KeyType,
    key: &MifareKey,
    uid: &Uid,
) -> Result<()> {
    let mut data = Vec::with_capacity(2 + 6 + uid.len());
    data.push(key_type.command());
    data.push(block);
    data.extend_from_slice(key.as_bytes());
    data.extend_from_slice(uid.as_bytes());

    let reply = device.data_exchange(target, &data, 0)?;
    if !reply.is_empty() {
        return Err(Error::UnexpectedResponse(format!(
            "authentication reply carries {} bytes",
            reply.len()
        )));
    }
    log::debug!("block {} authenticated with key {}", block, key_type);
    Ok(())
}
