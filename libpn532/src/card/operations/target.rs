// libpn532/src/card/operations/target.rs

//! Target discovery and release.

use crate::constants::BRTY_106K_TYPE_A;
use crate::device::Device;
use crate::protocol::responses::ListedTarget;
use crate::protocol::{parser, Command};
use crate::{Error, Result};

/// Detect at most one ISO14443A (Mifare) target and return the raw
/// InListPassiveTarget reply.
pub fn list_passive_targets(device: &mut Device) -> Result<ListedTarget> {
    let cmd = Command::InListPassiveTarget {
        max_targets: 1,
        baud: BRTY_106K_TYPE_A,
    };
    let raw = device.execute(&cmd, ListedTarget::MAX_LEN)?;
    let listed = ListedTarget::new(raw);
    log::debug!("{} target(s) in field", listed.target_count());
    Ok(listed)
}

/// Release `target` (1 or 2), or every target with 0. Only a status of
/// exactly `0x00` counts as success.
pub fn deselect(device: &mut Device, target: u8) -> Result<()> {
    let resp = device.execute(&Command::InDeselect { target }, 1)?;
    match parser::byte_at(&resp, 0)? {
        0x00 => Ok(()),
        status => Err(Error::DeviceError(status)),
    }
}
