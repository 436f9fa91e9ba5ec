// libpn532/src/protocol/commands/target.rs

//! Initiator commands addressing passive targets.

use crate::{Error, Result};

/// Highest logical target number the chip tracks at once.
pub const MAX_TARGETS: u8 = 2;

fn check_target(target: u8, allow_all: bool) -> Result<()> {
    let min = if allow_all { 0 } else { 1 };
    if target < min || target > MAX_TARGETS {
        return Err(Error::InvalidArgument(format!(
            "target number {} outside {}..={}",
            target, min, MAX_TARGETS
        )));
    }
    Ok(())
}

/// Encode InListPassiveTarget parameters: MaxTg + BrTy
pub fn encode_in_list_passive_target(max_targets: u8, baud: u8) -> Result<Vec<u8>> {
    if max_targets == 0 || max_targets > MAX_TARGETS {
        return Err(Error::InvalidArgument(format!(
            "max targets {} outside 1..={}",
            max_targets, MAX_TARGETS
        )));
    }
    Ok(vec![max_targets, baud])
}

/// Encode InDataExchange parameters: Tg + DataOut
pub fn encode_in_data_exchange(target: u8, data: &[u8]) -> Result<Vec<u8>> {
    check_target(target, false)?;
    let mut buf = Vec::with_capacity(1 + data.len());
    buf.push(target);
    buf.extend_from_slice(data);
    Ok(buf)
}

/// Encode InDeselect parameters: Tg (0 deselects every target)
pub fn encode_in_deselect(target: u8) -> Result<Vec<u8>> {
    check_target(target, true)?;
    Ok(vec![target])
}
