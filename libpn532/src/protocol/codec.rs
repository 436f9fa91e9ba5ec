// libpn532/src/protocol/codec.rs

//! Command framing: `D4 code params` out, `D5 code+1 data` back.

use crate::constants::{TFI_CHIP_TO_HOST, TFI_HOST_TO_CHIP};
use crate::protocol::parser;
use crate::Result;

use super::Frame;
use super::commands::Command;

/// Build the frame payload `[0xD4, code, params...]` for a command.
pub fn command_payload(cmd: &Command) -> Result<Vec<u8>> {
    let params = cmd.encode()?;
    let mut payload = Vec::with_capacity(2 + params.len());
    payload.push(TFI_HOST_TO_CHIP);
    payload.push(cmd.command_code());
    payload.extend_from_slice(&params);
    Ok(payload)
}

/// Encode a Command into a full wire frame (with preamble/LCS/DCS/postamble).
pub fn encode_command_frame(cmd: &Command) -> Result<Vec<u8>> {
    Frame::encode(&command_payload(cmd)?)
}

/// Check the `[0xD5, code + 1]` prefix of a response payload and return
/// the bytes that follow it.
pub fn strip_response(code: u8, payload: &[u8]) -> Result<&[u8]> {
    parser::expect_byte(payload, 0, TFI_CHIP_TO_HOST, "frame identifier")?;
    parser::expect_byte(payload, 1, code.wrapping_add(1), "response code")?;
    Ok(&payload[2..])
}
