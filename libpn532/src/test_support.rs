//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common frame building and MockTransport setup
//! so tests across the crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use crate::constants::{FRAME_POSTAMBLE, FRAME_PREAMBLE, TFI_CHIP_TO_HOST};
use crate::device::{Device, DeviceConfig};
use crate::protocol::checksum::{dcs, lcs};
use crate::transport::mock::{MockDelay, MockTransport};
use crate::Result;

/// Frame a payload without length checks. Payloads above 253 bytes
/// produce a wrong length byte.
#[doc(hidden)]
pub fn raw_frame(payload: &[u8]) -> Vec<u8> {
    let len = payload.len() as u8;
    let mut out = FRAME_PREAMBLE.to_vec();
    out.push(len);
    out.push(lcs(len));
    out.extend_from_slice(payload);
    out.push(dcs(payload));
    out.push(FRAME_POSTAMBLE);
    out
}

/// Chip response frame for command `code`: payload `D5, code+1, data...`.
#[doc(hidden)]
pub fn response_frame(code: u8, data: &[u8]) -> Vec<u8> {
    let mut payload = vec![TFI_CHIP_TO_HOST, code.wrapping_add(1)];
    payload.extend_from_slice(data);
    raw_frame(&payload)
}

/// Error frame carrying `code`.
#[doc(hidden)]
pub fn error_frame(code: u8) -> Vec<u8> {
    raw_frame(&[code])
}

/// Queue an ack followed by the response frame for `code`.
#[doc(hidden)]
pub fn push_exchange(mock: &MockTransport, code: u8, data: &[u8]) {
    mock.push_frame(crate::constants::ACK_FRAME.to_vec());
    mock.push_frame(response_frame(code, data));
}

/// A PN532 session driven through `on()` over a MockTransport, so it sits
/// in `Normal` power mode. The mock's history is cleared before returning.
#[doc(hidden)]
pub fn ready_device() -> Result<(Device, MockTransport)> {
    let mock = MockTransport::new();
    push_exchange(&mock, crate::constants::CMD_SAM_CONFIGURATION, &[]);
    let mut device = Device::from_parts(
        Box::new(mock.clone()),
        None,
        Box::new(MockDelay::new()),
        DeviceConfig::default(),
    );
    device.on()?;
    mock.clear_history();
    Ok((device, mock))
}
