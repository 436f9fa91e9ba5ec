// fixtures.rs — provides commonly used test payloads/frames

use libpn532::test_support::{raw_frame, response_frame};

/// GetFirmwareVersion data of a PN532 v1.6 supporting all three protocols.
pub fn firmware_data() -> Vec<u8> {
    hex::decode("32010607").unwrap()
}

pub fn firmware_frame() -> Vec<u8> {
    response_frame(0x02, &firmware_data())
}

/// GetGeneralStatus data: no error, field present, one target at
/// 106/212 kbps, SAM status with CLAD high.
pub fn general_status_data() -> Vec<u8> {
    hex::decode("0001010100011080").unwrap()
}

/// Same as `general_status_data` with the target count forced to 3.
pub fn general_status_three_targets() -> Vec<u8> {
    hex::decode("000103").unwrap()
}

pub fn sample_uid_bytes() -> [u8; 4] {
    [0xDE, 0xAD, 0xBE, 0xEF]
}

/// InListPassiveTarget data for one Mifare Classic 1K.
pub fn listed_target_data() -> Vec<u8> {
    let mut v = hex::decode("0101000408").unwrap();
    v.push(sample_uid_bytes().len() as u8);
    v.extend_from_slice(&sample_uid_bytes());
    v
}

pub fn sample_block(fill: u8) -> [u8; 16] {
    [fill; 16]
}

/// InDataExchange data for a successful block read.
pub fn read_reply(fill: u8) -> Vec<u8> {
    let mut v = vec![0x00];
    v.extend_from_slice(&sample_block(fill));
    v
}

pub fn ack() -> Vec<u8> {
    hex::decode("0000ff00ff00").unwrap()
}

pub fn error_frame(code: u8) -> Vec<u8> {
    raw_frame(&[code])
}
