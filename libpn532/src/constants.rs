// libpn532/src/constants.rs
//! Common protocol constants used across the crate

/// Wire frame preamble followed by the start code: 0x00 0x00 0xFF
pub const FRAME_PREAMBLE: [u8; 3] = [0x00, 0x00, 0xFF];

/// Wire frame postamble: 0x00
pub const FRAME_POSTAMBLE: u8 = 0x00;

/// Header bytes before the payload: preamble(1) + start code(2) + LEN + LCS
pub const FRAME_HEADER_LEN: usize = 5;

/// Footer bytes after the payload: DCS + postamble
pub const FRAME_FOOTER_LEN: usize = 2;

/// Fixed acknowledge frame
pub const ACK_FRAME: [u8; 6] = [0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00];

/// Size of an error frame (one payload byte)
pub const ERROR_FRAME_LEN: usize = FRAME_HEADER_LEN + 1 + FRAME_FOOTER_LEN;

/// Normal frames carry at most 253 payload bytes; longer payloads need the
/// extended frame format which this crate does not speak.
pub const MAX_PAYLOAD_LEN: usize = 253;

/// Frame identifier: host -> chip
pub const TFI_HOST_TO_CHIP: u8 = 0xD4;
/// Frame identifier: chip -> host
pub const TFI_CHIP_TO_HOST: u8 = 0xD5;

/// Diagnose (self tests)
pub const CMD_DIAGNOSE: u8 = 0x00;
/// GetFirmwareVersion
pub const CMD_GET_FIRMWARE_VERSION: u8 = 0x02;
/// GetGeneralStatus
pub const CMD_GET_GENERAL_STATUS: u8 = 0x04;
/// SAMConfiguration
pub const CMD_SAM_CONFIGURATION: u8 = 0x14;
/// InDataExchange
pub const CMD_IN_DATA_EXCHANGE: u8 = 0x40;
/// InListPassiveTarget
pub const CMD_IN_LIST_PASSIVE_TARGET: u8 = 0x4A;
/// InDeselect
pub const CMD_IN_DESELECT: u8 = 0x44;

/// InListPassiveTarget baud rate / modulation: 106 kbps type A (Mifare)
pub const BRTY_106K_TYPE_A: u8 = 0x00;

/// Mifare classic authenticate with key A (carried inside InDataExchange)
pub const MIFARE_CMD_AUTH_A: u8 = 0x60;
/// Mifare classic authenticate with key B
pub const MIFARE_CMD_AUTH_B: u8 = 0x61;
/// Mifare classic 16-byte block read
pub const MIFARE_CMD_READ: u8 = 0x30;

/// Mifare classic block size in bytes
pub const MIFARE_BLOCK_LEN: usize = 16;

/// Wake preamble for the buffered-stream (HSU) transport
pub const WAKE_PREAMBLE: [u8; 16] = [
    0x55, 0x55, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00,
];
