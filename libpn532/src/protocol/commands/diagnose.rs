// libpn532/src/protocol/commands/diagnose.rs

//! Diagnose command parameters.

use crate::constants::MAX_PAYLOAD_LEN;
use crate::{Error, Result};

/// Self tests run through the Diagnose command (0x00).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelfTest {
    /// Communication line test: the chip echoes the data back.
    CommunicationLine(Vec<u8>),
    /// ROM checksum test
    Rom,
    /// RAM integrity test
    Ram,
}

impl SelfTest {
    /// NumTst byte
    pub fn code(&self) -> u8 {
        match self {
            SelfTest::CommunicationLine(_) => 0x00,
            SelfTest::Rom => 0x01,
            SelfTest::Ram => 0x02,
        }
    }

    /// Longest echo data that still fits a normal frame next to
    /// D4, the command code and NumTst.
    pub const MAX_ECHO_LEN: usize = MAX_PAYLOAD_LEN - 3;
}

/// Encode Diagnose parameters: NumTst + InParam
pub fn encode_diagnose(test: &SelfTest) -> Result<Vec<u8>> {
    let mut buf = vec![test.code()];
    if let SelfTest::CommunicationLine(data) = test {
        if data.len() > SelfTest::MAX_ECHO_LEN {
            return Err(Error::Unimplemented(format!(
                "communication line test with {} bytes needs an extended frame",
                data.len()
            )));
        }
        buf.extend_from_slice(data);
    }
    Ok(buf)
}
