// libpn532/src/protocol/responses/diagnose.rs

//! Diagnose (self test) verdicts.

use crate::protocol::commands::SelfTest;
use crate::protocol::parser;
use crate::Result;

/// Decode a Diagnose reply into a pass/fail verdict.
///
/// ROM and RAM tests answer a single byte (0x00 = OK, 0xFF = fault); the
/// communication line test echoes NumTst followed by the sent data.
pub fn decode_self_test(test: &SelfTest, data: &[u8]) -> Result<bool> {
    match test {
        SelfTest::Rom | SelfTest::Ram => Ok(parser::byte_at(data, 0)? == 0x00),
        SelfTest::CommunicationLine(sent) => {
            let num_tst = parser::byte_at(data, 0)?;
            Ok(num_tst == test.code() && &data[1..] == sent.as_slice())
        }
    }
}

/// Response bound for a self test.
pub fn self_test_response_len(test: &SelfTest) -> usize {
    match test {
        SelfTest::CommunicationLine(data) => 1 + data.len(),
        SelfTest::Rom | SelfTest::Ram => 1,
    }
}
