// libpn532/src/protocol/frame.rs

//! Normal information frames and the acknowledge frame.

use crate::constants::{
    ACK_FRAME, FRAME_FOOTER_LEN, FRAME_HEADER_LEN, FRAME_POSTAMBLE, FRAME_PREAMBLE,
    MAX_PAYLOAD_LEN,
};
use crate::error::FrameFault;
use crate::protocol::checksum::{dcs, lcs, sum};
use crate::{Error, Result};

/// A decoded wire frame.
///
/// Format: [Preamble(1)] [Start code(2)] [Len(1)] [LCS(1)] [Payload(n)] [DCS(1)] [Postamble(1)]
///
/// A zero-length frame must be the acknowledge frame `00 00 FF 00 FF 00`;
/// any other bytes after a zero length byte are rejected. A data frame with a single payload byte is an
/// error frame carrying the device error code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    /// The acknowledge frame.
    Ack,
    /// A normal frame and its payload (TFI onwards).
    Data(Vec<u8>),
}

/// Total wire size of a normal frame carrying `payload_len` bytes.
pub const fn frame_len(payload_len: usize) -> usize {
    FRAME_HEADER_LEN + payload_len + FRAME_FOOTER_LEN
}

fn need(frame: &[u8], len: usize) -> Result<()> {
    if frame.len() < len {
        return Err(FrameFault::Truncated {
            expected: len,
            actual: frame.len(),
        }
        .into());
    }
    Ok(())
}

impl Frame {
    /// Encode a payload into a full wire frame
    pub fn encode(payload: &[u8]) -> Result<Vec<u8>> {
        if payload.is_empty() {
            // A zero length byte is reserved for the ack.
            return Err(Error::InvalidArgument("empty frame payload".into()));
        }
        if payload.len() > MAX_PAYLOAD_LEN {
            return Err(Error::Unimplemented(format!(
                "payload of {} bytes requires an extended frame",
                payload.len()
            )));
        }

        let len = payload.len() as u8;
        let mut out = Vec::with_capacity(frame_len(payload.len()));
        out.extend_from_slice(&FRAME_PREAMBLE);
        out.push(len);
        out.push(lcs(len));
        out.extend_from_slice(payload);
        out.push(dcs(payload));
        out.push(FRAME_POSTAMBLE);
        Ok(out)
    }

    /// Decode a wire frame. Bytes after the postamble are ignored, which
    /// lets transports hand over fixed-size reads.
    pub fn decode(frame: &[u8]) -> Result<Frame> {
        need(frame, FRAME_PREAMBLE.len() + 1)?;
        if frame[..3] != FRAME_PREAMBLE {
            return Err(FrameFault::Preamble.into());
        }

        let len = frame[3];
        need(frame, FRAME_HEADER_LEN)?;
        let lcs_actual = frame[4];

        // A zero length byte only ever introduces the ack pattern.
        if len == 0 {
            need(frame, ACK_FRAME.len())?;
            if frame[4..ACK_FRAME.len()] != ACK_FRAME[4..] {
                return Err(FrameFault::AckPattern.into());
            }
            return Ok(Frame::Ack);
        }

        let lcs_expected = lcs(len);
        if lcs_actual != lcs_expected {
            return Err(FrameFault::LengthChecksum {
                expected: lcs_expected,
                actual: lcs_actual,
            }
            .into());
        }

        let len = len as usize;
        need(frame, frame_len(len))?;

        let payload_end = FRAME_HEADER_LEN + len;
        let payload = &frame[FRAME_HEADER_LEN..payload_end];

        let check = frame[payload_end].wrapping_add(sum(payload));
        if check != 0 {
            return Err(FrameFault::DataChecksum(check).into());
        }

        let postamble = frame[payload_end + 1];
        if postamble != FRAME_POSTAMBLE {
            return Err(FrameFault::Postamble(postamble).into());
        }

        Ok(Frame::Data(payload.to_vec()))
    }

    /// Payload bytes; empty for an ack.
    pub fn payload(&self) -> &[u8] {
        match self {
            Frame::Ack => &[],
            Frame::Data(p) => p,
        }
    }

    /// True for the acknowledge frame.
    pub fn is_ack(&self) -> bool {
        matches!(self, Frame::Ack)
    }

    /// Device error code when this is an error frame.
    pub fn error_code(&self) -> Option<u8> {
        match self {
            Frame::Data(p) if p.len() == 1 => Some(p[0]),
            _ => None,
        }
    }
}
