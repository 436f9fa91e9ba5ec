// libpn532/src/device/channel.rs

//! One command/acknowledge/response exchange over a [`Transport`].

use crate::constants::{ERROR_FRAME_LEN, FRAME_HEADER_LEN, FRAME_PREAMBLE};
use crate::error::FrameFault;
use crate::protocol::checksum::lcs;
use crate::protocol::codec;
use crate::protocol::frame::{Frame, frame_len};
use crate::protocol::Command;
use crate::transport::Transport;
use crate::{Error, Result};

/// Drives the two-phase exchange: write the command frame, read the ack,
/// read the response. At most one command is in flight.
pub struct CommandChannel {
    transport: Box<dyn Transport>,
}

impl CommandChannel {
    /// Channel over `transport`.
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Self { transport }
    }

    /// The underlying transport.
    pub fn transport_mut(&mut self) -> &mut dyn Transport {
        self.transport.as_mut()
    }

    /// Send `cmd` and return its response data (after the `D5 code+1`
    /// prefix), at most `max_size` bytes.
    pub fn send_command(&mut self, cmd: &Command, max_size: usize) -> Result<Vec<u8>> {
        self.write_command(cmd)?;
        self.read_ack()?;
        self.read_response(cmd.command_code(), max_size)
    }

    /// Like [`send_command`](Self::send_command) but the response data must
    /// be exactly `size` bytes.
    pub fn send_command_exact(&mut self, cmd: &Command, size: usize) -> Result<Vec<u8>> {
        self.write_command(cmd)?;
        self.read_ack()?;
        self.read_response_exact(cmd.command_code(), size)
    }

    /// Write `cmd` as one frame.
    pub fn write_command(&mut self, cmd: &Command) -> Result<()> {
        let frame = codec::encode_command_frame(cmd)?;
        log::debug!("-> command {:#04x} ({} bytes)", cmd.command_code(), frame.len());
        self.transport.write_frame(&frame)
    }

    /// Read the acknowledge frame. An error frame in its place is
    /// reported as `DeviceError`.
    pub fn read_ack(&mut self) -> Result<()> {
        let raw = self.transport.read_frame(ERROR_FRAME_LEN)?;
        match Frame::decode(&raw)? {
            Frame::Ack => Ok(()),
            Frame::Data(payload) => match payload.first() {
                Some(&code) => {
                    log::debug!("error frame instead of ack: {:#04x}", code);
                    Err(Error::DeviceError(code))
                }
                None => Err(FrameFault::AckPattern.into()),
            },
        }
    }

    /// Read the response to command `code`; at most `max_size` data bytes.
    pub fn read_response(&mut self, code: u8, max_size: usize) -> Result<Vec<u8>> {
        let raw = self.transport.read_frame(frame_len(max_size + 2))?;
        // A bounded bus read cuts an oversized frame short; judge it by its
        // header rather than reporting truncation.
        if let Some(len) = announced_len(&raw) {
            if len > max_size + 2 {
                return Err(Error::UnexpectedResponse(format!(
                    "response to {:#04x} announces {} payload bytes, bound is {}",
                    code,
                    len,
                    max_size + 2
                )));
            }
        }
        let frame = Frame::decode(&raw)?;
        let data = codec::strip_response(code, frame.payload())?;
        if data.len() > max_size {
            return Err(Error::UnexpectedResponse(format!(
                "response to {:#04x} carries {} bytes, bound is {}",
                code,
                data.len(),
                max_size
            )));
        }
        log::trace!("<- response {:#04x} ({} bytes)", code.wrapping_add(1), data.len());
        Ok(data.to_vec())
    }

    /// Like [`read_response`](Self::read_response) but exactly `size` data bytes.
    pub fn read_response_exact(&mut self, code: u8, size: usize) -> Result<Vec<u8>> {
        let data = self.read_response(code, size)?;
        if data.len() != size {
            return Err(Error::UnexpectedResponse(format!(
                "response to {:#04x}: expected {} bytes, got {}",
                code,
                size,
                data.len()
            )));
        }
        Ok(data)
    }
}

/// Payload length from a well-formed normal frame header.
fn announced_len(raw: &[u8]) -> Option<usize> {
    if raw.len() < FRAME_HEADER_LEN || raw[..3] != FRAME_PREAMBLE {
        return None;
    }
    let len = raw[3];
    (raw[4] == lcs(len)).then_some(len as usize)
}
