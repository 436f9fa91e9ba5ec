// libpn532/src/error.rs

//! Crate error type.

use derive_more::Display;
use thiserror::Error;

/// Which structural check rejected an inbound wire frame.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum FrameFault {
    /// Missing `00 00 FF` preamble and start code.
    #[display(fmt = "invalid preamble/start code")]
    Preamble,
    /// Zero length byte not followed by `FF 00`.
    #[display(fmt = "invalid ack pattern")]
    AckPattern,
    /// LEN + LCS is not zero.
    #[display(fmt = "length checksum mismatch: expected {:#04x}, got {:#04x}", expected, actual)]
    LengthChecksum {
        /// LCS computed from the length byte.
        expected: u8,
        /// LCS found on the wire.
        actual: u8,
    },
    /// Payload + DCS is not zero; carries the non-zero sum.
    #[display(fmt = "data checksum mismatch: sum is {:#04x}", _0)]
    DataChecksum(u8),
    /// Postamble byte other than `00`.
    #[display(fmt = "invalid postamble {:#04x}", _0)]
    Postamble(u8),
    /// Fewer bytes than the header announced.
    #[display(fmt = "truncated frame: need {} bytes, got {}", expected, actual)]
    Truncated {
        /// Bytes needed.
        expected: usize,
        /// Bytes available.
        actual: usize,
    },
}

/// Errors returned by every fallible operation in the crate.
#[derive(Error, Debug)]
pub enum Error {
    /// Inbound frame failed a structural check.
    #[error("invalid frame: {0}")]
    InvalidFrame(FrameFault),

    /// The chip answered with an error frame or a non-zero status byte.
    #[error("device error: code={0:#04x}")]
    DeviceError(u8),

    /// Wrong frame identifier, echoed command code or length.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),

    /// Response fields outside their documented range.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Response shorter than its decoder needs.
    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Bytes needed.
        expected: usize,
        /// Bytes available.
        actual: usize,
    },

    /// A bounded wait for the chip expired.
    #[error("operation timed out")]
    Timeout,

    /// Status byte the transport cannot interpret.
    #[error("unexpected status byte: {0:#04x}")]
    UnexpectedStatus(u8),

    /// Caller-supplied value out of protocol range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Feature this crate does not support.
    #[error("unimplemented: {0}")]
    Unimplemented(String),

    /// Command issued in a power mode that does not accept it.
    #[error("device not ready: {0}")]
    NotReady(String),

    /// Failure reported by a caller-supplied bus or line.
    #[error("bus error: {0}")]
    Bus(String),

    /// Failure of the underlying I/O handle.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<FrameFault> for Error {
    fn from(fault: FrameFault) -> Self {
        Error::InvalidFrame(fault)
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
