// libpn532/src/protocol/mod.rs

//! Wire protocol: frames, checksums, command encoders and response
//! decoders. Nothing here touches a transport.

pub mod checksum;
pub mod codec;
pub mod commands;
pub mod frame;
pub mod parser;
pub mod responses;

pub use checksum::{dcs, lcs};
pub use commands::{Command, SamMode, SelfTest};
pub use frame::{Frame, frame_len};
pub use responses::{
    BitRate, FirmwareVersion, GeneralStatus, ListedTarget, SamStatus, TargetInfo,
};
