// libpn532/src/protocol/responses/mod.rs

//! Typed decoders for response payloads. Every decoder receives the bytes
//! that follow the `[0xD5, code + 1]` prefix.

pub mod diagnose;
pub mod firmware;
pub mod sam;
pub mod status;
pub mod target;

pub use diagnose::{decode_self_test, self_test_response_len};
pub use firmware::FirmwareVersion;
pub use sam::SamStatus;
pub use status::{BitRate, GeneralStatus, TargetInfo};
pub use target::ListedTarget;
