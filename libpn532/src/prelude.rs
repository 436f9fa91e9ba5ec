// libpn532/src/prelude.rs

//! Common imports: `use libpn532::prelude::*;`

pub use crate::card::{KeyType, MifareCard, MifareKey};
pub use crate::device::{Device, DeviceBuilder, DeviceConfig, PowerMode};
pub use crate::protocol::{
    BitRate, Command, FirmwareVersion, GeneralStatus, ListedTarget, SamMode, SamStatus, SelfTest,
    TargetInfo,
};
pub use crate::transport::{
    Bus, ByteStream, Delay, DigitalLine, IoStream, Level, PollingConfig, PollingTransport,
    StdDelay, StreamConfig, StreamTransport, Transport,
};
pub use crate::{BlockData, ChipType, Error, Result, Uid};

// Re-export small utilities for convenience
pub use crate::utils::{RetryPolicy, bytes_to_hex, bytes_to_hex_spaced, ms};
