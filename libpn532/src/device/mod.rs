// libpn532/src/device/mod.rs

//! Device session: power state, the command channel and the chip-level
//! commands.

pub mod builder;
pub mod channel;
pub mod config;
pub mod handle;
pub mod power;

pub use builder::DeviceBuilder;
pub use channel::CommandChannel;
pub use config::DeviceConfig;
pub use handle::Device;
pub use power::PowerMode;
