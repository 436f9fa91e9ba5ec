// libpn532/src/card/operations/mod.rs

//! Card operations as free functions over a [`Device`](crate::device::Device).
//! Everything except target listing and deselect goes through the
//! generic data exchange.

pub mod auth;
pub mod read;
pub mod target;

pub use auth::authenticate;
pub use read::{read_block, read_sector};
pub use target::{deselect, list_passive_targets};
