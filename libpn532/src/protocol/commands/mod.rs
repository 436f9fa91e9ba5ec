// libpn532/src/protocol/commands/mod.rs

//! Command enum and per-command parameter encoders.

pub mod diagnose;
pub mod sam;
pub mod target;

pub use diagnose::{SelfTest, encode_diagnose};
pub use sam::{SamMode, encode_sam_configuration};
pub use target::{encode_in_data_exchange, encode_in_deselect, encode_in_list_passive_target};

use crate::Result;
use crate::constants::*;

/// High-level Command enum. New commands should be added here and
/// their parameter encoder placed in `protocol::commands::<name>.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run one of the chip's self tests.
    Diagnose {
        /// Which test.
        test: SelfTest,
    },
    /// Query IC, version and supported protocols.
    GetFirmwareVersion,
    /// Query field, target and SAM status.
    GetGeneralStatus,
    /// Select the SAM mode; also leaves low-power mode.
    SamConfiguration {
        /// SAM mode.
        mode: SamMode,
        /// Virtual card timeout in 50 ms units.
        timeout: Option<u8>,
        /// Drive the IRQ line.
        use_irq: bool,
    },
    /// Detect passive targets in the field.
    InListPassiveTarget {
        /// At most 2.
        max_targets: u8,
        /// Baud rate / modulation code.
        baud: u8,
    },
    /// Send data to an activated target.
    InDataExchange {
        /// Logical target number (1 or 2).
        target: u8,
        /// Bytes for the target.
        data: Vec<u8>,
    },
    /// Deselect a target, keeping its state.
    InDeselect {
        /// Logical target number, or 0 for all.
        target: u8,
    },
}

impl Command {
    /// Return the chip command code.
    pub fn command_code(&self) -> u8 {
        match self {
            Self::Diagnose { .. } => CMD_DIAGNOSE,
            Self::GetFirmwareVersion => CMD_GET_FIRMWARE_VERSION,
            Self::GetGeneralStatus => CMD_GET_GENERAL_STATUS,
            Self::SamConfiguration { .. } => CMD_SAM_CONFIGURATION,
            Self::InListPassiveTarget { .. } => CMD_IN_LIST_PASSIVE_TARGET,
            Self::InDataExchange { .. } => CMD_IN_DATA_EXCHANGE,
            Self::InDeselect { .. } => CMD_IN_DESELECT,
        }
    }

    /// Encode the command parameters (the bytes after the command code).
    pub fn encode(&self) -> Result<Vec<u8>> {
        match self {
            Self::Diagnose { test } => encode_diagnose(test),
            Self::GetFirmwareVersion | Self::GetGeneralStatus => Ok(Vec::new()),
            Self::SamConfiguration {
                mode,
                timeout,
                use_irq,
            } => encode_sam_configuration(*mode, *timeout, *use_irq),
            Self::InListPassiveTarget { max_targets, baud } => {
                encode_in_list_passive_target(*max_targets, *baud)
            }
            Self::InDataExchange { target, data } => encode_in_data_exchange(*target, data),
            Self::InDeselect { target } => encode_in_deselect(*target),
        }
    }
}
