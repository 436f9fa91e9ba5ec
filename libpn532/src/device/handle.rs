// libpn532/src/device/handle.rs

//! The [`Device`] session.

use crate::device::channel::CommandChannel;
use crate::device::config::DeviceConfig;
use crate::device::power::PowerMode;
use crate::protocol::commands::{SamMode, SelfTest};
use crate::protocol::parser;
use crate::protocol::responses::{
    FirmwareVersion, GeneralStatus, ListedTarget, decode_self_test, self_test_response_len,
};
use crate::protocol::Command;
use crate::transport::{Delay, DigitalLine, Level, StdDelay, Transport};
use crate::types::ChipType;
use crate::{Error, Result};

/// Status byte mask for InDataExchange; bit 6 is the MI flag.
const STATUS_ERROR_MASK: u8 = 0x3F;
const STATUS_MORE_INFORMATION: u8 = 0x40;

/// A session with one reader chip.
///
/// The session tracks the chip's power mode. It is `None` until the first
/// `reset` (or `wakeup`), and chip commands are refused with `NotReady`
/// unless the mode is `Normal`.
pub struct Device {
    channel: CommandChannel,
    reset_line: Option<Box<dyn DigitalLine>>,
    delay: Box<dyn Delay>,
    config: DeviceConfig,
    power: Option<PowerMode>,
}

impl Device {
    /// Create a session over an existing transport with default settings.
    pub fn new_with_transport(transport: Box<dyn Transport>) -> Self {
        Self::from_parts(transport, None, Box::new(StdDelay), DeviceConfig::default())
    }

    pub(crate) fn from_parts(
        transport: Box<dyn Transport>,
        reset_line: Option<Box<dyn DigitalLine>>,
        delay: Box<dyn Delay>,
        config: DeviceConfig,
    ) -> Self {
        Self {
            channel: CommandChannel::new(transport),
            reset_line,
            delay,
            config,
            power: None,
        }
    }

    /// Configured chip variant.
    pub fn chip(&self) -> ChipType {
        self.config.chip
    }

    /// Session configuration.
    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    /// Current power mode; `None` before the first reset.
    pub fn power_mode(&self) -> Option<PowerMode> {
        self.power
    }

    /// Reset then wake the chip.
    pub fn on(&mut self) -> Result<()> {
        self.reset()?;
        self.wakeup()
    }

    /// Explicit power-down is not supported by this driver.
    pub fn off(&mut self) -> Result<()> {
        Err(Error::Unimplemented("power-down".into()))
    }

    /// Pulse the reset line (when wired) and put the session back into the
    /// chip's post-reset power mode.
    pub fn reset(&mut self) -> Result<()> {
        if let Some(line) = self.reset_line.as_mut() {
            line.set_level(Level::Low)?;
            self.delay.delay(self.config.reset_hold);
            line.set_level(Level::High)?;
        } else {
            log::debug!("no reset line; assuming {} is freshly reset", self.config.chip);
        }

        let mode = self.config.chip.default_power_mode();
        self.power = Some(mode);
        self.delay.delay(self.config.reset_settle);
        log::info!("{} reset, power mode {}", self.config.chip, mode);
        Ok(())
    }

    /// Wake the host interface and leave low-power mode. Safe to call
    /// repeatedly.
    pub fn wakeup(&mut self) -> Result<()> {
        self.channel.transport_mut().wakeup()?;

        let mode = match self.power {
            Some(mode) => mode,
            None => {
                // Never reset: the chip is in whatever mode power-on left it.
                let mode = self.config.chip.default_power_mode();
                log::debug!("wakeup before reset; assuming {}", mode);
                self.power = Some(mode);
                mode
            }
        };

        match mode {
            PowerMode::Normal => Ok(()),
            PowerMode::LowVBat => self.sam_configuration(SamMode::Normal, None),
            PowerMode::PowerDown => Err(Error::NotReady(
                "chip is powered down; reset it first".into(),
            )),
        }
    }

    /// Configure the security module. This is also the command that moves
    /// the chip out of `LowVBat`.
    pub fn sam_configuration(&mut self, mode: SamMode, timeout: Option<u8>) -> Result<()> {
        let cmd = Command::SamConfiguration {
            mode,
            timeout,
            use_irq: true,
        };
        // validate before touching the bus
        cmd.encode()?;

        match self.power {
            Some(PowerMode::LowVBat) | Some(PowerMode::Normal) => {}
            other => return Err(not_ready(other)),
        }

        self.channel.send_command_exact(&cmd, 0)?;
        if self.power != Some(PowerMode::Normal) {
            log::info!("SAM configured ({}), power mode normal", mode);
        }
        self.power = Some(PowerMode::Normal);
        Ok(())
    }

    /// Send any command and return its response data (at most `max_size`
    /// bytes). Requires `Normal` power mode.
    pub fn execute(&mut self, cmd: &Command, max_size: usize) -> Result<Vec<u8>> {
        self.ensure_ready()?;
        self.channel.send_command(cmd, max_size)
    }

    /// Run one of the chip's built-in self tests. `Ok(false)` means the
    /// chip reported a fault.
    pub fn self_test(&mut self, test: SelfTest) -> Result<bool> {
        let max = self_test_response_len(&test);
        let data = self.execute(&Command::Diagnose { test: test.clone() }, max)?;
        decode_self_test(&test, &data)
    }

    /// IC, firmware version and supported protocols.
    pub fn firmware_version(&mut self) -> Result<FirmwareVersion> {
        self.ensure_ready()?;
        let data = self
            .channel
            .send_command_exact(&Command::GetFirmwareVersion, FirmwareVersion::LEN)?;
        let fw = FirmwareVersion::decode(&data)?;
        match ChipType::from_ic(fw.ic) {
            Some(chip) if chip != self.config.chip => {
                log::warn!("chip reports {} but session is configured for {}", chip, self.config.chip)
            }
            Some(_) => {}
            None => log::debug!("unrecognised IC byte {:#04x}", fw.ic),
        }
        Ok(fw)
    }

    /// RF field, active targets and SAM status.
    pub fn general_status(&mut self) -> Result<GeneralStatus> {
        let data = self.execute(&Command::GetGeneralStatus, GeneralStatus::MAX_LEN)?;
        GeneralStatus::decode(&data)
    }

    /// Exchange `data` with an activated target and return the target's
    /// reply (status byte stripped). `max_response` bounds the reply.
    pub fn data_exchange(&mut self, target: u8, data: &[u8], max_response: usize) -> Result<Vec<u8>> {
        let cmd = Command::InDataExchange {
            target,
            data: data.to_vec(),
        };
        let resp = self.execute(&cmd, max_response + 1)?;
        let status = check_status(&resp)?;
        if status & STATUS_MORE_INFORMATION != 0 {
            log::debug!("target {} has more data pending", target);
        }
        Ok(resp[1..].to_vec())
    }

    /// Detect at most one ISO14443A target.
    pub fn list_passive_targets(&mut self) -> Result<ListedTarget> {
        crate::card::operations::list_passive_targets(self)
    }

    /// Release `target` (0 releases all).
    pub fn deselect(&mut self, target: u8) -> Result<()> {
        crate::card::operations::deselect(self, target)
    }

    fn ensure_ready(&self) -> Result<()> {
        match self.power {
            Some(mode) if mode.accepts_commands() => Ok(()),
            other => Err(not_ready(other)),
        }
    }
}

fn not_ready(mode: Option<PowerMode>) -> Error {
    match mode {
        Some(mode) => Error::NotReady(format!("power mode is {}", mode)),
        None => Error::NotReady("session not initialised; call on() or reset()".into()),
    }
}

/// Check the leading status byte of an InDataExchange reply.
fn check_status(resp: &[u8]) -> Result<u8> {
    let status = parser::byte_at(resp, 0)?;
    match status & STATUS_ERROR_MASK {
        0 => Ok(status),
        code => Err(Error::DeviceError(code)),
    }
}
