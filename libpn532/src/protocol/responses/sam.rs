// libpn532/src/protocol/responses/sam.rs

//! SAM status byte.

/// SAM status byte reported by GetGeneralStatus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SamStatus(u8);

impl SamStatus {
    const NEG_PULSE: u8 = 0x01;
    const EXT_RF_OFF: u8 = 0x02;
    const SIG_ACT_TIMEOUT: u8 = 0x04;
    const CLAD: u8 = 0x80;

    /// Wrap a raw status byte.
    pub fn new(raw: u8) -> Self {
        Self(raw)
    }

    /// The raw status byte.
    pub fn raw(&self) -> u8 {
        self.0
    }

    /// A negative pulse was detected on the CLAD line.
    pub fn negative_pulse_detected(&self) -> bool {
        self.0 & Self::NEG_PULSE != 0
    }

    /// An external RF field was detected and then switched off.
    pub fn external_rf_detected(&self) -> bool {
        self.0 & Self::EXT_RF_OFF != 0
    }

    /// Timeout elapsed after the SigActIRQ line fell.
    pub fn timeout_after_sig_act_irq(&self) -> bool {
        self.0 & Self::SIG_ACT_TIMEOUT != 0
    }

    /// Level of the CLAD line (0 or 1).
    pub fn clad_line_level(&self) -> u8 {
        (self.0 & Self::CLAD) >> 7
    }
}

impl From<u8> for SamStatus {
    fn from(raw: u8) -> Self {
        Self(raw)
    }
}
