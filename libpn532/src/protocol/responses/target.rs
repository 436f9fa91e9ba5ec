// libpn532/src/protocol/responses/target.rs

//! InListPassiveTarget reply.

use crate::types::Uid;

/// Raw InListPassiveTarget reply for a 106 kbps type A poll.
///
/// Layout: NbTg(1) + Tg(1) + SENS_RES(2) + SEL_RES(1) + NFCIDLength(1) + NFCID(n) [+ ATS]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedTarget {
    raw: Vec<u8>,
}

impl ListedTarget {
    /// Reply bound for one type A target with a triple-size UID and ATS.
    pub const MAX_LEN: usize = 64;

    /// Wrap the reply data.
    pub fn new(raw: Vec<u8>) -> Self {
        Self { raw }
    }

    /// Raw reply data.
    pub fn as_bytes(&self) -> &[u8] {
        &self.raw
    }

    /// Number of targets the chip initialised.
    pub fn target_count(&self) -> u8 {
        self.raw.first().copied().unwrap_or(0)
    }

    /// Logical target number assigned by the chip.
    pub fn target_number(&self) -> Option<u8> {
        self.present()?;
        self.raw.get(1).copied()
    }

    /// SENS_RES (ATQA) of the first target.
    pub fn sens_res(&self) -> Option<u16> {
        self.present()?;
        let b = self.raw.get(2..4)?;
        Some(u16::from_be_bytes([b[0], b[1]]))
    }

    /// SEL_RES (SAK) of the first target.
    pub fn sel_res(&self) -> Option<u8> {
        self.present()?;
        self.raw.get(4).copied()
    }

    /// UID suffix of the first target, if one was found.
    pub fn uid(&self) -> Option<Uid> {
        self.present()?;
        let len = *self.raw.get(5)? as usize;
        let bytes = self.raw.get(6..6 + len)?;
        if bytes.is_empty() {
            return None;
        }
        Some(Uid::from_bytes(bytes.to_vec()))
    }

    fn present(&self) -> Option<()> {
        (self.target_count() > 0).then_some(())
    }
}
