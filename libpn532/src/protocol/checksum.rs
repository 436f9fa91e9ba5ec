// libpn532/src/protocol/checksum.rs

//! Frame checksums.

/// Length checksum (LCS): LEN + LCS == 0 (mod 256)
pub fn lcs(len: u8) -> u8 {
    0u8.wrapping_sub(len)
}

/// Data checksum (DCS): sum(payload) + DCS == 0 (mod 256)
pub fn dcs(payload: &[u8]) -> u8 {
    0u8.wrapping_sub(sum(payload))
}

/// Wrapping byte sum of `data`.
pub fn sum(data: &[u8]) -> u8 {
    data.iter().fold(0u8, |acc, &b| acc.wrapping_add(b))
}
