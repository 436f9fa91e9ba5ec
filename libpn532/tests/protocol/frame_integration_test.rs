#[path = "../common/mod.rs"]
mod common;

use libpn532::error::FrameFault;
use libpn532::protocol::Frame;
use libpn532::Error;
use proptest::prelude::*;

#[test]
fn firmware_frame_payload_matches_fixture() -> anyhow::Result<()> {
    let frame = Frame::decode(&common::fixtures::firmware_frame())?;
    let mut expected = vec![0xD5, 0x03];
    expected.extend_from_slice(&common::fixtures::firmware_data());
    assert_eq!(frame.payload(), expected.as_slice());
    Ok(())
}

#[test]
fn ack_fixture_decodes_to_ack() -> anyhow::Result<()> {
    let frame = Frame::decode(&common::fixtures::ack())?;
    assert!(frame.is_ack());
    assert!(frame.payload().is_empty());
    Ok(())
}

#[test]
fn error_frame_carries_code() -> anyhow::Result<()> {
    let frame = Frame::decode(&common::fixtures::error_frame(0x7F))?;
    assert_eq!(frame.error_code(), Some(0x7F));
    Ok(())
}

#[test]
fn trailing_padding_is_ignored() -> anyhow::Result<()> {
    let mut bytes = common::fixtures::ack();
    bytes.extend_from_slice(&[0x00, 0x00]);
    assert!(Frame::decode(&bytes)?.is_ack());
    Ok(())
}

#[test]
fn padded_ack_with_any_flipped_byte_is_not_an_ack() {
    // polling reads hand over an error-frame-sized buffer padded with zeros
    for idx in 0..6 {
        let mut bytes = common::fixtures::ack();
        bytes.extend_from_slice(&[0x00, 0x00, 0x00]);
        bytes[idx] ^= 0xFF;
        assert!(
            !matches!(Frame::decode(&bytes), Ok(Frame::Ack)),
            "flipped byte {} still decodes as ack",
            idx
        );
    }
}

#[test]
fn zero_length_with_wrong_lcs_is_ack_pattern_fault() {
    let bytes = [0x00, 0x00, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
    assert!(matches!(
        Frame::decode(&bytes),
        Err(Error::InvalidFrame(FrameFault::AckPattern))
    ));
}

fn corrupt(frame: &[u8], idx: usize) -> Vec<u8> {
    let mut v = frame.to_vec();
    v[idx] ^= 0x01;
    v
}

proptest! {
    #[test]
    fn corrupting_checksums_or_postamble_fails(payload in proptest::collection::vec(any::<u8>(), 1..=253)) {
        let frame = Frame::encode(&payload).unwrap();
        let n = frame.len();
        for idx in [4, n - 2, n - 1] {
            let res = Frame::decode(&corrupt(&frame, idx));
            prop_assert!(matches!(res, Err(Error::InvalidFrame(_))), "index {} accepted", idx);
        }
    }

    #[test]
    fn corrupting_any_payload_byte_fails_data_checksum(
        payload in proptest::collection::vec(any::<u8>(), 1..=64),
        pick in any::<prop::sample::Index>(),
    ) {
        let frame = Frame::encode(&payload).unwrap();
        let idx = 5 + pick.index(payload.len());
        prop_assert!(matches!(
            Frame::decode(&corrupt(&frame, idx)),
            Err(Error::InvalidFrame(FrameFault::DataChecksum(_)))
        ));
    }
}
