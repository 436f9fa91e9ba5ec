#[path = "../common/mod.rs"]
mod common;

use libpn532::protocol::codec::strip_response;
use libpn532::protocol::{BitRate, FirmwareVersion, GeneralStatus, ListedTarget, SamStatus};
use libpn532::Error;
use proptest::prelude::*;

#[test]
fn firmware_version_decode_example() -> anyhow::Result<()> {
    let fw = FirmwareVersion::decode(&common::fixtures::firmware_data())?;
    assert_eq!(
        fw,
        FirmwareVersion {
            ic: 0x32,
            version: 1,
            revision: 6,
            support: 7,
        }
    );
    assert!(fw.supports_iso14443_type_a());
    assert!(fw.supports_iso14443_type_b());
    assert!(fw.supports_iso18092());
    Ok(())
}

#[test]
fn firmware_flags_are_independent() -> anyhow::Result<()> {
    let fw = FirmwareVersion::decode(&[0x32, 0x01, 0x06, 0x04])?;
    assert!(!fw.supports_iso14443_type_a());
    assert!(!fw.supports_iso14443_type_b());
    assert!(fw.supports_iso18092());
    Ok(())
}

#[test]
fn general_status_with_one_target() -> anyhow::Result<()> {
    let status = GeneralStatus::decode(&common::fixtures::general_status_data())?;
    assert_eq!(status.error_code, 0);
    assert!(status.field_present);
    assert_eq!(status.targets.len(), 1);
    let t = status.targets[0];
    assert_eq!(t.logical_number, 1);
    assert_eq!(t.bit_rate_reception, BitRate::Kbps106);
    assert_eq!(t.bit_rate_transmission.bits_per_second(), 212_000);
    assert_eq!(t.modulation_type, 0x10);
    assert_eq!(status.sam_status.clad_line_level(), 1);
    Ok(())
}

#[test]
fn general_status_rejects_three_targets() {
    assert!(matches!(
        GeneralStatus::decode(&common::fixtures::general_status_three_targets()),
        Err(Error::InvalidResponse(_))
    ));
}

#[test]
fn general_status_rejects_unknown_bit_rate() {
    let mut data = common::fixtures::general_status_data();
    data[4] = 0x03;
    assert!(matches!(
        GeneralStatus::decode(&data),
        Err(Error::InvalidResponse(_))
    ));
}

#[test]
fn sam_status_bits() {
    let s = SamStatus::new(0x87);
    assert!(s.negative_pulse_detected());
    assert!(s.external_rf_detected());
    assert!(s.timeout_after_sig_act_irq());
    assert_eq!(s.clad_line_level(), 1);

    let s = SamStatus::new(0x02);
    assert!(!s.negative_pulse_detected());
    assert!(s.external_rf_detected());
    assert_eq!(s.clad_line_level(), 0);
}

#[test]
fn listed_target_uid() {
    let listed = ListedTarget::new(common::fixtures::listed_target_data());
    assert_eq!(listed.target_count(), 1);
    assert_eq!(listed.sens_res(), Some(0x0004));
    assert_eq!(listed.sel_res(), Some(0x08));
    let uid = listed.uid().unwrap();
    assert_eq!(uid.as_bytes(), &common::fixtures::sample_uid_bytes());
}

#[test]
fn strip_response_checks_prefix() {
    assert!(matches!(
        strip_response(0x02, &[0xD5, 0x05, 0x00]),
        Err(Error::UnexpectedResponse(_))
    ));
    assert_eq!(strip_response(0x4A, &[0xD5, 0x4B, 0x00]).unwrap(), &[0x00]);
}

proptest! {
    #[test]
    fn general_status_decode_never_panics(data in proptest::collection::vec(any::<u8>(), 0..16)) {
        let _ = GeneralStatus::decode(&data);
    }

    #[test]
    fn listed_target_accessors_never_panic(data in proptest::collection::vec(any::<u8>(), 0..24)) {
        let t = ListedTarget::new(data);
        let _ = (t.target_number(), t.sens_res(), t.sel_res(), t.uid());
    }
}
