use libpn532::protocol::codec::{command_payload, encode_command_frame};
use libpn532::protocol::{Command, SamMode, SelfTest};
use libpn532::Error;

#[test]
fn encode_get_firmware_version_frame() {
    let frame = encode_command_frame(&Command::GetFirmwareVersion).unwrap();
    assert_eq!(hex::encode(frame), "0000ff02fed4022a00");
}

#[test]
fn encode_sam_configuration_normal() {
    let cmd = Command::SamConfiguration {
        mode: SamMode::Normal,
        timeout: None,
        use_irq: true,
    };
    assert_eq!(command_payload(&cmd).unwrap(), vec![0xD4, 0x14, 0x01, 0x00, 0x01]);
}

#[test]
fn sam_virtual_card_is_unimplemented() {
    let cmd = Command::SamConfiguration {
        mode: SamMode::VirtualCard,
        timeout: None,
        use_irq: false,
    };
    assert!(matches!(encode_command_frame(&cmd), Err(Error::Unimplemented(_))));
}

#[test]
fn encode_diagnose_variants() {
    let rom = Command::Diagnose { test: SelfTest::Rom };
    assert_eq!(command_payload(&rom).unwrap(), vec![0xD4, 0x00, 0x01]);

    let echo = Command::Diagnose {
        test: SelfTest::CommunicationLine(vec![0xAA, 0xBB]),
    };
    assert_eq!(command_payload(&echo).unwrap(), vec![0xD4, 0x00, 0x00, 0xAA, 0xBB]);
}

#[test]
fn oversized_diagnose_echo_is_unimplemented() {
    let echo = Command::Diagnose {
        test: SelfTest::CommunicationLine(vec![0x00; 251]),
    };
    assert!(matches!(encode_command_frame(&echo), Err(Error::Unimplemented(_))));
}

#[test]
fn target_numbers_are_range_checked() {
    assert!(matches!(
        Command::InDeselect { target: 3 }.encode(),
        Err(Error::InvalidArgument(_))
    ));
    assert_eq!(Command::InDeselect { target: 0 }.encode().unwrap(), vec![0x00]);
    assert!(matches!(
        Command::InDataExchange {
            target: 0,
            data: vec![0x30, 0x00],
        }
        .encode(),
        Err(Error::InvalidArgument(_))
    ));
}

#[test]
fn list_passive_target_one_type_a() {
    let cmd = Command::InListPassiveTarget {
        max_targets: 1,
        baud: 0x00,
    };
    assert_eq!(command_payload(&cmd).unwrap(), vec![0xD4, 0x4A, 0x01, 0x00]);
}
