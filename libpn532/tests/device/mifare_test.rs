#[path = "../common/mod.rs"]
mod common;

use libpn532::card::{KeyType, MifareCard, MifareKey, is_sector_trailer};
use libpn532::Error;

#[test]
fn discover_and_read_sector() -> anyhow::Result<()> {
    let (mut dev, mock) = common::helpers::ready_session();
    common::helpers::queue(&mock, 0x4A, &common::fixtures::listed_target_data());
    // authenticate sector 1, then four block reads
    common::helpers::queue(&mock, 0x40, &[0x00]);
    for fill in 4..8u8 {
        common::helpers::queue(&mock, 0x40, &common::fixtures::read_reply(fill));
    }

    let listed = dev.list_passive_targets()?;
    let card = MifareCard::from_listed(&listed)?;
    assert_eq!(card.uid().to_hex(), "deadbeef");

    let blocks = card.read_sector(&mut dev, 1, KeyType::A, &MifareKey::DEFAULT)?;
    assert_eq!(blocks.len(), 4);
    for (i, block) in blocks.iter().enumerate() {
        assert_eq!(block.as_bytes(), &common::fixtures::sample_block(4 + i as u8));
    }
    assert!(is_sector_trailer(7));

    let auth = common::helpers::written_payload(&mock, 1);
    assert_eq!(&auth[..5], &[0xD4, 0x40, 0x01, 0x60, 0x04]);
    assert_eq!(&auth[5..11], &[0xFF; 6]);
    assert_eq!(&auth[11..], &common::fixtures::sample_uid_bytes());
    Ok(())
}

#[test]
fn auth_with_key_b() -> anyhow::Result<()> {
    let (mut dev, mock) = common::helpers::ready_session();
    common::helpers::queue(&mock, 0x40, &[0x00]);
    let card = MifareCard::new(libpn532::Uid::from_bytes(vec![1, 2, 3, 4]), 1);
    let key = MifareKey::new([0xA0, 0xA1, 0xA2, 0xA3, 0xA4, 0xA5]);
    card.authenticate(&mut dev, 12, KeyType::B, &key)?;
    let sent = common::helpers::written_payload(&mock, 0);
    assert_eq!(&sent[3..5], &[0x61, 12]);
    assert_eq!(&sent[5..11], key.as_bytes());
    Ok(())
}

#[test]
fn auth_failure_aborts_sector_read() {
    let (mut dev, mock) = common::helpers::ready_session();
    common::helpers::queue(&mock, 0x40, &[0x14]);
    let card = MifareCard::new(libpn532::Uid::from_bytes(vec![1, 2, 3, 4]), 1);
    assert!(matches!(
        card.read_sector(&mut dev, 0, KeyType::A, &MifareKey::DEFAULT),
        Err(Error::DeviceError(0x14))
    ));
    assert_eq!(mock.written().len(), 1);
}

#[test]
fn deselect_all() -> anyhow::Result<()> {
    let (mut dev, mock) = common::helpers::ready_session();
    common::helpers::queue(&mock, 0x44, &[0x00]);
    dev.deselect(0)?;
    assert_eq!(common::helpers::written_payload(&mock, 0), vec![0xD4, 0x44, 0x00]);
    Ok(())
}

#[test]
fn block_read_renders_ascii() -> anyhow::Result<()> {
    let (mut dev, mock) = common::helpers::ready_session();
    let mut reply = vec![0x00];
    reply.extend_from_slice(b"hello, pn532!\x00\x01\x02");
    common::helpers::queue(&mock, 0x40, &reply);
    let card = MifareCard::new(libpn532::Uid::from_bytes(vec![1, 2, 3, 4]), 1);
    let block = card.read(&mut dev, 1)?;
    assert_eq!(block.to_ascii_safe(), "hello, pn532!...");
    Ok(())
}
