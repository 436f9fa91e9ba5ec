#[path = "../common/mod.rs"]
mod common;

use std::time::Duration;

use libpn532::device::DeviceBuilder;
use libpn532::transport::mock::{MockBus, MockDelay, MockLine};
use libpn532::transport::{Level, PollingConfig, PollingTransport, Transport};
use libpn532::utils::RetryPolicy;
use libpn532::{Error, PowerMode};

fn with_status(status: u8, frame: &[u8]) -> Vec<u8> {
    let mut v = vec![status];
    v.extend_from_slice(frame);
    v
}

#[test]
fn ready_after_two_busy_polls() -> anyhow::Result<()> {
    common::helpers::init_logger();
    let bus = MockBus::new();
    let line = MockLine::new(Level::Low);
    let frame = common::fixtures::firmware_frame();
    bus.push_read(vec![0x00]);
    bus.push_read(vec![0x00]);
    bus.push_read(with_status(0x01, &frame));

    let mut t = PollingTransport::new(bus.clone(), MockDelay::new()).with_ready_line(line);
    let got = t.read_frame(frame.len())?;

    assert_eq!(bus.read_count(), 3);
    assert_eq!(got, frame);
    Ok(())
}

#[test]
fn busy_forever_is_timeout() {
    let bus = MockBus::new();
    let delay = MockDelay::new();
    let mut t = PollingTransport::new(bus.clone(), delay.clone());
    assert!(matches!(t.read_frame(6), Err(Error::Timeout)));
    assert_eq!(bus.read_count(), 100);
    assert_eq!(delay.total_ms(), 99 * 10);
}

#[test]
fn polling_bounds_are_configurable() {
    let bus = MockBus::new();
    let line = MockLine::new(Level::High);
    let config = PollingConfig {
        ready_timeout: Duration::from_millis(250),
        ready_level: Level::High,
        retry: RetryPolicy::new(7, Duration::from_millis(2)),
    };
    let mut t = PollingTransport::new(bus.clone(), MockDelay::new())
        .with_ready_line(line.clone())
        .with_config(config);
    assert!(t.read_frame(6).is_err());
    assert_eq!(bus.read_count(), 7);
    assert_eq!(line.waits(), vec![(Level::High, Duration::from_millis(250))]);
}

#[test]
fn session_over_polling_bus() -> anyhow::Result<()> {
    common::helpers::init_logger();
    let bus = MockBus::new();
    let ack = common::fixtures::ack();
    // SAM configuration
    bus.push_read(with_status(0x01, &ack));
    bus.push_read(with_status(0x01, &libpn532::test_support::response_frame(0x14, &[])));
    // GetFirmwareVersion
    bus.push_read(with_status(0x01, &ack));
    bus.push_read(with_status(0x01, &common::fixtures::firmware_frame()));

    let transport = PollingTransport::new(bus.clone(), MockDelay::new());
    let mut dev = DeviceBuilder::new()
        .with_transport(transport)
        .with_delay(MockDelay::new())
        .build_on()?;
    assert_eq!(dev.power_mode(), Some(PowerMode::Normal));

    let fw = dev.firmware_version()?;
    assert_eq!(fw.ic, 0x32);
    assert_eq!(bus.written().len(), 2);
    // ack reads are sized for an error frame plus the status byte
    assert_eq!(bus.read_lens()[0], 9);
    Ok(())
}

#[test]
fn corrupted_ack_over_polling_bus_fails_the_command() -> anyhow::Result<()> {
    let bus = MockBus::new();
    let ack = common::fixtures::ack();
    bus.push_read(with_status(0x01, &ack));
    bus.push_read(with_status(0x01, &libpn532::test_support::response_frame(0x14, &[])));
    let mut bad_ack = ack.clone();
    bad_ack[4] = 0x00;
    bus.push_read(with_status(0x01, &bad_ack));

    let mut dev = DeviceBuilder::new()
        .with_transport(PollingTransport::new(bus.clone(), MockDelay::new()))
        .with_delay(MockDelay::new())
        .build_on()?;
    assert!(matches!(dev.firmware_version(), Err(Error::InvalidFrame(_))));
    Ok(())
}

#[test]
fn oversized_response_over_polling_bus_is_unexpected() -> anyhow::Result<()> {
    let bus = MockBus::new();
    let ack = common::fixtures::ack();
    bus.push_read(with_status(0x01, &ack));
    bus.push_read(with_status(0x01, &libpn532::test_support::response_frame(0x14, &[])));
    // firmware version answered with two bytes more than it should carry
    bus.push_read(with_status(0x01, &ack));
    bus.push_read(with_status(
        0x01,
        &libpn532::test_support::response_frame(0x02, &[0x32, 0x01, 0x06, 0x07, 0xAA, 0xBB]),
    ));

    let mut dev = DeviceBuilder::new()
        .with_transport(PollingTransport::new(bus.clone(), MockDelay::new()))
        .with_delay(MockDelay::new())
        .build_on()?;
    assert!(matches!(
        dev.firmware_version(),
        Err(Error::UnexpectedResponse(_))
    ));
    Ok(())
}
