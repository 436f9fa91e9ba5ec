#[path = "../common/mod.rs"]
mod common;

use libpn532::constants::WAKE_PREAMBLE;
use libpn532::device::DeviceBuilder;
use libpn532::transport::mock::{MockDelay, MockStream};
use libpn532::transport::{StreamTransport, Transport};
use libpn532::Error;

#[test]
fn zero_length_consumes_exactly_six_bytes() -> anyhow::Result<()> {
    let stream = MockStream::new();
    let ack = common::fixtures::ack();
    stream.feed(&ack);
    stream.feed(&common::fixtures::firmware_frame());

    let mut t = StreamTransport::new(stream.clone(), MockDelay::new());
    let got = t.read_frame(6)?;
    assert_eq!(got, ack);
    assert_eq!(stream.consumed(), 6);

    // the next frame starts right where the ack ended
    let fw = t.read_frame(64)?;
    assert_eq!(fw, common::fixtures::firmware_frame());
    Ok(())
}

#[test]
fn error_frame_is_read_whole() -> anyhow::Result<()> {
    let stream = MockStream::new();
    stream.feed(&common::fixtures::error_frame(0x7F));
    let mut t = StreamTransport::new(stream.clone(), MockDelay::new());
    assert_eq!(t.read_frame(8)?.len(), 8);
    assert_eq!(stream.remaining(), 0);
    Ok(())
}

#[test]
fn empty_stream_times_out() {
    let stream = MockStream::new();
    let delay = MockDelay::new();
    let mut t = StreamTransport::new(stream.clone(), delay.clone());
    assert!(matches!(t.read_frame(6), Err(Error::Timeout)));
    assert_eq!(stream.peeks(), 1500);
}

#[test]
fn session_over_stream_sends_wake_preamble() -> anyhow::Result<()> {
    common::helpers::init_logger();
    let stream = MockStream::new();
    stream.feed(&common::fixtures::ack());
    stream.feed(&libpn532::test_support::response_frame(0x14, &[]));
    stream.feed(&common::fixtures::ack());
    stream.feed(&common::fixtures::firmware_frame());
    stream.feed(&common::fixtures::ack());
    stream.feed(&common::fixtures::firmware_frame());

    let transport = StreamTransport::new(stream.clone(), MockDelay::new());
    let mut dev = DeviceBuilder::new()
        .with_transport(transport)
        .with_delay(MockDelay::new())
        .build_on()?;
    dev.firmware_version()?;
    dev.firmware_version()?;

    let written = stream.written();
    // bare preamble, then SAM config and the first command prefixed
    assert_eq!(written.len(), 4);
    assert_eq!(written[0], WAKE_PREAMBLE.to_vec());
    assert!(written[1].starts_with(&WAKE_PREAMBLE));
    assert!(written[2].starts_with(&WAKE_PREAMBLE));
    assert_eq!(written[3][..3], [0x00, 0x00, 0xFF]);
    assert_eq!(stream.remaining(), 0);
    Ok(())
}
