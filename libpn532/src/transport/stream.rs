// libpn532/src/transport/stream.rs

//! Buffered byte-stream transport (HSU / UART wiring).
//!
//! There is no status byte on a serial link; the reader peeks the length
//! field at offset 3 to learn how many bytes the pending frame occupies.

use std::collections::VecDeque;
use std::io::{self, Read, Write};

use crate::constants::{ACK_FRAME, WAKE_PREAMBLE};
use crate::protocol::frame::frame_len;
use crate::transport::traits::{ByteStream, Delay, Transport};
use crate::utils::retry::{RetryPolicy, retry_with_backoff};
use crate::utils::timeout::{DEFAULT_POLL_BACKOFF_MS, DEFAULT_STREAM_ATTEMPTS, ms};
use crate::{Error, Result};

/// Offset of the LEN byte inside a frame.
const LEN_OFFSET: usize = 3;

/// Bounds for [`StreamTransport`] reads and wakeups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamConfig {
    /// Bound on waiting for the length byte, and then the rest of the
    /// frame, to arrive.
    pub retry: RetryPolicy,
    /// Number of writes after `wakeup` that are prefixed with the wake
    /// preamble.
    pub wake_writes: usize,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            retry: RetryPolicy::new(DEFAULT_STREAM_ATTEMPTS, ms(DEFAULT_POLL_BACKOFF_MS)),
            wake_writes: 2,
        }
    }
}

/// Transport over a buffered serial stream.
pub struct StreamTransport {
    stream: Box<dyn ByteStream>,
    delay: Box<dyn Delay>,
    config: StreamConfig,
    wake_pending: usize,
}

impl StreamTransport {
    /// Transport over `stream` with default bounds. `delay` sleeps between
    /// length-byte peeks.
    pub fn new(stream: impl ByteStream + 'static, delay: impl Delay + 'static) -> Self {
        Self {
            stream: Box::new(stream),
            delay: Box::new(delay),
            config: StreamConfig::default(),
            wake_pending: 0,
        }
    }

    /// Replace the bounds.
    pub fn with_config(mut self, config: StreamConfig) -> Self {
        self.config = config;
        self
    }

    /// Current bounds.
    pub fn config(&self) -> &StreamConfig {
        &self.config
    }
}

impl Transport for StreamTransport {
    fn write_frame(&mut self, frame: &[u8]) -> Result<()> {
        if self.wake_pending == 0 {
            super::trace_frame("uart >>", frame);
            return self.stream.write_all(frame);
        }

        let mut out = Vec::with_capacity(WAKE_PREAMBLE.len() + frame.len());
        out.extend_from_slice(&WAKE_PREAMBLE);
        out.extend_from_slice(frame);
        super::trace_frame("uart >>", &out);
        self.stream.write_all(&out)?;
        self.wake_pending -= 1;
        Ok(())
    }

    fn read_frame(&mut self, max_size: usize) -> Result<Vec<u8>> {
        let stream = &mut self.stream;
        let len = retry_with_backoff(&self.config.retry, self.delay.as_mut(), |_| {
            stream.peek_at(LEN_OFFSET)
        })?
        .ok_or(Error::Timeout)?;

        let total = match len {
            0 => ACK_FRAME.len(),
            n => frame_len(n as usize),
        };
        if total > max_size {
            // Consume it anyway so the stream stays aligned on frame starts
            log::debug!("frame of {} bytes exceeds read bound {}", total, max_size);
        }

        // A serial link may deliver the rest of the frame in later bursts.
        retry_with_backoff(&self.config.retry, self.delay.as_mut(), |_| {
            stream.peek_at(total - 1)
        })?
        .ok_or_else(|| {
            log::debug!("frame of {} bytes never fully arrived", total);
            Error::Timeout
        })?;

        let bytes = self.stream.read_exact(total)?;
        super::trace_frame("uart <<", &bytes);
        Ok(bytes)
    }

    fn wakeup(&mut self) -> Result<()> {
        log::debug!("sending wake preamble");
        self.stream.write_all(&WAKE_PREAMBLE)?;
        self.wake_pending = self.config.wake_writes;
        Ok(())
    }
}

/// Adapts a std `Read + Write` handle (serial port, socket, pipe) to
/// [`ByteStream`]. Timed-out, would-block and end-of-stream reads while
/// peeking report the byte as not yet available.
pub struct IoStream<T> {
    inner: T,
    buf: VecDeque<u8>,
}

impl<T: Read + Write> IoStream<T> {
    /// Wrap `inner`.
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            buf: VecDeque::new(),
        }
    }

    /// Unwrap, dropping any buffered look-ahead.
    pub fn into_inner(self) -> T {
        self.inner
    }

    /// Pull whatever the handle has into the look-ahead buffer. Returns
    /// `false` if nothing arrived.
    fn fill(&mut self) -> Result<bool> {
        let mut chunk = [0u8; 64];
        match self.inner.read(&mut chunk) {
            Ok(0) => Ok(false),
            Ok(n) => {
                self.buf.extend(&chunk[..n]);
                Ok(true)
            }
            Err(e) if is_transient(&e) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

fn is_transient(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock | io::ErrorKind::Interrupted
    )
}

impl<T: Read + Write> ByteStream for IoStream<T> {
    fn peek_at(&mut self, offset: usize) -> Result<Option<u8>> {
        while self.buf.len() <= offset {
            if !self.fill()? {
                return Ok(None);
            }
        }
        Ok(self.buf.get(offset).copied())
    }

    fn read_exact(&mut self, n: usize) -> Result<Vec<u8>> {
        while self.buf.len() < n {
            if !self.fill()? {
                return Err(Error::Timeout);
            }
        }
        Ok(self.buf.drain(..n).collect())
    }

    fn write_all(&mut self, data: &[u8]) -> Result<()> {
        self.inner.write_all(data)?;
        self.inner.flush()?;
        Ok(())
    }
}
