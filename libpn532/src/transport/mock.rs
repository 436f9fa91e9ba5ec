// libpn532/src/transport/mock.rs

//! In-memory collaborators for tests. Every mock is a cheap clone handle
//! over shared state, so a test can keep one handle and give the other to
//! a transport or session, then inspect what happened.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use crate::transport::traits::{Bus, ByteStream, Delay, DigitalLine, Level, Transport};
use crate::{Error, Result};

#[derive(Debug, Default)]
struct TransportState {
    written: Vec<Vec<u8>>,
    reads: VecDeque<Vec<u8>>,
    read_sizes: Vec<usize>,
    wakeups: usize,
}

/// Frame-level mock. Records written frames and hands out queued ones.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    state: Rc<RefCell<TransportState>>,
}

impl MockTransport {
    /// Empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue raw bytes for the next `read_frame` call.
    pub fn push_frame(&self, frame: Vec<u8>) {
        self.state.borrow_mut().reads.push_back(frame);
    }

    /// Every frame written so far.
    pub fn written(&self) -> Vec<Vec<u8>> {
        self.state.borrow().written.clone()
    }

    /// `max_size` argument of every `read_frame` call so far.
    pub fn read_sizes(&self) -> Vec<usize> {
        self.state.borrow().read_sizes.clone()
    }

    /// Number of `wakeup` calls.
    pub fn wakeups(&self) -> usize {
        self.state.borrow().wakeups
    }

    /// Frames queued but not yet read.
    pub fn pending_reads(&self) -> usize {
        self.state.borrow().reads.len()
    }

    /// Forget recorded writes, reads and wakeups. Queued frames are kept.
    pub fn clear_history(&self) {
        let mut st = self.state.borrow_mut();
        st.written.clear();
        st.read_sizes.clear();
        st.wakeups = 0;
    }
}

impl Transport for MockTransport {
    fn write_frame(&mut self, frame: &[u8]) -> Result<()> {
        self.state.borrow_mut().written.push(frame.to_vec());
        Ok(())
    }

    fn read_frame(&mut self, max_size: usize) -> Result<Vec<u8>> {
        let mut st = self.state.borrow_mut();
        st.read_sizes.push(max_size);
        // Nothing queued behaves like a chip that never answers
        st.reads.pop_front().ok_or(Error::Timeout)
    }

    fn wakeup(&mut self) -> Result<()> {
        self.state.borrow_mut().wakeups += 1;
        Ok(())
    }
}

#[derive(Debug, Default)]
struct BusState {
    written: Vec<Vec<u8>>,
    reads: VecDeque<Vec<u8>>,
    read_lens: Vec<usize>,
    fail_writes: usize,
}

/// Packet bus mock. Each `read` consumes one queued chunk, truncated or
/// zero-padded to the requested length; an empty queue reads as zeros.
#[derive(Debug, Clone, Default)]
pub struct MockBus {
    state: Rc<RefCell<BusState>>,
}

impl MockBus {
    /// Empty mock; unqueued reads return all zeros.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the bytes for the next read. Padded with zeros or
    /// truncated to the read length.
    pub fn push_read(&self, data: Vec<u8>) {
        self.state.borrow_mut().reads.push_back(data);
    }

    /// Make the next `n` writes fail with `Error::Bus`.
    pub fn fail_writes(&self, n: usize) {
        self.state.borrow_mut().fail_writes = n;
    }

    /// Every bus write so far.
    pub fn written(&self) -> Vec<Vec<u8>> {
        self.state.borrow().written.clone()
    }

    /// Number of bus reads.
    pub fn read_count(&self) -> usize {
        self.state.borrow().read_lens.len()
    }

    /// Buffer length of every bus read.
    pub fn read_lens(&self) -> Vec<usize> {
        self.state.borrow().read_lens.clone()
    }
}

impl Bus for MockBus {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        let mut st = self.state.borrow_mut();
        if st.fail_writes > 0 {
            st.fail_writes -= 1;
            return Err(Error::Bus("write not acknowledged".into()));
        }
        st.written.push(data.to_vec());
        Ok(())
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<()> {
        let mut st = self.state.borrow_mut();
        st.read_lens.push(buf.len());
        buf.fill(0);
        if let Some(chunk) = st.reads.pop_front() {
            let n = chunk.len().min(buf.len());
            buf[..n].copy_from_slice(&chunk[..n]);
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
struct StreamState {
    rx: VecDeque<u8>,
    written: Vec<Vec<u8>>,
    consumed: usize,
    stalls: usize,
    peeks: usize,
}

/// Byte-stream mock with look-ahead.
#[derive(Debug, Clone, Default)]
pub struct MockStream {
    state: Rc<RefCell<StreamState>>,
}

impl MockStream {
    /// Empty stream.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append bytes to the receive side.
    pub fn feed(&self, bytes: &[u8]) {
        self.state.borrow_mut().rx.extend(bytes.iter().copied());
    }

    /// The next `n` peeks report "not yet available".
    pub fn stall(&self, n: usize) {
        self.state.borrow_mut().stalls = n;
    }

    /// Every `write_all` so far.
    pub fn written(&self) -> Vec<Vec<u8>> {
        self.state.borrow().written.clone()
    }

    /// Total bytes consumed via `read_exact`.
    pub fn consumed(&self) -> usize {
        self.state.borrow().consumed
    }

    /// Bytes fed but not yet consumed.
    pub fn remaining(&self) -> usize {
        self.state.borrow().rx.len()
    }

    /// Number of `peek_at` calls.
    pub fn peeks(&self) -> usize {
        self.state.borrow().peeks
    }
}

impl ByteStream for MockStream {
    fn peek_at(&mut self, offset: usize) -> Result<Option<u8>> {
        let mut st = self.state.borrow_mut();
        st.peeks += 1;
        if st.stalls > 0 {
            st.stalls -= 1;
            return Ok(None);
        }
        Ok(st.rx.get(offset).copied())
    }

    fn read_exact(&mut self, n: usize) -> Result<Vec<u8>> {
        let mut st = self.state.borrow_mut();
        if st.rx.len() < n {
            return Err(Error::Timeout);
        }
        st.consumed += n;
        Ok(st.rx.drain(..n).collect())
    }

    fn write_all(&mut self, data: &[u8]) -> Result<()> {
        self.state.borrow_mut().written.push(data.to_vec());
        Ok(())
    }
}

#[derive(Debug)]
struct LineState {
    level: Level,
    history: Vec<Level>,
    waits: Vec<(Level, Duration)>,
    wait_result: bool,
}

/// Digital line mock. `wait_for_level` returns immediately with the
/// configured result.
#[derive(Debug, Clone)]
pub struct MockLine {
    state: Rc<RefCell<LineState>>,
}

impl MockLine {
    /// Line starting at `level`; waits succeed.
    pub fn new(level: Level) -> Self {
        Self {
            state: Rc::new(RefCell::new(LineState {
                level,
                history: Vec::new(),
                waits: Vec::new(),
                wait_result: true,
            })),
        }
    }

    /// Make subsequent waits time out (`false`) or succeed (`true`).
    pub fn set_wait_result(&self, ready: bool) {
        self.state.borrow_mut().wait_result = ready;
    }

    /// Levels driven through `set_level`, in order.
    pub fn history(&self) -> Vec<Level> {
        self.state.borrow().history.clone()
    }

    /// Arguments of every `wait_for_level` call.
    pub fn waits(&self) -> Vec<(Level, Duration)> {
        self.state.borrow().waits.clone()
    }
}

impl DigitalLine for MockLine {
    fn set_level(&mut self, level: Level) -> Result<()> {
        let mut st = self.state.borrow_mut();
        st.level = level;
        st.history.push(level);
        Ok(())
    }

    fn level(&mut self) -> Result<Level> {
        Ok(self.state.borrow().level)
    }

    fn wait_for_level(&mut self, level: Level, timeout: Duration) -> Result<bool> {
        let mut st = self.state.borrow_mut();
        st.waits.push((level, timeout));
        Ok(st.wait_result)
    }
}

/// Delay mock that only records requested sleeps.
#[derive(Debug, Clone, Default)]
pub struct MockDelay {
    sleeps: Rc<RefCell<Vec<Duration>>>,
}

impl MockDelay {
    /// Delay that records instead of sleeping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every requested sleep.
    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.borrow().clone()
    }

    /// Sum of requested sleeps in milliseconds.
    pub fn total_ms(&self) -> u128 {
        self.sleeps.borrow().iter().map(Duration::as_millis).sum()
    }
}

impl Delay for MockDelay {
    fn delay(&mut self, duration: Duration) {
        self.sleeps.borrow_mut().push(duration);
    }
}
