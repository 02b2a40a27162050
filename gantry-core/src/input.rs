//! Input device multiplexer.
//!
//! The reactor reads command lines from exactly one active source at a
//! time. The serial source is a single-producer single-consumer byte queue
//! (producer owned by the UART receive path, consumer owned here) drained
//! into a persistent line accumulator. Fixture sources are injected line
//! scripts used for self-test runs; they never prompt.
//!
//! `read_line` never blocks: it returns [`Status::Eagain`] until a complete
//! newline-terminated line is available.

use heapless::spsc::Consumer;
use heapless::String;

use gantry_protocol::Status;

use crate::config::{ReactorConfig, INPUT_LINE_LEN, RX_QUEUE_LEN};

/// Input device identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceId {
    /// Default interactive serial device
    Serial,
    /// First fixture script
    FixtureA,
    /// Second fixture script
    FixtureB,
}

impl DeviceId {
    /// Whether prompts should be emitted while this device is active
    pub fn prompt_enabled(self) -> bool {
        matches!(self, DeviceId::Serial)
    }
}

/// A replayable script of command lines backing a fixture device
#[derive(Debug, Clone)]
struct ScriptSource<'a> {
    lines: &'a [&'a str],
    cursor: usize,
}

impl<'a> ScriptSource<'a> {
    fn new(lines: &'a [&'a str]) -> Self {
        Self { lines, cursor: 0 }
    }

    fn rewind(&mut self) {
        self.cursor = 0;
    }

    fn next_line(&mut self) -> Option<&'a str> {
        let line = self.lines.get(self.cursor)?;
        self.cursor += 1;
        Some(line)
    }
}

/// Multiplexer over the serial byte stream and fixture scripts
pub struct InputMux<'a> {
    rx: Consumer<'a, u8, RX_QUEUE_LEN>,
    /// Partial serial line carried across polls
    accumulator: String<INPUT_LINE_LEN>,
    /// Discarding an over-long line through its terminator
    overflow: bool,
    active: DeviceId,
    fixture_a: Option<ScriptSource<'a>>,
    fixture_b: Option<ScriptSource<'a>>,
}

impl<'a> InputMux<'a> {
    /// Create a multiplexer with the serial device active
    pub fn new(rx: Consumer<'a, u8, RX_QUEUE_LEN>, config: &ReactorConfig<'a>) -> Self {
        Self {
            rx,
            accumulator: String::new(),
            overflow: false,
            active: DeviceId::Serial,
            fixture_a: config.fixture_a.map(ScriptSource::new),
            fixture_b: config.fixture_b.map(ScriptSource::new),
        }
    }

    /// Currently active input device
    pub fn active(&self) -> DeviceId {
        self.active
    }

    /// Revert to the default serial device
    pub fn reset_to_default(&mut self) {
        self.active = DeviceId::Serial;
    }

    /// Open a fixture device and make it the active source
    ///
    /// The script restarts from its first line each time it is opened.
    /// Returns [`Status::FileNotOpen`] when no script is configured for the
    /// device, and [`Status::NoSuchDevice`] for the serial device (which is
    /// always open and cannot be re-opened as a fixture).
    pub fn open_fixture(&mut self, device: DeviceId) -> Status {
        let script = match device {
            DeviceId::FixtureA => self.fixture_a.as_mut(),
            DeviceId::FixtureB => self.fixture_b.as_mut(),
            DeviceId::Serial => return Status::NoSuchDevice,
        };
        match script {
            Some(script) => {
                script.rewind();
                self.active = device;
                Status::Ok
            }
            None => Status::FileNotOpen,
        }
    }

    /// Discard all buffered input: pending serial bytes and any partial line
    pub fn discard_pending(&mut self) {
        while self.rx.dequeue().is_some() {}
        self.accumulator.clear();
        self.overflow = false;
    }

    /// Try to read one complete line from the active source into `out`
    ///
    /// Returns [`Status::Ok`] with `out` holding the line (terminator
    /// stripped), [`Status::Eagain`] when no complete line is buffered yet,
    /// [`Status::InputExceedsMaxLength`] after discarding an over-long
    /// line, or [`Status::EndOfFile`] when a fixture script is exhausted.
    pub fn read_line<const N: usize>(&mut self, out: &mut String<N>) -> Status {
        match self.active {
            DeviceId::Serial => self.read_serial_line(out),
            DeviceId::FixtureA | DeviceId::FixtureB => self.read_fixture_line(out),
        }
    }

    fn read_serial_line<const N: usize>(&mut self, out: &mut String<N>) -> Status {
        while let Some(byte) = self.rx.dequeue() {
            match byte {
                b'\r' => {} // bare CR is not a terminator
                b'\n' => {
                    if self.overflow {
                        self.overflow = false;
                        self.accumulator.clear();
                        return Status::InputExceedsMaxLength;
                    }
                    out.clear();
                    if out.push_str(&self.accumulator).is_err() {
                        self.accumulator.clear();
                        return Status::InputExceedsMaxLength;
                    }
                    self.accumulator.clear();
                    return Status::Ok;
                }
                _ => {
                    if !self.overflow && self.accumulator.push(byte as char).is_err() {
                        self.overflow = true;
                    }
                }
            }
        }
        Status::Eagain
    }

    fn read_fixture_line<const N: usize>(&mut self, out: &mut String<N>) -> Status {
        let script = match self.active {
            DeviceId::FixtureA => self.fixture_a.as_mut(),
            DeviceId::FixtureB => self.fixture_b.as_mut(),
            DeviceId::Serial => None,
        };
        let Some(script) = script else {
            return Status::FileNotOpen;
        };
        match script.next_line() {
            Some(line) => {
                out.clear();
                if out.push_str(line).is_err() {
                    return Status::InputExceedsMaxLength;
                }
                Status::Ok
            }
            None => Status::EndOfFile,
        }
    }
}
