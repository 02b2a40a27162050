//! The reactor: session state and lifecycle for the top-level loop.
//!
//! One `Reactor` instance exists for the lifetime of the firmware. It owns
//! the input multiplexer, the in-flight line buffers, the communication
//! mode, and the collaborator seams. At most one command line is in flight
//! at a time: the scheduler never reads a new line before the previous
//! line's parse/execute/respond round trip has finished or yielded.

mod dispatch;
mod respond;

use core::fmt::Write as _;

use heapless::spsc::Consumer;
use heapless::String;

use crate::config::{
    ReactorConfig, FIRMWARE_BUILD, FIRMWARE_VERSION, INPUT_LINE_LEN, OUTPUT_BUF_LEN, PRODUCT_NAME,
    RX_QUEUE_LEN,
};
use crate::input::{DeviceId, InputMux};
use crate::signal::SignalSet;
use crate::traits::{Console, Machine, PlannerQueue, Protocols};

/// Active reply/prompt grammar
///
/// Set as a side effect of classifying input lines, not by explicit
/// command. `MachineProtocol` is pinned externally and survives `$`/`?`
/// lines; a `{` line always switches to `StructuredData`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommMode {
    /// Human-oriented text with prompts
    TextInteractive,
    /// Terse ok/err acknowledgments for sender programs
    MachineProtocol,
    /// Structured-data envelopes
    StructuredData,
}

/// Top-level reactor state
pub struct Reactor<'a, M, P, C, Q> {
    pub(crate) signals: &'a SignalSet,
    pub(crate) input: InputMux<'a>,
    pub(crate) machine: M,
    pub(crate) protocols: P,
    pub(crate) console: C,
    pub(crate) planner: Q,
    pub(crate) mode: CommMode,
    pub(crate) in_buf: String<INPUT_LINE_LEN>,
    pub(crate) out_buf: String<OUTPUT_BUF_LEN>,
    pub(crate) tx_high_water: usize,
    version: f32,
    build: f32,
}

impl<'a, M, P, C, Q> Reactor<'a, M, P, C, Q>
where
    M: Machine,
    P: Protocols,
    C: Console,
    Q: PlannerQueue,
{
    /// Create a reactor reading from the given serial consumer
    pub fn new(
        signals: &'a SignalSet,
        rx: Consumer<'a, u8, RX_QUEUE_LEN>,
        config: ReactorConfig<'a>,
        machine: M,
        protocols: P,
        console: C,
        planner: Q,
    ) -> Self {
        Self {
            signals,
            input: InputMux::new(rx, &config),
            machine,
            protocols,
            console,
            planner,
            mode: CommMode::TextInteractive,
            in_buf: String::new(),
            out_buf: String::new(),
            tx_high_water: config.tx_high_water,
            version: FIRMWARE_VERSION,
            build: FIRMWARE_BUILD,
        }
    }

    /// Announce the firmware on the error channel
    pub fn announce(&mut self) {
        let mut banner: String<96> = String::new();
        let _ = write!(
            banner,
            "\n#### {} version {:.2} (build {:.2}) ####\n",
            PRODUCT_NAME, self.version, self.build
        );
        self.console.write_err(&banner);
    }

    /// Final part of the announcement: the system accepts input now
    pub fn ready(&mut self) {
        self.console.write_err("Type h for help\n");
        self.prompt();
    }

    /// Full application reset, as performed by the abort signal
    ///
    /// Re-initializes the control machine and atomically discards all
    /// in-flight input: pending serial bytes, any partial line, and both
    /// line buffers. The communication mode and active source survive.
    pub fn application_reset(&mut self) {
        self.machine.reset();
        self.input.discard_pending();
        self.in_buf.clear();
        self.out_buf.clear();
    }

    /// Revert input to the default serial device
    pub fn reset_source(&mut self) {
        self.input.reset_to_default();
    }

    /// Pin the machine-protocol reply grammar (set from external config)
    pub fn pin_machine_protocol(&mut self) {
        self.mode = CommMode::MachineProtocol;
    }

    /// Current communication mode
    pub fn mode(&self) -> CommMode {
        self.mode
    }

    /// Currently active input device
    pub fn active_source(&self) -> DeviceId {
        self.input.active()
    }

    /// Whether prompts are emitted for the active source
    pub fn prompt_enabled(&self) -> bool {
        self.input.active().prompt_enabled()
    }

    /// Access the control machine
    pub fn machine(&self) -> &M {
        &self.machine
    }

    /// Mutable access to the control machine
    pub fn machine_mut(&mut self) -> &mut M {
        &mut self.machine
    }
}
