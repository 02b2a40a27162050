//! Mock collaborators and a reactor rig shared by the unit tests.

use heapless::spsc::{Producer, Queue};
use heapless::{String, Vec};

use gantry_protocol::Status;

use crate::config::{ReactorConfig, OUTPUT_BUF_LEN, RX_QUEUE_LEN, TX_HIGH_WATER_MARK};
use crate::reactor::Reactor;
use crate::signal::SignalSet;
use crate::traits::{Console, Machine, PlannerQueue, Protocols, Units};

pub(crate) const SCRIPT_A: &[&str] = &["g0 x1", "g0 x2"];
pub(crate) const SCRIPT_B: &[&str] = &["m3"];

pub(crate) type TestReactor<'a> =
    Reactor<'a, MockMachine, MockProtocols, MockConsole, MockPlanner>;

pub(crate) struct MockMachine {
    pub reset_count: usize,
    pub feedhold_count: usize,
    pub cycle_start_count: usize,
    pub units: Units,
    pub switches_status: Status,
    pub report_status: Status,
    pub plan_hold_status: Status,
    pub end_hold_status: Status,
    pub arc_status: Status,
    pub homing_status: Status,
    pub return_home_status: Status,
    /// Names of the continuation polls, in invocation order
    pub call_log: Vec<&'static str, 64>,
}

impl Default for MockMachine {
    fn default() -> Self {
        Self {
            reset_count: 0,
            feedhold_count: 0,
            cycle_start_count: 0,
            units: Units::Millimeters,
            switches_status: Status::Noop,
            report_status: Status::Noop,
            plan_hold_status: Status::Noop,
            end_hold_status: Status::Noop,
            arc_status: Status::Noop,
            homing_status: Status::Noop,
            return_home_status: Status::Noop,
            call_log: Vec::new(),
        }
    }
}

impl MockMachine {
    fn log(&mut self, name: &'static str) {
        let _ = self.call_log.push(name);
    }
}

impl Machine for MockMachine {
    fn reset(&mut self) {
        self.reset_count += 1;
    }

    fn begin_feedhold(&mut self) {
        self.feedhold_count += 1;
    }

    fn begin_cycle_start(&mut self) {
        self.cycle_start_count += 1;
    }

    fn poll_switches(&mut self) -> Status {
        self.log("switches");
        self.switches_status
    }

    fn status_report(&mut self) -> Status {
        self.log("status_report");
        self.report_status
    }

    fn plan_hold(&mut self) -> Status {
        self.log("plan_hold");
        self.plan_hold_status
    }

    fn end_hold(&mut self) -> Status {
        self.log("end_hold");
        self.end_hold_status
    }

    fn arc(&mut self) -> Status {
        self.log("arc");
        self.arc_status
    }

    fn homing(&mut self) -> Status {
        self.log("homing");
        self.homing_status
    }

    fn return_to_home(&mut self) -> Status {
        self.log("return_to_home");
        self.return_home_status
    }

    fn units(&self) -> Units {
        self.units
    }
}

pub(crate) struct MockProtocols {
    pub last_command: String<256>,
    pub last_config: String<256>,
    pub last_data: String<256>,
    pub command_status: Status,
    pub config_status: Status,
    pub data_status: Status,
    /// Canned structured reply written by `data`
    pub data_reply: &'static str,
}

impl Default for MockProtocols {
    fn default() -> Self {
        Self {
            last_command: String::new(),
            last_config: String::new(),
            last_data: String::new(),
            command_status: Status::Ok,
            config_status: Status::Ok,
            data_status: Status::Ok,
            data_reply: "{\"r\":{}}",
        }
    }
}

impl Protocols for MockProtocols {
    fn command(&mut self, line: &str) -> Status {
        self.last_command.clear();
        let _ = self.last_command.push_str(line);
        self.command_status
    }

    fn config(&mut self, line: &str) -> Status {
        self.last_config.clear();
        let _ = self.last_config.push_str(line);
        self.config_status
    }

    fn data(&mut self, input: &str, out: &mut String<OUTPUT_BUF_LEN>) -> Status {
        self.last_data.clear();
        let _ = self.last_data.push_str(input);
        out.clear();
        let _ = out.push_str(self.data_reply);
        self.data_status
    }

    fn help(&self) -> &str {
        "HELP: see the manual\n"
    }
}

#[derive(Default)]
pub(crate) struct MockConsole {
    pub data: String<2048>,
    pub err: String<2048>,
    pub pending: usize,
}

impl Console for MockConsole {
    fn write_data(&mut self, text: &str) {
        let _ = self.data.push_str(text);
    }

    fn write_err(&mut self, text: &str) {
        let _ = self.err.push_str(text);
    }

    fn tx_pending(&self) -> usize {
        self.pending
    }
}

pub(crate) struct MockPlanner {
    pub ready: bool,
}

impl Default for MockPlanner {
    fn default() -> Self {
        Self { ready: true }
    }
}

impl PlannerQueue for MockPlanner {
    fn can_accept(&self) -> bool {
        self.ready
    }
}

/// Owns everything a reactor borrows. Adjust the public knobs, then call
/// [`TestRig::build`] once to get the serial producer and the reactor.
pub(crate) struct TestRig {
    pub signals: SignalSet,
    pub queue: Queue<u8, RX_QUEUE_LEN>,
    pub fixture_a: Option<&'static [&'static str]>,
    pub fixture_b: Option<&'static [&'static str]>,
    pub tx_high_water: usize,
}

impl TestRig {
    pub fn new() -> Self {
        Self {
            signals: SignalSet::new(),
            queue: Queue::new(),
            fixture_a: Some(SCRIPT_A),
            fixture_b: Some(SCRIPT_B),
            tx_high_water: TX_HIGH_WATER_MARK,
        }
    }

    pub fn build(&mut self) -> (Producer<'_, u8, RX_QUEUE_LEN>, TestReactor<'_>) {
        let (tx, rx) = self.queue.split();
        let config = ReactorConfig {
            tx_high_water: self.tx_high_water,
            fixture_a: self.fixture_a,
            fixture_b: self.fixture_b,
        };
        let reactor = Reactor::new(
            &self.signals,
            rx,
            config,
            MockMachine::default(),
            MockProtocols::default(),
            MockConsole::default(),
            MockPlanner::default(),
        );
        (tx, reactor)
    }
}

/// Enqueue raw bytes on the serial receive queue
pub(crate) fn feed(tx: &mut Producer<'_, u8, RX_QUEUE_LEN>, text: &str) {
    for byte in text.bytes() {
        tx.enqueue(byte).unwrap();
    }
}

/// Feed one terminated line and run a single dispatch
pub(crate) fn drive_line(
    tx: &mut Producer<'_, u8, RX_QUEUE_LEN>,
    reactor: &mut TestReactor<'_>,
    line: &str,
) -> Status {
    feed(tx, line);
    reactor.dispatch()
}
