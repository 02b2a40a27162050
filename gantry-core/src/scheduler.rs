//! The ordered poll-task scheduler.
//!
//! Every pass runs a fixed task table top to bottom. Tasks are ordered by
//! increasing dependency: a task appears after every task whose output it
//! depends on. The first task to return [`Status::Eagain`] abandons the
//! pass, so nothing below it can observe a half-applied state change; any
//! other status (including errors) falls through to the next task.
//!
//! There are no threads and no blocking calls. A task whose work spans
//! multiple polls must be written as a restartable continuation.

use gantry_protocol::Status;

use crate::reactor::Reactor;
use crate::traits::{Console, Machine, PlannerQueue, Protocols};

/// Number of entries in the poll-task table
pub const TASK_COUNT: usize = 13;

/// Outcome of one scheduler pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PassOutcome {
    /// Every task in the table ran
    Completed,
    /// A task returned Eagain and the pass was abandoned
    Yielded,
}

/// One entry of the poll-task table
pub struct Task<'a, M, P, C, Q> {
    /// Task name, for diagnostics
    pub name: &'static str,
    run: fn(&mut Reactor<'a, M, P, C, Q>) -> Status,
}

impl<'a, M, P, C, Q> Reactor<'a, M, P, C, Q>
where
    M: Machine,
    P: Protocols,
    C: Console,
    Q: PlannerQueue,
{
    /// The poll-task table, in increasing-dependency order.
    ///
    /// Signal handlers run right after raw switch handling so that resets,
    /// feedholds, and cycle starts are visible to everything below them in
    /// the same logical instant. The flow-control gates sit immediately
    /// before dispatch so a command is only read once both downstream
    /// consumers can absorb its results.
    pub fn tasks() -> [Task<'a, M, P, C, Q>; TASK_COUNT] {
        [
            Task { name: "switches", run: Self::poll_switches },
            Task { name: "abort", run: Self::poll_abort },
            Task { name: "feedhold", run: Self::poll_feedhold },
            Task { name: "cycle_start", run: Self::poll_cycle_start },
            Task { name: "status_report", run: Self::poll_status_report },
            Task { name: "plan_hold", run: Self::poll_plan_hold },
            Task { name: "end_hold", run: Self::poll_end_hold },
            Task { name: "arc", run: Self::poll_arc },
            Task { name: "homing", run: Self::poll_homing },
            Task { name: "return_to_home", run: Self::poll_return_to_home },
            Task { name: "tx_gate", run: Self::gate_tx },
            Task { name: "planner_gate", run: Self::gate_planner },
            Task { name: "dispatch", run: Self::poll_dispatch },
        ]
    }

    /// Run one pass over the task table
    pub fn run_pass(&mut self) -> PassOutcome {
        for task in Self::tasks() {
            if (task.run)(self) == Status::Eagain {
                return PassOutcome::Yielded;
            }
        }
        PassOutcome::Completed
    }

    /// Run the reactor forever
    pub fn run(&mut self) -> ! {
        loop {
            let _ = self.run_pass();
        }
    }

    fn poll_switches(&mut self) -> Status {
        self.machine.poll_switches()
    }

    // Signal handlers clear their latch before acting so the action cannot
    // re-trigger the same request, then yield so the next pass observes the
    // new machine state from the top.

    fn poll_abort(&mut self) -> Status {
        if !self.signals.take_abort() {
            return Status::Noop;
        }
        self.application_reset();
        Status::Eagain
    }

    fn poll_feedhold(&mut self) -> Status {
        if !self.signals.take_feedhold() {
            return Status::Noop;
        }
        self.machine.begin_feedhold();
        Status::Eagain
    }

    fn poll_cycle_start(&mut self) -> Status {
        if !self.signals.take_cycle_start() {
            return Status::Noop;
        }
        self.machine.begin_cycle_start();
        Status::Eagain
    }

    fn poll_status_report(&mut self) -> Status {
        self.machine.status_report()
    }

    fn poll_plan_hold(&mut self) -> Status {
        self.machine.plan_hold()
    }

    fn poll_end_hold(&mut self) -> Status {
        self.machine.end_hold()
    }

    fn poll_arc(&mut self) -> Status {
        self.machine.arc()
    }

    fn poll_homing(&mut self) -> Status {
        self.machine.homing()
    }

    fn poll_return_to_home(&mut self) -> Status {
        self.machine.return_to_home()
    }

    // The gates are pure reads; they exist so dispatch never runs ahead of
    // a consumer that cannot absorb more work.

    fn gate_tx(&mut self) -> Status {
        if self.console.tx_pending() >= self.tx_high_water {
            return Status::Eagain;
        }
        Status::Ok
    }

    fn gate_planner(&mut self) -> Status {
        if !self.planner.can_accept() {
            return Status::Eagain;
        }
        Status::Ok
    }

    fn poll_dispatch(&mut self) -> Status {
        self.dispatch()
    }
}
