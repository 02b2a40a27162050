//! Control-machine seam: signal actions and motion continuations.

use gantry_protocol::Status;

/// Active linear units, as selected by gcode (G20/G21)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Units {
    Inches,
    Millimeters,
}

/// The canonical machine and its long-running cycles.
///
/// The `poll_*`-style continuation methods are invoked every scheduler pass
/// whether or not a cycle is active; an idle continuation returns
/// [`Status::Noop`], an in-progress one [`Status::Eagain`]. Work that spans
/// multiple polls must be restartable from where it left off.
pub trait Machine {
    /// Stop all activity and re-initialize the machine (abort signal)
    fn reset(&mut self);

    /// Begin decelerating into a feedhold (feedhold signal)
    fn begin_feedhold(&mut self);

    /// Resume motion from a feedhold (cycle-start signal)
    fn begin_cycle_start(&mut self);

    /// Drain latched limit/homing switch events
    fn poll_switches(&mut self) -> Status;

    /// Emit a status report if one is due
    fn status_report(&mut self) -> Status;

    /// Plan the feedhold deceleration
    fn plan_hold(&mut self) -> Status;

    /// Finish an ending feedhold
    fn end_hold(&mut self) -> Status;

    /// Generate the next arc segment behind queued lines
    fn arc(&mut self) -> Status;

    /// Homing cycle continuation
    fn homing(&mut self) -> Status;

    /// Return-to-reference continuation
    fn return_to_home(&mut self) -> Status;

    /// Currently active linear units (drives the prompt text)
    fn units(&self) -> Units;
}
