//! Response and prompt generation.
//!
//! Replies are shaped by the active communication mode, never by the
//! caller: structured-data mode echoes the prepared reply buffer,
//! machine-protocol mode answers with a bare token, and text mode prints a
//! message (for user-actionable statuses only) followed by a prompt.

use core::fmt::Write as _;

use heapless::String;

use gantry_protocol::Status;

use super::{CommMode, Reactor};
use crate::config::INPUT_LINE_LEN;
use crate::traits::{Console, Machine, PlannerQueue, Protocols, Units};

/// Which line buffer a response refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ReplyBuf {
    /// The original input line
    Input,
    /// The prepared output buffer (structured replies)
    Output,
}

/// Capacity for one "<message>: <line>" report
const MESSAGE_LINE_LEN: usize = INPUT_LINE_LEN + 64;

impl<M, P, C, Q> Reactor<'_, M, P, C, Q>
where
    M: Machine,
    P: Protocols,
    C: Console,
    Q: PlannerQueue,
{
    /// Report a dispatched line's outcome in the active communication mode
    pub(crate) fn dispatch_return(&mut self, status: Status, which: ReplyBuf) {
        match self.mode {
            CommMode::StructuredData => {
                // The buffer already is the full reply
                let reply: &str = match which {
                    ReplyBuf::Input => &self.in_buf,
                    ReplyBuf::Output => &self.out_buf,
                };
                self.console.write_data(reply);
                self.console.write_data("\n");
            }
            CommMode::MachineProtocol => {
                if status == Status::Ok {
                    self.console.write_data("ok\n");
                } else {
                    self.console.write_data("err\n");
                }
            }
            CommMode::TextInteractive => match status {
                // Not user-actionable: just re-prompt
                Status::Ok | Status::Eagain | Status::Noop => self.prompt(),
                _ => {
                    let line: &str = match which {
                        ReplyBuf::Input => &self.in_buf,
                        ReplyBuf::Output => &self.out_buf,
                    };
                    let mut report: String<MESSAGE_LINE_LEN> = String::new();
                    let _ = write!(report, "{}: {}\n", status.message(), line);
                    self.console.write_err(&report);
                    self.prompt();
                }
            },
        }
    }

    /// Emit the next prompt, unless the active source suppresses prompting
    pub(crate) fn prompt(&mut self) {
        if !self.prompt_enabled() {
            return;
        }
        let mut prompt: String<48> = String::new();
        let units = match self.machine.units() {
            Units::Inches => "inch",
            Units::Millimeters => "mm",
        };
        let _ = write!(prompt, "gantry [{}] ok> ", units);
        self.console.write_err(&prompt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::TestRig;

    #[test]
    fn test_structured_mode_echoes_output_buffer() {
        let mut rig = TestRig::new();
        let (_tx, mut reactor) = rig.build();
        reactor.mode = CommMode::StructuredData;
        reactor.out_buf.push_str("{\"r\":{}}").unwrap();

        reactor.dispatch_return(Status::Error, ReplyBuf::Output);
        assert_eq!(reactor.console.data.as_str(), "{\"r\":{}}\n");
        // Never a prompt in structured mode
        assert!(reactor.console.err.is_empty());
    }

    #[test]
    fn test_machine_protocol_tokens() {
        let mut rig = TestRig::new();
        let (_tx, mut reactor) = rig.build();
        reactor.pin_machine_protocol();

        reactor.dispatch_return(Status::Ok, ReplyBuf::Input);
        reactor.dispatch_return(Status::GcodeInputError, ReplyBuf::Input);
        assert_eq!(reactor.console.data.as_str(), "ok\nerr\n");
        assert!(reactor.console.err.is_empty());
    }

    #[test]
    fn test_text_mode_quiet_statuses_prompt_only() {
        let mut rig = TestRig::new();
        let (_tx, mut reactor) = rig.build();

        for status in [Status::Ok, Status::Eagain, Status::Noop] {
            reactor.console.err.clear();
            reactor.dispatch_return(status, ReplyBuf::Input);
            assert_eq!(reactor.console.err.as_str(), "gantry [mm] ok> ");
        }
    }

    #[test]
    fn test_text_mode_error_prints_message_and_line() {
        let mut rig = TestRig::new();
        let (_tx, mut reactor) = rig.build();
        reactor.in_buf.push_str("g2 x1").unwrap();

        reactor.dispatch_return(Status::ArcSpecificationError, ReplyBuf::Input);
        assert_eq!(
            reactor.console.err.as_str(),
            "Arc specification error: g2 x1\ngantry [mm] ok> "
        );
    }

    #[test]
    fn test_prompt_tracks_units() {
        let mut rig = TestRig::new();
        let (_tx, mut reactor) = rig.build();
        reactor.machine.units = Units::Inches;

        reactor.dispatch_return(Status::Ok, ReplyBuf::Input);
        assert_eq!(reactor.console.err.as_str(), "gantry [inch] ok> ");
    }

    #[test]
    fn test_prompt_suppressed_on_fixture_source() {
        let mut rig = TestRig::new();
        let (_tx, mut reactor) = rig.build();
        reactor.input.open_fixture(crate::input::DeviceId::FixtureA);

        reactor.dispatch_return(Status::Ok, ReplyBuf::Input);
        reactor.dispatch_return(Status::Error, ReplyBuf::Input);
        // Message still reported, but no prompt text at all
        assert!(!reactor.console.err.contains("ok> "));
    }
}
