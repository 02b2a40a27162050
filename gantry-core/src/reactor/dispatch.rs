//! Command dispatch: read one line, classify it, route it, answer it.
//!
//! Classification keys on the first non-whitespace character only. This
//! keeps the hot path (machine-generated command streams) branch-cheap at
//! the cost of reserving a handful of leading characters as protocol
//! syntax.

use gantry_protocol::{render_command_response, Status};

use super::respond::ReplyBuf;
use super::{CommMode, Reactor};
use crate::input::DeviceId;
use crate::traits::{Console, Machine, PlannerQueue, Protocols};

impl<M, P, C, Q> Reactor<'_, M, P, C, Q>
where
    M: Machine,
    P: Protocols,
    C: Console,
    Q: PlannerQueue,
{
    /// Read and execute the next command line from the active source
    ///
    /// Returns [`Status::Eagain`] when no complete line is buffered yet
    /// (leaving all input untouched) and [`Status::EndOfFile`] when a
    /// fixture script runs out, after reverting to the serial device.
    /// Every dispatched line returns [`Status::Ok`] to the scheduler; the
    /// line's own outcome only shapes the response.
    pub(crate) fn dispatch(&mut self) -> Status {
        match self.input.read_line(&mut self.in_buf) {
            Status::Ok => {}
            Status::EndOfFile => {
                // Fixture scripts end silently; tell the operator once and
                // fall back to the interactive device
                self.console.write_err("End of command file\n");
                self.input.reset_to_default();
                return Status::EndOfFile;
            }
            Status::InputExceedsMaxLength => {
                // The offending line was already discarded; the stale buffer
                // must not leak into the report
                self.in_buf.clear();
                self.dispatch_return(Status::InputExceedsMaxLength, ReplyBuf::Input);
                return Status::InputExceedsMaxLength;
            }
            other => return other,
        }

        let leading = self
            .in_buf
            .chars()
            .find(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_uppercase());

        match leading {
            // Blank line: acknowledge and move on
            None => self.dispatch_return(Status::Ok, ReplyBuf::Input),

            // Fixture triggers switch the input source to a canned script
            Some('T') => {
                let status = self.input.open_fixture(DeviceId::FixtureA);
                self.dispatch_return(status, ReplyBuf::Input);
            }
            Some('U') => {
                let status = self.input.open_fixture(DeviceId::FixtureB);
                self.dispatch_return(status, ReplyBuf::Input);
            }

            Some('H') => {
                let help = self.protocols.help();
                self.console.write_err(help);
                self.dispatch_return(Status::Ok, ReplyBuf::Input);
            }

            // Text-mode config and query
            Some('$') | Some('?') => {
                if self.mode != CommMode::MachineProtocol {
                    self.mode = CommMode::TextInteractive;
                }
                let status = self.protocols.config(&self.in_buf);
                self.dispatch_return(status, ReplyBuf::Input);
            }

            // Structured-data document; the parser writes its full reply
            // (status included) into the output buffer
            Some('{') => {
                self.mode = CommMode::StructuredData;
                let status = self.protocols.data(&self.in_buf, &mut self.out_buf);
                self.dispatch_return(status, ReplyBuf::Output);
            }

            // Anything else is a motion/program command
            Some(_) => {
                let status = self.protocols.command(&self.in_buf);
                if self.mode == CommMode::StructuredData {
                    if render_command_response(status, &self.in_buf, &mut self.out_buf).is_err() {
                        // Cannot happen with the configured buffer sizes,
                        // but an envelope without the echo still parses
                        let _ = render_command_response(
                            Status::OutputExceedsMaxLength,
                            "",
                            &mut self.out_buf,
                        );
                    }
                    self.dispatch_return(status, ReplyBuf::Output);
                } else {
                    self.dispatch_return(status, ReplyBuf::Input);
                }
            }
        }
        Status::Ok
    }
}
