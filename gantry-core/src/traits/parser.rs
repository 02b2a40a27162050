//! Protocol parser seam.

use heapless::String;

use gantry_protocol::Status;

use crate::config::OUTPUT_BUF_LEN;

/// The three line protocols the dispatcher routes to, plus help text.
///
/// Parsers receive one complete line (terminator stripped) and report their
/// outcome as a [`Status`]; they never write to the console themselves.
pub trait Protocols {
    /// Parse and execute one motion/program command line
    fn command(&mut self, line: &str) -> Status;

    /// Parse and execute one text-mode config/query line (`$`/`?`)
    fn config(&mut self, line: &str) -> Status;

    /// Parse one structured-data document, writing the full reply into
    /// `out` (the reply embeds its own status)
    fn data(&mut self, input: &str, out: &mut String<OUTPUT_BUF_LEN>) -> Status;

    /// General help text printed for the help trigger
    fn help(&self) -> &str;
}
