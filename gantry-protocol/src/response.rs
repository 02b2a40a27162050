//! Structured command-response envelope.
//!
//! When the controller is in structured-data mode, every motion/program
//! command is answered with a fixed-shape JSON object wrapping the echoed
//! command line, the numeric status code, and the status message:
//!
//! ```text
//! {"gc":{"gc":"G0 X10","st":0,"msg":"OK"}}
//! ```
//!
//! Serde field order matches declaration order, which pins the wire layout.

use heapless::String;
use serde::{Deserialize, Serialize};

use crate::status::Status;

/// Errors that can occur while rendering a response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResponseError {
    /// Rendered envelope does not fit the output buffer
    BufferOverflow,
}

/// Body of the command-response envelope
///
/// Field order is the wire contract: `gc` (echo), `st` (code), `msg`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResponse<'a> {
    /// Verbatim echo of the command line
    pub gc: &'a str,
    /// Numeric status code
    pub st: u8,
    /// Canonical message for the status code
    pub msg: &'a str,
}

/// Envelope wrapping a [`CommandResponse`] under the parent `gc` key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<'a> {
    #[serde(borrow)]
    pub gc: CommandResponse<'a>,
}

/// Render the command-response envelope for `line` and `status` into `out`
///
/// The previous contents of `out` are discarded. On overflow `out` is left
/// empty rather than truncated.
pub fn render_command_response<const N: usize>(
    status: Status,
    line: &str,
    out: &mut String<N>,
) -> Result<(), ResponseError> {
    let envelope = Envelope {
        gc: CommandResponse {
            gc: line,
            st: status.code(),
            msg: status.message(),
        },
    };

    out.clear();
    let mut scratch = [0u8; N];
    let len = serde_json_core::to_slice(&envelope, &mut scratch)
        .map_err(|_| ResponseError::BufferOverflow)?;
    let text =
        core::str::from_utf8(&scratch[..len]).map_err(|_| ResponseError::BufferOverflow)?;
    out.push_str(text).map_err(|_| ResponseError::BufferOverflow)?;
    Ok(())
}
