//! Wire contract for the Gantry CNC controller
//!
//! This crate defines everything external tooling can parse out of the
//! controller's reply stream:
//!
//! - The closed [`Status`] vocabulary returned by every task and parser,
//!   with its stable numeric codes and canonical message table
//! - The structured command-response envelope emitted for motion commands
//!   when the controller is in structured-data mode
//!
//! # Envelope format
//!
//! ```text
//! {"gc":{"gc":"<echoed command line>","st":<status code>,"msg":"<status message>"}}
//! ```
//!
//! Field order is fixed; host-side tooling indexes on it.

#![no_std]
#![deny(unsafe_code)]

pub mod response;
pub mod status;

pub use response::{render_command_response, CommandResponse, Envelope, ResponseError};
pub use status::{Status, STATUS_COUNT};
