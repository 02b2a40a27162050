//! Board-agnostic reactor core for the Gantry CNC controller
//!
//! This crate contains the top-level control loop of the firmware and
//! nothing hardware-specific:
//!
//! - Signal latches set from interrupt context (abort, feedhold, cycle start)
//! - Input multiplexer over the serial byte stream and fixture scripts
//! - The ordered poll-task scheduler with its Eagain short-circuit
//! - Command dispatch (line classification and parser routing)
//! - Response and prompt generation per communication mode
//! - Trait seams for the control machine, protocol parsers, console,
//!   and planner queue that a board crate implements
//!
//! The loop is cooperative and single-threaded: tasks never block, and any
//! task that cannot finish returns [`Status::Eagain`] to restart the pass.

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod input;
pub mod reactor;
pub mod scheduler;
pub mod signal;
pub mod traits;

#[cfg(test)]
pub(crate) mod testutil;

pub use gantry_protocol::Status;
