//! Trait seams to the reactor's external collaborators.
//!
//! The reactor schedules and routes; everything that actually interprets
//! commands or moves steel lives behind these traits and is supplied by
//! the board/application crate.

pub mod console;
pub mod machine;
pub mod parser;
pub mod planner;

pub use console::Console;
pub use machine::{Machine, Units};
pub use parser::Protocols;
pub use planner::PlannerQueue;
