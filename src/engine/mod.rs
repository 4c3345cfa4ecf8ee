//! Statutory deadline engine.
//!
//! Computes milestone dates for an AIA review procedure: a Portuguese
//! national-holiday calendar (fixed dates plus Easter-relative moveable
//! holidays), business-day counting primitives with suspension handling, and
//! the workflow assembly that turns a start date, a regime and a set of
//! suspensions into the full milestone schedule.
//!
//! The engine is pure, synchronous computation over immutable inputs: no
//! I/O, no shared state, safe to call concurrently from any number of
//! request handlers.

pub mod business;
pub mod calendar;
pub mod workflow;

pub use business::{
    add_business_days, deadline_rigorous, is_business_day, is_suspended, roll_forward,
};
pub use calendar::{easter_sunday, HolidaySet};
pub use workflow::{calculate_workflow, total_suspended_days};

/// Error type for engine input validation.
///
/// The engine is total over well-typed inputs; this only surfaces when a
/// caller hands it an inconsistent value (inverted suspension interval,
/// offsets that contradict the regime length).
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

#[cfg(test)]
mod tests;
