//! Core domain types for AIA procedure deadline management.
//!
//! The types here are plain values: regimes and their statutory offsets,
//! suspension intervals, and the structured results produced by the deadline
//! engine. Everything derives Serialize/Deserialize so results can flow
//! straight through the HTTP layer.

pub mod regime;
pub mod workflow;

pub use regime::*;
pub use workflow::*;
