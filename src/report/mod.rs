//! Report assembly layer.
//!
//! Turns engine results and generated narrative text into a structured,
//! renderer-independent report: the export collaborator (PDF/Word printing)
//! consumes these values as-is. Nothing here performs I/O.

pub mod builder;
pub mod document;
pub mod markdown;

pub use builder::{build_gantt_rows, DeadlineReport, GanttRow, GanttRowKind, MilestoneRow};
pub use document::{DocNode, Document, Span};
pub use markdown::parse_markdown;
