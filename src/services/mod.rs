//! Service layer: orchestration between storage, the deadline engine and the
//! external collaborators (document ingestion, narrative generation).

pub mod ingest;
pub mod job_tracker;
pub mod narrative;
pub mod report_processor;

pub use ingest::{ExtractedText, IngestError, PlainTextExtractor, TextExtractor, UploadedDocument};
pub use job_tracker::{Job, JobKind, JobStatus, JobTracker, LogEntry, LogLevel};
pub use narrative::{
    generate_with_retry, NarrativeError, NarrativeGenerator, NarrativeRequest, RetryPolicy,
    TemplateGenerator,
};
pub use report_processor::generate_report_async;
