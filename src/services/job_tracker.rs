//! Job tracking for background report generation.
//!
//! An in-memory tracker storing status and progress logs for spawned tasks,
//! so clients can poll a job or follow its log stream while a report is
//! being produced.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// A single log entry with timestamp and message.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LogEntry {
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub level: LogLevel,
    pub message: String,
}

#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// What kind of work a job performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobKind {
    /// Full report generation for a dossier.
    ReportGeneration,
}

/// Job status enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Running,
    Completed,
    Failed,
}

/// Job metadata and logs.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Job {
    pub job_id: String,
    pub kind: JobKind,
    pub status: JobStatus,
    pub logs: Vec<LogEntry>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub completed_at: Option<chrono::DateTime<chrono::Utc>>,
    /// Result of the job (e.g. the stored report id on success).
    pub result: Option<serde_json::Value>,
}

/// In-memory job tracker, cheap to clone and share across handlers.
#[derive(Clone)]
pub struct JobTracker {
    jobs: Arc<RwLock<HashMap<String, Job>>>,
}

impl JobTracker {
    pub fn new() -> Self {
        Self {
            jobs: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Register a new running job and return its id.
    pub fn create_job(&self, kind: JobKind) -> String {
        let job_id = Uuid::new_v4().to_string();
        let job = Job {
            job_id: job_id.clone(),
            kind,
            status: JobStatus::Running,
            logs: vec![],
            created_at: chrono::Utc::now(),
            completed_at: None,
            result: None,
        };
        self.jobs.write().insert(job_id.clone(), job);
        job_id
    }

    /// Append a log entry to a job. Unknown ids are ignored.
    pub fn log(&self, job_id: &str, level: LogLevel, message: impl Into<String>) {
        let mut jobs = self.jobs.write();
        if let Some(job) = jobs.get_mut(job_id) {
            job.logs.push(LogEntry {
                timestamp: chrono::Utc::now(),
                level,
                message: message.into(),
            });
        }
    }

    /// Mark a job as completed with an optional result payload.
    pub fn complete_job(&self, job_id: &str, result: Option<serde_json::Value>) {
        let mut jobs = self.jobs.write();
        if let Some(job) = jobs.get_mut(job_id) {
            job.status = JobStatus::Completed;
            job.completed_at = Some(chrono::Utc::now());
            job.result = result;
        }
    }

    /// Mark a job as failed, recording the error as its final log entry.
    pub fn fail_job(&self, job_id: &str, error_message: impl Into<String>) {
        let mut jobs = self.jobs.write();
        if let Some(job) = jobs.get_mut(job_id) {
            job.status = JobStatus::Failed;
            job.completed_at = Some(chrono::Utc::now());
            job.logs.push(LogEntry {
                timestamp: chrono::Utc::now(),
                level: LogLevel::Error,
                message: error_message.into(),
            });
        }
    }

    pub fn get_job(&self, job_id: &str) -> Option<Job> {
        self.jobs.read().get(job_id).cloned()
    }

    pub fn get_logs(&self, job_id: &str) -> Vec<LogEntry> {
        self.jobs
            .read()
            .get(job_id)
            .map(|job| job.logs.clone())
            .unwrap_or_default()
    }
}

impl Default for JobTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_get_job() {
        let tracker = JobTracker::new();
        let job_id = tracker.create_job(JobKind::ReportGeneration);
        let job = tracker.get_job(&job_id).unwrap();
        assert_eq!(job.status, JobStatus::Running);
        assert_eq!(job.kind, JobKind::ReportGeneration);
        assert!(job.logs.is_empty());
    }

    #[test]
    fn test_log_appends_in_order() {
        let tracker = JobTracker::new();
        let job_id = tracker.create_job(JobKind::ReportGeneration);
        tracker.log(&job_id, LogLevel::Info, "a computar prazos");
        tracker.log(&job_id, LogLevel::Success, "prazos calculados");
        let logs = tracker.get_logs(&job_id);
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].message, "a computar prazos");
    }

    #[test]
    fn test_complete_job_records_result() {
        let tracker = JobTracker::new();
        let job_id = tracker.create_job(JobKind::ReportGeneration);
        tracker.complete_job(&job_id, Some(serde_json::json!({"report_id": 7})));
        let job = tracker.get_job(&job_id).unwrap();
        assert_eq!(job.status, JobStatus::Completed);
        assert!(job.completed_at.is_some());
        assert_eq!(job.result.unwrap()["report_id"], 7);
    }

    #[test]
    fn test_fail_job_appends_error_log() {
        let tracker = JobTracker::new();
        let job_id = tracker.create_job(JobKind::ReportGeneration);
        tracker.fail_job(&job_id, "quota excedida");
        let job = tracker.get_job(&job_id).unwrap();
        assert_eq!(job.status, JobStatus::Failed);
        assert_eq!(job.logs.last().unwrap().message, "quota excedida");
    }

    #[test]
    fn test_unknown_job_id_is_ignored() {
        let tracker = JobTracker::new();
        tracker.log("missing", LogLevel::Info, "ignored");
        assert!(tracker.get_job("missing").is_none());
        assert!(tracker.get_logs("missing").is_empty());
    }
}
