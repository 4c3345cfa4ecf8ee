//! Report endpoint types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::{DossierId, ReportId};
use crate::db::models::StoredReport;

/// A plain-text document attached to a report request. Rich formats are
/// extracted client-side or by a pluggable extractor before reaching this
/// endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentPayload {
    pub filename: String,
    pub content: String,
}

/// Request body for starting a background report job.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StartReportRequest {
    /// Supporting documents to embed in the narrative context.
    #[serde(default)]
    pub documents: Vec<DocumentPayload>,
}

/// Response body for a report job start.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartReportResponse {
    pub job_id: String,
    pub message: String,
}

/// Lightweight stored-report listing entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportInfo {
    pub report_id: ReportId,
    pub dossier_id: DossierId,
    pub created_at: DateTime<Utc>,
    pub project_name: String,
}

impl From<&StoredReport> for ReportInfo {
    fn from(stored: &StoredReport) -> Self {
        Self {
            report_id: stored.id,
            dossier_id: stored.dossier_id,
            created_at: stored.created_at,
            project_name: stored.report.project_name.clone(),
        }
    }
}

/// Report route function name constants
pub const START_REPORT: &str = "start_report";
pub const GET_REPORT: &str = "get_report";
pub const LIST_REPORTS: &str = "list_reports";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_report_request_defaults() {
        let request: StartReportRequest = serde_json::from_str("{}").unwrap();
        assert!(request.documents.is_empty());
    }

    #[test]
    fn test_start_report_request_with_documents() {
        let json = r#"{"documents": [{"filename": "memoria.txt", "content": "texto"}]}"#;
        let request: StartReportRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.documents.len(), 1);
        assert_eq!(request.documents[0].filename, "memoria.txt");
    }

    #[test]
    fn test_const_values() {
        assert_eq!(START_REPORT, "start_report");
        assert_eq!(GET_REPORT, "get_report");
        assert_eq!(LIST_REPORTS, "list_reports");
    }
}
