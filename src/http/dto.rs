//! Data Transfer Objects for the HTTP API.
//!
//! Most DTOs live in the routes module and are re-exported here; this file
//! adds the envelope types that only exist at the HTTP boundary.

use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::api::{
    // Dossiers
    AddSuspensionRequest, DossierInfo,
    // Legislation
    LegislationResponse,
    // Regimes
    RegimeInfo,
    // Reports
    ReportInfo, StartReportRequest,
    // Workflow
    WorkflowRequest, WorkflowResponse,
};
pub use crate::routes::reports::StartReportResponse;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Repository backend status
    pub repository: String,
}

/// Dossier list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DossierListResponse {
    pub dossiers: Vec<DossierInfo>,
    pub total: usize,
}

/// Stored-report list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportListResponse {
    pub reports: Vec<ReportInfo>,
    pub total: usize,
}

/// Job status response for async processing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobStatusResponse {
    /// Job ID
    pub job_id: String,
    /// Job status
    pub status: crate::services::job_tracker::JobStatus,
    /// Log entries
    pub logs: Vec<crate::services::job_tracker::LogEntry>,
    /// Result if completed
    pub result: Option<serde_json::Value>,
}

/// Query parameters for the legislation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LegislationQuery {
    /// Case-insensitive search over titles and mandates
    #[serde(default)]
    pub query: Option<String>,
}
