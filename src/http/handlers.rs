//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the engine,
//! repository or service layer for the actual work.

use axum::{
    extract::{Path, Query, State},
    response::sse::{Event, Sse},
    Json,
};
use futures::stream::Stream;
use std::convert::Infallible;
use std::time::Duration;

use super::dto::{
    DossierListResponse, HealthResponse, JobStatusResponse, LegislationQuery, ReportListResponse,
    StartReportResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::{DossierId, ReportId};
use crate::db::models::{Dossier, NewDossier};
use crate::db::StoredReport;
use crate::routes;
use crate::services::ingest::{PlainTextExtractor, TextExtractor, UploadedDocument};
use crate::services::job_tracker::JobKind;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service and its repository backend.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let repository = match state.repository.health_check().await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        repository,
    }))
}

// =============================================================================
// Regimes & Legislation
// =============================================================================

/// GET /v1/regimes
///
/// List both statutory regimes with their default offsets.
pub async fn list_regimes() -> HandlerResult<Vec<routes::regimes::RegimeInfo>> {
    Ok(Json(routes::regimes::list_regimes()))
}

/// GET /v1/legislation?query=
///
/// The legal-reference catalog, optionally filtered by a search query.
pub async fn get_legislation(
    Query(params): Query<LegislationQuery>,
) -> HandlerResult<routes::legislation::LegislationResponse> {
    Ok(Json(routes::legislation::get_legislation(
        params.query.as_deref(),
    )))
}

// =============================================================================
// Workflow Computation
// =============================================================================

/// POST /v1/workflows/compute
///
/// Synchronous deadline computation from explicit inputs.
pub async fn compute_workflow(
    Json(request): Json<routes::workflow::WorkflowRequest>,
) -> HandlerResult<routes::workflow::WorkflowResponse> {
    let response = routes::workflow::compute(&request)?;
    Ok(Json(response))
}

/// GET /v1/dossiers/{dossier_id}/workflow
///
/// Deadline computation from a stored dossier.
pub async fn dossier_workflow(
    State(state): State<AppState>,
    Path(dossier_id): Path<i64>,
) -> HandlerResult<routes::workflow::WorkflowResponse> {
    let dossier = state
        .repository
        .get_dossier(DossierId::new(dossier_id))
        .await?;
    // The stored dossier may carry adjusted offsets, so compute with its
    // effective config rather than the regime defaults.
    let result = crate::engine::calculate_workflow(
        dossier.start_date,
        &dossier.suspensions,
        &dossier.config,
        dossier.pea_date,
    )?;
    let gantt = crate::report::build_gantt_rows(dossier.start_date, &result, &dossier.suspensions);
    Ok(Json(routes::workflow::WorkflowResponse {
        regime: dossier.regime,
        regime_label: dossier.regime.label().to_string(),
        config: dossier.config,
        result,
        gantt,
    }))
}

// =============================================================================
// Dossier CRUD
// =============================================================================

/// GET /v1/dossiers
///
/// List all dossiers.
pub async fn list_dossiers(State(state): State<AppState>) -> HandlerResult<DossierListResponse> {
    let dossiers = state.repository.list_dossiers().await?;
    let infos: Vec<routes::dossiers::DossierInfo> =
        dossiers.iter().map(routes::dossiers::DossierInfo::from).collect();
    let total = infos.len();
    Ok(Json(DossierListResponse {
        dossiers: infos,
        total,
    }))
}

/// POST /v1/dossiers
///
/// Create a new dossier. Suspensions and offsets are validated before
/// anything is stored.
pub async fn create_dossier(
    State(state): State<AppState>,
    Json(mut new): Json<NewDossier>,
) -> Result<(axum::http::StatusCode, Json<Dossier>), AppError> {
    for suspension in &new.suspensions {
        suspension.validate()?;
    }
    match &new.config {
        Some(config) => config.validate()?,
        None => new.config = Some(state.config.config_for(new.regime)),
    }
    let dossier = state.repository.create_dossier(new).await?;
    Ok((axum::http::StatusCode::CREATED, Json(dossier)))
}

/// GET /v1/dossiers/{dossier_id}
pub async fn get_dossier(
    State(state): State<AppState>,
    Path(dossier_id): Path<i64>,
) -> HandlerResult<Dossier> {
    let dossier = state
        .repository
        .get_dossier(DossierId::new(dossier_id))
        .await?;
    Ok(Json(dossier))
}

/// DELETE /v1/dossiers/{dossier_id}
pub async fn delete_dossier(
    State(state): State<AppState>,
    Path(dossier_id): Path<i64>,
) -> Result<axum::http::StatusCode, AppError> {
    state
        .repository
        .delete_dossier(DossierId::new(dossier_id))
        .await?;
    Ok(axum::http::StatusCode::NO_CONTENT)
}

/// POST /v1/dossiers/{dossier_id}/suspensions
///
/// Add a suspension interval to a dossier.
pub async fn add_suspension(
    State(state): State<AppState>,
    Path(dossier_id): Path<i64>,
    Json(request): Json<routes::dossiers::AddSuspensionRequest>,
) -> HandlerResult<Dossier> {
    let suspension = request.into_suspension()?;
    let dossier = state
        .repository
        .add_suspension(DossierId::new(dossier_id), suspension)
        .await?;
    Ok(Json(dossier))
}

/// DELETE /v1/dossiers/{dossier_id}/suspensions/{index}
///
/// Remove the suspension at the given insertion index.
pub async fn remove_suspension(
    State(state): State<AppState>,
    Path((dossier_id, index)): Path<(i64, usize)>,
) -> HandlerResult<Dossier> {
    let dossier = state
        .repository
        .remove_suspension(DossierId::new(dossier_id), index)
        .await?;
    Ok(Json(dossier))
}

// =============================================================================
// Reports
// =============================================================================

/// POST /v1/dossiers/{dossier_id}/reports
///
/// Start background report generation. Returns a job ID for tracking.
pub async fn start_report(
    State(state): State<AppState>,
    Path(dossier_id): Path<i64>,
    Json(request): Json<routes::reports::StartReportRequest>,
) -> Result<(axum::http::StatusCode, Json<StartReportResponse>), AppError> {
    let dossier_id = DossierId::new(dossier_id);
    // Fail fast on unknown dossiers instead of failing inside the job.
    state.repository.get_dossier(dossier_id).await?;

    let extractor = PlainTextExtractor;
    let mut documents = Vec::with_capacity(request.documents.len());
    for payload in request.documents {
        let upload = UploadedDocument::new(payload.filename, payload.content.into_bytes());
        let extracted = extractor
            .extract(&upload)
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        documents.push(extracted);
    }

    let job_id = state.job_tracker.create_job(JobKind::ReportGeneration);
    let response_job_id = job_id.clone();

    let tracker = state.job_tracker.clone();
    let repo = state.repository.clone();
    let generator = state.generator.clone();
    let retry_policy = state.retry_policy;
    tokio::spawn(async move {
        let _ = crate::services::report_processor::generate_report_async(
            job_id,
            tracker,
            repo,
            generator,
            dossier_id,
            documents,
            retry_policy,
        )
        .await;
    });

    Ok((
        axum::http::StatusCode::ACCEPTED,
        Json(StartReportResponse {
            job_id: response_job_id.clone(),
            message: format!(
                "Report generation started. Track progress at /v1/jobs/{}/logs",
                response_job_id
            ),
        }),
    ))
}

/// GET /v1/dossiers/{dossier_id}/reports
///
/// List stored reports of a dossier.
pub async fn list_reports(
    State(state): State<AppState>,
    Path(dossier_id): Path<i64>,
) -> HandlerResult<ReportListResponse> {
    let dossier_id = DossierId::new(dossier_id);
    state.repository.get_dossier(dossier_id).await?;
    let reports = state.repository.list_reports(dossier_id).await?;
    let infos: Vec<routes::reports::ReportInfo> =
        reports.iter().map(routes::reports::ReportInfo::from).collect();
    let total = infos.len();
    Ok(Json(ReportListResponse {
        reports: infos,
        total,
    }))
}

/// GET /v1/reports/{report_id}
///
/// Fetch one stored report in full.
pub async fn get_report(
    State(state): State<AppState>,
    Path(report_id): Path<i64>,
) -> HandlerResult<StoredReport> {
    let stored = state.repository.get_report(ReportId::new(report_id)).await?;
    Ok(Json(stored))
}

// =============================================================================
// Async Job Management
// =============================================================================

/// GET /v1/jobs/{job_id}
///
/// Get the current status and logs of a background job.
pub async fn get_job_status(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> HandlerResult<JobStatusResponse> {
    let job = state
        .job_tracker
        .get_job(&job_id)
        .ok_or_else(|| AppError::NotFound(format!("Job {} not found", job_id)))?;

    Ok(Json(JobStatusResponse {
        job_id: job.job_id,
        status: job.status,
        logs: job.logs,
        result: job.result,
    }))
}

/// GET /v1/jobs/{job_id}/logs
///
/// Stream job logs via Server-Sent Events (SSE).
pub async fn stream_job_logs(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, AppError> {
    // Verify job exists
    if state.job_tracker.get_job(&job_id).is_none() {
        return Err(AppError::NotFound(format!("Job {} not found", job_id)));
    }

    let tracker = state.job_tracker.clone();
    let stream = async_stream::stream! {
        let mut last_log_count = 0;
        loop {
            // Send new logs since last check
            let logs = tracker.get_logs(&job_id);
            for log in logs.iter().skip(last_log_count) {
                let event_data = serde_json::to_string(log).unwrap_or_default();
                yield Ok(Event::default().data(event_data));
            }
            last_log_count = logs.len();

            // Close the stream once the job settles
            if let Some(job) = tracker.get_job(&job_id) {
                if job.status != crate::services::job_tracker::JobStatus::Running {
                    let final_event = serde_json::json!({
                        "status": job.status,
                        "result": job.result,
                    });
                    yield Ok(Event::default()
                        .event("complete")
                        .data(serde_json::to_string(&final_event).unwrap_or_default()));
                    break;
                }
            } else {
                break;
            }

            tokio::time::sleep(Duration::from_millis(250)).await;
        }
    };

    Ok(Sse::new(stream).keep_alive(
        axum::response::sse::KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("keep-alive"),
    ))
}
