//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        // Reference data
        .route("/regimes", get(handlers::list_regimes))
        .route("/legislation", get(handlers::get_legislation))
        // Synchronous computation
        .route("/workflows/compute", post(handlers::compute_workflow))
        // Dossier CRUD
        .route("/dossiers", get(handlers::list_dossiers))
        .route("/dossiers", post(handlers::create_dossier))
        .route("/dossiers/{dossier_id}", get(handlers::get_dossier))
        .route("/dossiers/{dossier_id}", delete(handlers::delete_dossier))
        .route("/dossiers/{dossier_id}/suspensions", post(handlers::add_suspension))
        .route(
            "/dossiers/{dossier_id}/suspensions/{index}",
            delete(handlers::remove_suspension),
        )
        .route("/dossiers/{dossier_id}/workflow", get(handlers::dossier_workflow))
        // Reports
        .route("/dossiers/{dossier_id}/reports", post(handlers::start_report))
        .route("/dossiers/{dossier_id}/reports", get(handlers::list_reports))
        .route("/reports/{report_id}", get(handlers::get_report))
        // Job management
        .route("/jobs/{job_id}", get(handlers::get_job_status))
        .route("/jobs/{job_id}/logs", get(handlers::stream_job_logs));

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        // Allow generous payloads for attached document text.
        .layer(DefaultBodyLimit::max(20 * 1024 * 1024))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
