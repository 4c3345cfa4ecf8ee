//! HTTP server module.
//!
//! Exposes the deadline engine, the dossier repository and the report
//! pipeline as an axum REST API. Handlers only parse and validate requests;
//! business logic stays in the engine and service layers.

#[cfg(feature = "http-server")]
pub mod handlers;

#[cfg(feature = "http-server")]
pub mod router;

#[cfg(feature = "http-server")]
pub mod state;

#[cfg(feature = "http-server")]
pub mod error;

#[cfg(feature = "http-server")]
pub mod dto;

#[cfg(feature = "http-server")]
pub use router::create_router;

#[cfg(feature = "http-server")]
pub use state::AppState;
