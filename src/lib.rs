//! # Prazos AIA Backend
//!
//! Statutory deadline management for Portuguese environmental-impact
//! assessment (AIA) procedures.
//!
//! The core of the crate is a pure deadline engine: a Portuguese
//! national-holiday calendar, business-day counting with suspension
//! handling, and the workflow assembly that resolves every milestone of a
//! procedure from its instruction date. Around it sit the dossier
//! repository, the report pipeline (narrative generation and document
//! conversion) and an axum REST API for the frontend.
//!
//! ## Features
//!
//! - **Deadline Engine**: holiday calendar (fixed + Easter-relative),
//!   rigorous business-day walks, suspension intervals, PEA acceleration
//! - **Regimes**: the 150-day and 90-day statutory procedures with
//!   user-adjustable offsets
//! - **Legal Catalog**: curated legislation references with search
//! - **Reports**: structured deadline reports with timeline rows and a
//!   Markdown-subset narrative converter
//! - **HTTP API**: RESTful endpoints with background report jobs and SSE
//!   progress streaming
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: identifier newtypes and the DTO re-export surface
//! - [`engine`]: the pure deadline computation core
//! - [`models`]: regimes, suspensions and result types
//! - [`legislation`]: the legal-reference catalog
//! - [`report`]: document model, Markdown conversion, report assembly
//! - [`services`]: job tracking, ingestion and narrative generation seams
//! - [`db`]: repository trait and the in-memory backend
//! - [`http`]: axum-based HTTP server (feature `http-server`)

pub mod api;

pub mod config;
pub mod db;
pub mod engine;
pub mod legislation;
pub mod models;
pub mod report;
pub mod routes;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
