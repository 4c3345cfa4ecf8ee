//! Repository trait and error types.
//!
//! The trait abstracts dossier/report storage so backends can be swapped;
//! the in-memory implementation in `repositories::local` is the one shipped.

use async_trait::async_trait;

use crate::api::{DossierId, ReportId};
use crate::db::models::{Dossier, NewDossier, StoredReport};
use crate::models::Suspension;

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Error type for repository operations.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The requested entity does not exist.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// The request was well-formed but inconsistent with stored state.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Backend failure.
    #[error("repository error: {0}")]
    Internal(String),
}

impl RepositoryError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

/// Storage operations for dossiers and their reports.
#[async_trait]
pub trait DossierRepository: Send + Sync {
    /// Store a new dossier and return it with its assigned id.
    async fn create_dossier(&self, new: NewDossier) -> RepositoryResult<Dossier>;

    async fn get_dossier(&self, id: DossierId) -> RepositoryResult<Dossier>;

    async fn list_dossiers(&self) -> RepositoryResult<Vec<Dossier>>;

    async fn delete_dossier(&self, id: DossierId) -> RepositoryResult<()>;

    /// Append a suspension to a dossier and return the updated record.
    async fn add_suspension(
        &self,
        id: DossierId,
        suspension: Suspension,
    ) -> RepositoryResult<Dossier>;

    /// Remove the suspension at `index` (insertion order) and return the
    /// updated record.
    async fn remove_suspension(&self, id: DossierId, index: usize) -> RepositoryResult<Dossier>;

    /// Store a generated report for a dossier and return the stored record.
    async fn store_report(
        &self,
        dossier_id: DossierId,
        report: crate::report::DeadlineReport,
    ) -> RepositoryResult<StoredReport>;

    async fn get_report(&self, id: ReportId) -> RepositoryResult<StoredReport>;

    async fn list_reports(&self, dossier_id: DossierId) -> RepositoryResult<Vec<StoredReport>>;

    /// Whether the backend is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = RepositoryError::not_found("dossier", 42);
        assert_eq!(err.to_string(), "dossier 42 not found");
    }

    #[test]
    fn test_invalid_input_display() {
        let err = RepositoryError::InvalidInput("suspension index 3 out of range".to_string());
        assert!(err.to_string().contains("index 3"));
    }
}
