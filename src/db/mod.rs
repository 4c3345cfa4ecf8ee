//! Storage module: repository pattern over dossier/report state.
//!
//! The layering mirrors the rest of the crate: HTTP handlers talk to the
//! [`repository::DossierRepository`] trait, never to a concrete backend.
//! The in-memory [`repositories::LocalRepository`] is the shipped backend;
//! alternative implementations plug in behind the same trait.

#[cfg(not(feature = "local-repo"))]
compile_error!("Enable at least one repository backend feature.");

pub mod checksum;
pub mod models;
pub mod repositories;
pub mod repository;

pub use checksum::document_checksum;
pub use models::{Dossier, NewDossier, StoredReport};
pub use repositories::LocalRepository;
pub use repository::{DossierRepository, RepositoryError, RepositoryResult};

use anyhow::Result;
use std::sync::{Arc, OnceLock};

/// Global repository instance initialized once per process.
static REPOSITORY: OnceLock<Arc<dyn DossierRepository>> = OnceLock::new();

/// Initialize the global repository singleton.
pub fn init_repository() -> Result<()> {
    if REPOSITORY.get().is_some() {
        return Ok(());
    }
    let repo: Arc<dyn DossierRepository> = Arc::new(LocalRepository::new());
    let _ = REPOSITORY.set(repo);
    Ok(())
}

/// Fetch the global repository, failing if [`init_repository`] never ran.
pub fn get_repository() -> Result<&'static Arc<dyn DossierRepository>> {
    REPOSITORY
        .get()
        .ok_or_else(|| anyhow::anyhow!("repository not initialized; call init_repository() first"))
}
