//! In-memory repository for local deployments and tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::api::{DossierId, ReportId};
use crate::db::models::{Dossier, NewDossier, StoredReport};
use crate::db::repository::{DossierRepository, RepositoryError, RepositoryResult};
use crate::models::Suspension;
use crate::report::DeadlineReport;

/// Thread-safe in-memory store. Ids are process-local and monotonically
/// increasing.
pub struct LocalRepository {
    dossiers: RwLock<HashMap<DossierId, Dossier>>,
    reports: RwLock<HashMap<ReportId, StoredReport>>,
    next_dossier_id: AtomicI64,
    next_report_id: AtomicI64,
}

impl LocalRepository {
    pub fn new() -> Self {
        Self {
            dossiers: RwLock::new(HashMap::new()),
            reports: RwLock::new(HashMap::new()),
            next_dossier_id: AtomicI64::new(1),
            next_report_id: AtomicI64::new(1),
        }
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DossierRepository for LocalRepository {
    async fn create_dossier(&self, new: NewDossier) -> RepositoryResult<Dossier> {
        let id = DossierId::new(self.next_dossier_id.fetch_add(1, Ordering::SeqCst));
        let config = new.config.unwrap_or_else(|| new.regime.default_config());
        let dossier = Dossier {
            id,
            name: new.name,
            typology: new.typology,
            sector: new.sector,
            regime: new.regime,
            config,
            start_date: new.start_date,
            suspensions: new.suspensions,
            pea_date: new.pea_date,
            created_at: chrono::Utc::now(),
        };
        self.dossiers.write().insert(id, dossier.clone());
        Ok(dossier)
    }

    async fn get_dossier(&self, id: DossierId) -> RepositoryResult<Dossier> {
        self.dossiers
            .read()
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found("dossier", id))
    }

    async fn list_dossiers(&self) -> RepositoryResult<Vec<Dossier>> {
        let mut dossiers: Vec<Dossier> = self.dossiers.read().values().cloned().collect();
        dossiers.sort_by_key(|d| d.id);
        Ok(dossiers)
    }

    async fn delete_dossier(&self, id: DossierId) -> RepositoryResult<()> {
        self.dossiers
            .write()
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::not_found("dossier", id))?;
        // Reports of a deleted dossier go with it.
        self.reports.write().retain(|_, r| r.dossier_id != id);
        Ok(())
    }

    async fn add_suspension(
        &self,
        id: DossierId,
        suspension: Suspension,
    ) -> RepositoryResult<Dossier> {
        let mut dossiers = self.dossiers.write();
        let dossier = dossiers
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::not_found("dossier", id))?;
        dossier.suspensions.push(suspension);
        Ok(dossier.clone())
    }

    async fn remove_suspension(&self, id: DossierId, index: usize) -> RepositoryResult<Dossier> {
        let mut dossiers = self.dossiers.write();
        let dossier = dossiers
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::not_found("dossier", id))?;
        if index >= dossier.suspensions.len() {
            return Err(RepositoryError::InvalidInput(format!(
                "suspension index {} out of range (dossier has {})",
                index,
                dossier.suspensions.len()
            )));
        }
        dossier.suspensions.remove(index);
        Ok(dossier.clone())
    }

    async fn store_report(
        &self,
        dossier_id: DossierId,
        report: DeadlineReport,
    ) -> RepositoryResult<StoredReport> {
        // Reject reports for dossiers that no longer exist.
        if !self.dossiers.read().contains_key(&dossier_id) {
            return Err(RepositoryError::not_found("dossier", dossier_id));
        }
        let id = ReportId::new(self.next_report_id.fetch_add(1, Ordering::SeqCst));
        let stored = StoredReport {
            id,
            dossier_id,
            created_at: chrono::Utc::now(),
            report,
        };
        self.reports.write().insert(id, stored.clone());
        Ok(stored)
    }

    async fn get_report(&self, id: ReportId) -> RepositoryResult<StoredReport> {
        self.reports
            .read()
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found("report", id))
    }

    async fn list_reports(&self, dossier_id: DossierId) -> RepositoryResult<Vec<StoredReport>> {
        let mut reports: Vec<StoredReport> = self
            .reports
            .read()
            .values()
            .filter(|r| r.dossier_id == dossier_id)
            .cloned()
            .collect();
        reports.sort_by_key(|r| r.id);
        Ok(reports)
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}
