//! Dossier endpoint types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api::DossierId;
use crate::db::models::Dossier;
use crate::engine::EngineError;
use crate::models::{Regime, Suspension};

/// Lightweight dossier listing entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DossierInfo {
    pub dossier_id: DossierId,
    pub name: String,
    pub regime: Regime,
    pub start_date: NaiveDate,
    pub suspension_count: usize,
}

impl From<&Dossier> for DossierInfo {
    fn from(dossier: &Dossier) -> Self {
        Self {
            dossier_id: dossier.id,
            name: dossier.name.clone(),
            regime: dossier.regime,
            start_date: dossier.start_date,
            suspension_count: dossier.suspensions.len(),
        }
    }
}

/// Request body for adding a suspension to a dossier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AddSuspensionRequest {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl AddSuspensionRequest {
    /// Validate into a domain suspension.
    pub fn into_suspension(self) -> Result<Suspension, EngineError> {
        Suspension::new(self.start, self.end)
    }
}

/// Dossier route function name constants
pub const LIST_DOSSIERS: &str = "list_dossiers";
pub const CREATE_DOSSIER: &str = "create_dossier";
pub const DELETE_DOSSIER: &str = "delete_dossier";
