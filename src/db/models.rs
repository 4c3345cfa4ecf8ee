//! Stored records: dossiers and their generated reports.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::api::{DossierId, ReportId};
use crate::models::{Regime, RegimeConfig, Suspension};
use crate::report::DeadlineReport;

/// A procedure dossier: the inputs of one deadline computation, editable
/// until a run snapshots them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dossier {
    pub id: DossierId,
    pub name: String,
    /// Project typology, e.g. "Anexo I" / "Anexo II" / "Alteração".
    pub typology: String,
    /// Activity sector, e.g. "Indústria", "Energia".
    pub sector: String,
    pub regime: Regime,
    /// Effective offsets: the regime defaults, possibly user-adjusted.
    pub config: RegimeConfig,
    /// Instruction date (day 0 of the count).
    pub start_date: NaiveDate,
    pub suspensions: Vec<Suspension>,
    /// Optional PEA reference date for the conformity acceleration rule.
    pub pea_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

/// A generated report kept alongside its dossier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredReport {
    pub id: ReportId,
    pub dossier_id: DossierId,
    pub created_at: DateTime<Utc>,
    pub report: DeadlineReport,
}

/// New-dossier payload, before the repository assigns an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDossier {
    pub name: String,
    pub typology: String,
    pub sector: String,
    pub regime: Regime,
    /// Offsets override; defaults to the regime's statutory values.
    #[serde(default)]
    pub config: Option<RegimeConfig>,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub suspensions: Vec<Suspension>,
    #[serde(default)]
    pub pea_date: Option<NaiveDate>,
}
