//! Public API surface for the backend.
//!
//! This file consolidates the identifier newtypes and re-exports the DTO
//! types of each route module. All types derive Serialize/Deserialize for
//! JSON serialization.

pub use crate::routes::dossiers::{AddSuspensionRequest, DossierInfo};
pub use crate::routes::legislation::LegislationResponse;
pub use crate::routes::regimes::RegimeInfo;
pub use crate::routes::reports::{ReportInfo, StartReportRequest};
pub use crate::routes::workflow::{WorkflowRequest, WorkflowResponse};

use serde::{Deserialize, Serialize};

/// Dossier identifier (repository primary key).
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct DossierId(pub i64);

/// Stored-report identifier.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ReportId(pub i64);

impl DossierId {
    pub fn new(value: i64) -> Self {
        DossierId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl ReportId {
    pub fn new(value: i64) -> Self {
        ReportId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for DossierId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for ReportId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<DossierId> for i64 {
    fn from(id: DossierId) -> Self {
        id.0
    }
}
impl From<ReportId> for i64 {
    fn from(id: ReportId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::{DossierId, ReportId};

    #[test]
    fn test_dossier_id_new() {
        let id = DossierId::new(42);
        assert_eq!(id.value(), 42);
    }

    #[test]
    fn test_dossier_id_equality() {
        assert_eq!(DossierId::new(100), DossierId::new(100));
        assert_ne!(DossierId::new(100), DossierId::new(101));
    }

    #[test]
    fn test_dossier_id_ordering() {
        assert!(DossierId::new(1) < DossierId::new(2));
    }

    #[test]
    fn test_report_id_display() {
        assert_eq!(ReportId::new(7).to_string(), "7");
    }

    #[test]
    fn test_ids_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(DossierId::new(1));
        set.insert(DossierId::new(2));
        set.insert(DossierId::new(1));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_id_into_i64() {
        let raw: i64 = DossierId::new(9).into();
        assert_eq!(raw, 9);
    }
}
