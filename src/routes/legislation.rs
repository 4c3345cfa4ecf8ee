//! Legal-reference catalog endpoint types.

use serde::{Deserialize, Serialize};

use crate::legislation::{self, LegalCategory, LegalReference};

/// Catalog response: either the grouped library or a flat search result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegislationResponse {
    /// Full catalog, grouped by theme. Empty on filtered queries.
    #[serde(default)]
    pub categories: Vec<LegalCategory>,
    /// Flat matches for a search query. Empty for the full catalog.
    #[serde(default)]
    pub matches: Vec<LegalReference>,
    pub total: usize,
}

/// Build the response for an optional search query.
pub fn get_legislation(query: Option<&str>) -> LegislationResponse {
    match query.map(str::trim).filter(|q| !q.is_empty()) {
        Some(query) => {
            let matches = legislation::search(query);
            LegislationResponse {
                categories: vec![],
                total: matches.len(),
                matches,
            }
        }
        None => {
            let categories = legislation::library();
            let total = categories.iter().map(|c| c.references.len()).sum();
            LegislationResponse {
                categories,
                matches: vec![],
                total,
            }
        }
    }
}

/// Legislation route function name constant
pub const GET_LEGISLATION: &str = "get_legislation";
