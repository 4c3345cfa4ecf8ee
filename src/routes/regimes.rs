//! Regime listing endpoint types.

use serde::{Deserialize, Serialize};

use crate::models::{Regime, RegimeConfig};

/// One regime with its statutory defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegimeInfo {
    pub regime: Regime,
    pub label: String,
    pub nominal_length: u32,
    pub defaults: RegimeConfig,
}

/// Both statutory regimes, in length order.
pub fn list_regimes() -> Vec<RegimeInfo> {
    [Regime::Days150, Regime::Days90]
        .into_iter()
        .map(|regime| RegimeInfo {
            regime,
            label: regime.label().to_string(),
            nominal_length: regime.nominal_length(),
            defaults: regime.default_config(),
        })
        .collect()
}

/// Regimes route function name constant
pub const LIST_REGIMES: &str = "list_regimes";
