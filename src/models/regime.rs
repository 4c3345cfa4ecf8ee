//! Procedural regimes and their statutory business-day offsets.
//!
//! An AIA procedure runs under one of two regimes (150 or 90 days). Each
//! regime bundles the business-day offsets of the principal milestones plus
//! the subsidiary constants for the public-consultation phase. Offsets count
//! business days from the instruction date (day 0).

use serde::{Deserialize, Serialize};

use crate::engine::EngineError;

/// Statutory procedure regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Regime {
    /// Full procedure: decision due 150 business days after instruction.
    Days150,
    /// Shortened procedure: decision due 90 business days after instruction.
    Days90,
}

impl Regime {
    /// Nominal total length of the procedure in business days.
    pub fn nominal_length(&self) -> u32 {
        match self {
            Regime::Days150 => 150,
            Regime::Days90 => 90,
        }
    }

    /// Display label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Regime::Days150 => "Regime 150 Dias",
            Regime::Days90 => "Regime 90 Dias",
        }
    }

    /// The statutory default offsets for this regime.
    pub fn default_config(&self) -> RegimeConfig {
        match self {
            Regime::Days150 => RegimeConfig::regime_150(),
            Regime::Days90 => RegimeConfig::regime_90(),
        }
    }
}

impl std::fmt::Display for Regime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Business-day offsets defining one procedural regime.
///
/// The five principal offsets (`reuniao` through `dia`) drive the milestone
/// table; `setoriais`, `cp_duration` and `visita` feed the complementary
/// reference dates. `dia` is the nominal total length of the regime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeConfig {
    /// Evaluation-committee meeting.
    pub reuniao: u32,
    /// Conformity appraisal limit.
    pub conformidade: u32,
    /// Submission of the final technical opinion (PTF) to the authority.
    pub ptf: u32,
    /// Interested-parties hearing.
    pub audiencia: u32,
    /// Final decision (DIA). Equals the regime's nominal length.
    pub dia: u32,
    /// Sectoral opinions, counted globally from day 0.
    pub setoriais: u32,
    /// Public-consultation duration, counted from consultation start.
    pub cp_duration: u32,
    /// Site visit, counted from consultation start.
    pub visita: u32,
}

impl RegimeConfig {
    /// Defaults for the 150-day regime.
    pub fn regime_150() -> Self {
        Self {
            reuniao: 9,
            conformidade: 30,
            ptf: 85,
            audiencia: 100,
            dia: 150,
            setoriais: 75,
            cp_duration: 30,
            visita: 15,
        }
    }

    /// Defaults for the 90-day regime.
    pub fn regime_90() -> Self {
        Self {
            reuniao: 9,
            conformidade: 20,
            ptf: 65,
            audiencia: 70,
            dia: 90,
            setoriais: 60,
            cp_duration: 30,
            visita: 15,
        }
    }

    /// Check internal consistency: the decision offset closes the procedure,
    /// so every other principal offset must fit inside it.
    pub fn validate(&self) -> Result<(), EngineError> {
        let principals = [
            ("reuniao", self.reuniao),
            ("conformidade", self.conformidade),
            ("ptf", self.ptf),
            ("audiencia", self.audiencia),
        ];
        for (name, offset) in principals {
            if offset > self.dia {
                return Err(EngineError::InvalidArgument(format!(
                    "offset '{}' ({}) exceeds the regime length ({})",
                    name, offset, self.dia
                )));
            }
        }
        Ok(())
    }
}

impl Default for RegimeConfig {
    fn default() -> Self {
        Self::regime_150()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regime_nominal_length() {
        assert_eq!(Regime::Days150.nominal_length(), 150);
        assert_eq!(Regime::Days90.nominal_length(), 90);
    }

    #[test]
    fn test_default_config_matches_nominal_length() {
        assert_eq!(
            Regime::Days150.default_config().dia,
            Regime::Days150.nominal_length()
        );
        assert_eq!(
            Regime::Days90.default_config().dia,
            Regime::Days90.nominal_length()
        );
    }

    #[test]
    fn test_regime_90_defaults() {
        let config = RegimeConfig::regime_90();
        assert_eq!(config.conformidade, 20);
        assert_eq!(config.ptf, 65);
        assert_eq!(config.audiencia, 70);
        assert_eq!(config.setoriais, 60);
    }

    #[test]
    fn test_subsidiary_defaults_shared_between_regimes() {
        assert_eq!(RegimeConfig::regime_150().cp_duration, 30);
        assert_eq!(RegimeConfig::regime_90().cp_duration, 30);
        assert_eq!(RegimeConfig::regime_150().visita, 15);
        assert_eq!(RegimeConfig::regime_90().visita, 15);
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(RegimeConfig::regime_150().validate().is_ok());
        assert!(RegimeConfig::regime_90().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_offset_beyond_regime_length() {
        let config = RegimeConfig {
            audiencia: 200,
            ..RegimeConfig::regime_150()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_regime_serde_roundtrip() {
        let json = serde_json::to_string(&Regime::Days150).unwrap();
        assert_eq!(json, "\"days150\"");
        let back: Regime = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Regime::Days150);
    }

    #[test]
    fn test_regime_label() {
        assert_eq!(Regime::Days150.label(), "Regime 150 Dias");
        assert_eq!(Regime::Days90.label(), "Regime 90 Dias");
    }
}
