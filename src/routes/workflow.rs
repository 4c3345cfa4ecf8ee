//! Workflow computation endpoint: request validation and response shape.
//!
//! The request carries signed integers and raw intervals straight from the
//! client; everything is validated here so the engine only ever sees
//! well-typed values.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::engine::{calculate_workflow, EngineError};
use crate::models::{Regime, RegimeConfig, Suspension, WorkflowResult};
use crate::report::{build_gantt_rows, GanttRow};

/// Per-field offset overrides, signed as received. `None` keeps the regime
/// default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OffsetOverrides {
    #[serde(default)]
    pub reuniao: Option<i64>,
    #[serde(default)]
    pub conformidade: Option<i64>,
    #[serde(default)]
    pub ptf: Option<i64>,
    #[serde(default)]
    pub audiencia: Option<i64>,
    #[serde(default)]
    pub dia: Option<i64>,
    #[serde(default)]
    pub setoriais: Option<i64>,
    #[serde(default)]
    pub cp_duration: Option<i64>,
    #[serde(default)]
    pub visita: Option<i64>,
}

impl OffsetOverrides {
    /// Apply the overrides to a base configuration, rejecting negative or
    /// oversized day counts.
    pub fn apply(&self, base: RegimeConfig) -> Result<RegimeConfig, EngineError> {
        fn field(value: Option<i64>, current: u32, name: &str) -> Result<u32, EngineError> {
            match value {
                None => Ok(current),
                Some(v) if (0..=u32::MAX as i64).contains(&v) => Ok(v as u32),
                Some(v) => Err(EngineError::InvalidArgument(format!(
                    "offset '{}' must be a non-negative day count, got {}",
                    name, v
                ))),
            }
        }
        Ok(RegimeConfig {
            reuniao: field(self.reuniao, base.reuniao, "reuniao")?,
            conformidade: field(self.conformidade, base.conformidade, "conformidade")?,
            ptf: field(self.ptf, base.ptf, "ptf")?,
            audiencia: field(self.audiencia, base.audiencia, "audiencia")?,
            dia: field(self.dia, base.dia, "dia")?,
            setoriais: field(self.setoriais, base.setoriais, "setoriais")?,
            cp_duration: field(self.cp_duration, base.cp_duration, "cp_duration")?,
            visita: field(self.visita, base.visita, "visita")?,
        })
    }
}

/// Request body for a synchronous workflow computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowRequest {
    /// Instruction date (day 0 of the count).
    pub start_date: NaiveDate,
    /// Procedure regime; defaults to the 150-day procedure.
    #[serde(default = "default_regime")]
    pub regime: Regime,
    /// Offset overrides on top of the regime defaults.
    #[serde(default)]
    pub overrides: OffsetOverrides,
    /// Suspension intervals, validated before computing.
    #[serde(default)]
    pub suspensions: Vec<Suspension>,
    /// Optional PEA reference date for the conformity acceleration rule.
    #[serde(default)]
    pub pea_date: Option<NaiveDate>,
}

fn default_regime() -> Regime {
    Regime::Days150
}

/// Response body: the computed schedule plus the timeline rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowResponse {
    pub regime: Regime,
    pub regime_label: String,
    /// Effective offsets after overrides.
    pub config: RegimeConfig,
    #[serde(flatten)]
    pub result: WorkflowResult,
    pub gantt: Vec<GanttRow>,
}

/// Validate the request and run the engine.
pub fn compute(request: &WorkflowRequest) -> Result<WorkflowResponse, EngineError> {
    let config = request.overrides.apply(request.regime.default_config())?;
    for suspension in &request.suspensions {
        suspension.validate()?;
    }
    let result = calculate_workflow(
        request.start_date,
        &request.suspensions,
        &config,
        request.pea_date,
    )?;
    let gantt = build_gantt_rows(request.start_date, &result, &request.suspensions);
    Ok(WorkflowResponse {
        regime: request.regime,
        regime_label: request.regime.label().to_string(),
        config,
        result,
        gantt,
    })
}

/// Workflow route function name constant
pub const COMPUTE_WORKFLOW: &str = "compute_workflow";

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn base_request() -> WorkflowRequest {
        WorkflowRequest {
            start_date: date(2024, 1, 2),
            regime: Regime::Days150,
            overrides: OffsetOverrides::default(),
            suspensions: vec![],
            pea_date: None,
        }
    }

    #[test]
    fn test_compute_default_regime() {
        let response = compute(&base_request()).unwrap();
        assert_eq!(response.result.milestones.len(), 5);
        assert_eq!(response.config, RegimeConfig::regime_150());
        assert_eq!(response.regime_label, "Regime 150 Dias");
        assert!(!response.gantt.is_empty());
    }

    #[test]
    fn test_negative_override_is_rejected() {
        let mut request = base_request();
        request.overrides.conformidade = Some(-5);
        let err = compute(&request).unwrap_err();
        assert!(err.to_string().contains("conformidade"));
    }

    #[test]
    fn test_override_replaces_default() {
        let mut request = base_request();
        request.overrides.reuniao = Some(10);
        let response = compute(&request).unwrap();
        assert_eq!(response.config.reuniao, 10);
        assert_eq!(response.config.conformidade, 30);
    }

    #[test]
    fn test_inverted_suspension_is_rejected() {
        let mut request = base_request();
        request.suspensions.push(Suspension {
            start: date(2024, 2, 15),
            end: date(2024, 2, 1),
        });
        assert!(compute(&request).is_err());
    }

    #[test]
    fn test_request_minimal_json_defaults() {
        let request: WorkflowRequest =
            serde_json::from_str(r#"{"start_date": "2024-01-02"}"#).unwrap();
        assert_eq!(request.regime, Regime::Days150);
        assert!(request.suspensions.is_empty());
        let response = compute(&request).unwrap();
        assert_eq!(response.result.total_suspended_days, 0);
    }

    #[test]
    fn test_response_serializes_flattened_result() {
        let response = compute(&base_request()).unwrap();
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("milestones").is_some());
        assert!(json.get("day_log").is_some());
        assert!(json.get("gantt").is_some());
    }
}
