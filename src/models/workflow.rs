//! Suspension intervals and deadline-engine result types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::engine::EngineError;

/// Administrative suspension: a closed calendar-date interval during which
/// the procedural clock does not advance, regardless of weekend or holiday
/// status. Both ends are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suspension {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Suspension {
    /// Create a suspension, rejecting inverted intervals.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, EngineError> {
        let suspension = Self { start, end };
        suspension.validate()?;
        Ok(suspension)
    }

    /// Validate the interval. Deserialized values bypass [`Suspension::new`],
    /// so boundary layers call this before handing intervals to the engine.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.start > self.end {
            return Err(EngineError::InvalidArgument(format!(
                "suspension starts {} after it ends {}",
                self.start, self.end
            )));
        }
        Ok(())
    }

    /// Whether the date falls inside the interval (inclusive both ends).
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Inclusive calendar-day length of the interval.
    pub fn calendar_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// Classification of one calendar day in the deadline walk.
///
/// Suspension takes precedence: a suspended Saturday classifies as
/// `Suspended`, not `Weekend`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayClass {
    /// Day 0 of the count (the instruction date itself).
    Start,
    /// A counted business day.
    Business,
    Weekend,
    Holiday,
    Suspended,
}

impl DayClass {
    /// Label used in the day-by-day table of official schedules.
    pub fn label(&self) -> &'static str {
        match self {
            DayClass::Start => "Início",
            DayClass::Business => "Util",
            DayClass::Weekend => "Fim de Semana",
            DayClass::Holiday => "Feriado",
            DayClass::Suspended => "Suspenso",
        }
    }
}

impl std::fmt::Display for DayClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the day-by-day deadline log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayLogEntry {
    pub date: NaiveDate,
    /// Running business-day count; `None` on non-counted days (rendered as a
    /// dash in tables).
    pub counted: Option<u32>,
    pub class: DayClass,
}

impl DayLogEntry {
    /// Table rendering of the running count.
    pub fn counted_label(&self) -> String {
        match self.counted {
            Some(n) => n.to_string(),
            None => "-".to_string(),
        }
    }
}

/// A principal milestone with its resolved calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputedMilestone {
    pub name: String,
    pub legal_offset_business_days: u32,
    pub resolved_date: NaiveDate,
}

/// A derived reference date with a human-readable derivation note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplementaryDate {
    pub name: String,
    /// How the date was derived, e.g. "Conf + 5 dias".
    pub reference: String,
    pub date: NaiveDate,
}

/// Public-consultation window and related field dates, kept separately from
/// the complementary table for timeline rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsultationWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub visit: NaiveDate,
    pub sectoral: NaiveDate,
}

/// Aggregate output of one workflow computation.
///
/// A pure value recomputed from scratch on every invocation; nothing is
/// carried between calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowResult {
    /// The five principal milestones, in procedural order.
    pub milestones: Vec<ComputedMilestone>,
    /// Derived reference dates (empty when no conformity date resolved).
    pub complementary: Vec<ComplementaryDate>,
    /// Calendar days covered by the suspension set (overlaps merged).
    pub total_suspended_days: i64,
    /// Day-by-day log of the final-decision count.
    pub day_log: Vec<DayLogEntry>,
    /// Consultation window, when a conformity date resolved.
    pub consultation: Option<ConsultationWindow>,
}

impl WorkflowResult {
    /// The resolved final-decision (DIA) date.
    pub fn decision_date(&self) -> Option<NaiveDate> {
        self.milestones.last().map(|m| m.resolved_date)
    }
}
