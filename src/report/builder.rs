//! Assembly of the printable deadline report.
//!
//! Mirrors the sections of the official report: identification and legal
//! framing, summary, the milestone table, complementary dates, suspensions,
//! the timeline (gantt) rows and the generated narrative.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{ComplementaryDate, Suspension, WorkflowResult};
use crate::report::document::Document;

/// One row of the principal-milestone table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneRow {
    pub name: String,
    /// Legal-deadline column, e.g. "150 dias úteis".
    pub legal_deadline: String,
    pub resolved_date: NaiveDate,
}

/// Category of a timeline row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GanttRowKind {
    Phase,
    Suspension,
    Consultation,
}

/// One bar of the timeline chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttRow {
    pub task: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub kind: GanttRowKind,
}

/// The structured printable report. Exporters render it; nothing here is
/// renderer-specific.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlineReport {
    pub project_name: String,
    pub typology: String,
    pub sector: String,
    pub regime_label: String,
    pub start_date: NaiveDate,
    pub total_suspended_days: i64,
    pub milestones: Vec<MilestoneRow>,
    pub complementary: Vec<ComplementaryDate>,
    pub suspensions: Vec<Suspension>,
    pub gantt: Vec<GanttRow>,
    /// Generated narrative, already converted from Markdown.
    pub narrative: Document,
}

impl DeadlineReport {
    #[allow(clippy::too_many_arguments)]
    pub fn assemble(
        project_name: impl Into<String>,
        typology: impl Into<String>,
        sector: impl Into<String>,
        regime_label: impl Into<String>,
        start_date: NaiveDate,
        workflow: &WorkflowResult,
        suspensions: &[Suspension],
        narrative: Document,
    ) -> Self {
        let milestones = workflow
            .milestones
            .iter()
            .map(|m| MilestoneRow {
                name: m.name.clone(),
                legal_deadline: format!("{} dias úteis", m.legal_offset_business_days),
                resolved_date: m.resolved_date,
            })
            .collect();
        Self {
            project_name: project_name.into(),
            typology: typology.into(),
            sector: sector.into(),
            regime_label: regime_label.into(),
            start_date,
            total_suspended_days: workflow.total_suspended_days,
            milestones,
            complementary: workflow.complementary.clone(),
            suspensions: suspensions.to_vec(),
            gantt: build_gantt_rows(start_date, workflow, suspensions),
            narrative,
        }
    }
}

/// Build the timeline rows: principal phases chained head-to-tail from the
/// start date, one row per suspension, and the public-consultation window.
///
/// Each phase bar starts where the previous one ended; when a phase resolves
/// earlier than its predecessor the bar collapses to its end date so bars
/// never run backwards.
pub fn build_gantt_rows(
    start_date: NaiveDate,
    workflow: &WorkflowResult,
    suspensions: &[Suspension],
) -> Vec<GanttRow> {
    let mut rows = Vec::new();
    let mut previous_end = start_date;
    for milestone in &workflow.milestones {
        let end = milestone.resolved_date;
        let start = previous_end.min(end);
        rows.push(GanttRow {
            task: milestone.name.clone(),
            start,
            end,
            kind: GanttRowKind::Phase,
        });
        previous_end = end;
    }
    for suspension in suspensions {
        rows.push(GanttRow {
            task: "Suspensão".to_string(),
            start: suspension.start,
            end: suspension.end,
            kind: GanttRowKind::Suspension,
        });
    }
    if let Some(consultation) = workflow.consultation {
        rows.push(GanttRow {
            task: "Consulta Pública".to_string(),
            start: consultation.start,
            end: consultation.end,
            kind: GanttRowKind::Consultation,
        });
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::calculate_workflow;
    use crate::models::RegimeConfig;
    use crate::report::document::Document;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_workflow(suspensions: &[Suspension]) -> WorkflowResult {
        calculate_workflow(
            date(2024, 1, 2),
            suspensions,
            &RegimeConfig::regime_150(),
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_gantt_phases_are_chained() {
        let workflow = sample_workflow(&[]);
        let rows = build_gantt_rows(date(2024, 1, 2), &workflow, &[]);
        let phases: Vec<&GanttRow> = rows
            .iter()
            .filter(|r| r.kind == GanttRowKind::Phase)
            .collect();
        assert_eq!(phases.len(), 5);
        assert_eq!(phases[0].start, date(2024, 1, 2));
        for pair in phases.windows(2) {
            assert_eq!(pair[1].start, pair[0].end);
        }
    }

    #[test]
    fn test_gantt_includes_suspension_and_consultation_rows() {
        let suspensions = vec![Suspension::new(date(2024, 2, 1), date(2024, 2, 15)).unwrap()];
        let workflow = sample_workflow(&suspensions);
        let rows = build_gantt_rows(date(2024, 1, 2), &workflow, &suspensions);
        assert!(rows
            .iter()
            .any(|r| r.kind == GanttRowKind::Suspension && r.start == date(2024, 2, 1)));
        assert!(rows.iter().any(|r| r.kind == GanttRowKind::Consultation));
    }

    #[test]
    fn test_report_assembly() {
        let workflow = sample_workflow(&[]);
        let report = DeadlineReport::assemble(
            "Parque Solar de Évora",
            "Anexo II",
            "Energia",
            "Regime 150 Dias",
            date(2024, 1, 2),
            &workflow,
            &[],
            Document::new("Relatório de Prazos", vec![]),
        );
        assert_eq!(report.milestones.len(), 5);
        assert_eq!(report.milestones[4].legal_deadline, "150 dias úteis");
        assert_eq!(report.total_suspended_days, 0);
        assert_eq!(report.complementary.len(), 8);
        assert!(!report.gantt.is_empty());
    }
}
