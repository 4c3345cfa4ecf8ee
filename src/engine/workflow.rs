//! Workflow assembly: the full milestone schedule of one procedure.

use chrono::{Datelike, Duration, NaiveDate};

use crate::engine::business::{add_business_days, deadline_rigorous, is_business_day};
use crate::engine::calendar::HolidaySet;
use crate::engine::EngineError;
use crate::models::{
    ComplementaryDate, ComputedMilestone, ConsultationWindow, RegimeConfig, Suspension,
    WorkflowResult,
};

/// Principal milestone labels, in procedural order.
pub const MILESTONE_REUNIAO: &str = "Data Reunião";
pub const MILESTONE_CONFORMIDADE: &str = "Limite Conformidade";
pub const MILESTONE_PTF: &str = "Envio PTF à AAIA";
pub const MILESTONE_AUDIENCIA: &str = "Audiência de Interessados";
pub const MILESTONE_DIA: &str = "Emissão da DIA (Decisão Final)";

/// Compute the milestone schedule for one procedure.
///
/// Five principal milestones are resolved in fixed order through the
/// rigorous walk. The conformity limit has a special rule: when a PEA
/// reference date is given and at least one suspension exists, the business
/// days already spent strictly between the start date and the PEA date are
/// deducted from the nominal conformity offset, and the remainder is counted
/// from the end of the latest suspension with no suspensions applied: the
/// PEA freezes that part of the countdown before the clock stops.
///
/// The final milestone always carries the day-by-day log. When a conformity
/// date resolves, eight complementary reference dates are derived from it.
///
/// Pure function of its inputs; suspensions are read as a snapshot and never
/// mutated.
pub fn calculate_workflow(
    start: NaiveDate,
    suspensions: &[Suspension],
    config: &RegimeConfig,
    pea_date: Option<NaiveDate>,
) -> Result<WorkflowResult, EngineError> {
    config.validate()?;
    for suspension in suspensions {
        suspension.validate()?;
    }

    // Provision holidays for every year the walks can touch: milestone
    // offsets can exceed 150 business days, and suspensions may push the
    // landing dates further out.
    let mut last_year = start.year() + 2;
    if let Some(last_end) = suspensions.iter().map(|s| s.end).max() {
        last_year = last_year.max(last_end.year() + 1);
    }
    if let Some(pea) = pea_date {
        last_year = last_year.max(pea.year() + 1);
    }
    let holidays = HolidaySet::for_range(start.year(), last_year);

    let steps = [
        (MILESTONE_REUNIAO, config.reuniao),
        (MILESTONE_CONFORMIDADE, config.conformidade),
        (MILESTONE_PTF, config.ptf),
        (MILESTONE_AUDIENCIA, config.audiencia),
        (MILESTONE_DIA, config.dia),
    ];

    let mut milestones = Vec::with_capacity(steps.len());
    let mut day_log = Vec::new();
    let mut conformity_real = None;

    for (name, offset) in steps {
        let resolved_date = if name == MILESTONE_CONFORMIDADE {
            let accelerated = match (pea_date, suspensions.iter().map(|s| s.end).max()) {
                (Some(pea), Some(last_suspension_end)) => Some(conformity_after_pea(
                    start,
                    pea,
                    offset,
                    last_suspension_end,
                    &holidays,
                )),
                _ => None,
            };
            let date = match accelerated {
                Some(date) => date,
                None => deadline_rigorous(start, offset, suspensions, &holidays, false).0,
            };
            conformity_real = Some(date);
            date
        } else if name == MILESTONE_DIA {
            let (date, log) = deadline_rigorous(start, offset, suspensions, &holidays, true);
            day_log = log.unwrap_or_default();
            date
        } else {
            deadline_rigorous(start, offset, suspensions, &holidays, false).0
        };

        milestones.push(ComputedMilestone {
            name: name.to_string(),
            legal_offset_business_days: offset,
            resolved_date,
        });
    }

    let mut complementary = Vec::new();
    let mut consultation = None;
    if let Some(conformity_real) = conformity_real {
        let (conformity_theoretical, _) =
            deadline_rigorous(start, config.conformidade, &[], &holidays, false);
        let cp_start = add_business_days(conformity_real, 5, &holidays);
        let cp_end = add_business_days(cp_start, config.cp_duration, &holidays);
        let external_opinions = add_business_days(cp_start, 23, &holidays);
        let cp_report = add_business_days(cp_end, 7, &holidays);
        let visit = add_business_days(cp_start, config.visita, &holidays);
        let (sectoral, _) =
            deadline_rigorous(start, config.setoriais, suspensions, &holidays, false);

        complementary = vec![
            ComplementaryDate {
                name: "1. Conformidade (Ref. Teórica)".to_string(),
                reference: "Sem suspensões".to_string(),
                date: conformity_theoretical,
            },
            ComplementaryDate {
                name: "1. Conformidade (Real)".to_string(),
                reference: "Com suspensões".to_string(),
                date: conformity_real,
            },
            ComplementaryDate {
                name: "2. Início Consulta Pública".to_string(),
                reference: "Conf + 5 dias".to_string(),
                date: cp_start,
            },
            ComplementaryDate {
                name: "3. Fim Consulta Pública".to_string(),
                reference: format!("Início CP + {} dias", config.cp_duration),
                date: cp_end,
            },
            ComplementaryDate {
                name: "4. Data Pareceres Externos".to_string(),
                reference: "Início CP + 23 dias".to_string(),
                date: external_opinions,
            },
            ComplementaryDate {
                name: "5. Envio Relatório CP".to_string(),
                reference: "Fim CP + 7 dias".to_string(),
                date: cp_report,
            },
            ComplementaryDate {
                name: "6. Visita Técnica".to_string(),
                reference: format!("Início CP + {} dias", config.visita),
                date: visit,
            },
            ComplementaryDate {
                name: "7. Pareceres Setoriais".to_string(),
                reference: format!("Dia {} Global", config.setoriais),
                date: sectoral,
            },
        ];
        consultation = Some(ConsultationWindow {
            start: cp_start,
            end: cp_end,
            visit,
            sectoral,
        });
    }

    Ok(WorkflowResult {
        milestones,
        complementary,
        total_suspended_days: total_suspended_days(suspensions),
        day_log,
        consultation,
    })
}

/// The PEA-accelerated conformity date.
///
/// Business days already elapsed strictly between `start` (exclusive) and
/// `pea` (exclusive) are counted suspension-blind and deducted from the
/// nominal offset, floored at zero; the remainder is walked from the end of
/// the latest suspension with no suspensions applied.
fn conformity_after_pea(
    start: NaiveDate,
    pea: NaiveDate,
    nominal_offset: u32,
    last_suspension_end: NaiveDate,
    holidays: &HolidaySet,
) -> NaiveDate {
    let mut spent = 0u32;
    let mut current = start + Duration::days(1);
    while current < pea {
        if is_business_day(current, holidays) {
            spent += 1;
        }
        current += Duration::days(1);
    }
    let remaining = nominal_offset.saturating_sub(spent);
    deadline_rigorous(last_suspension_end, remaining, &[], holidays, false).0
}

/// Calendar days covered by the suspension set, inclusive on both ends.
///
/// Overlapping intervals are merged first, so each suspended calendar day is
/// counted once.
pub fn total_suspended_days(suspensions: &[Suspension]) -> i64 {
    let mut intervals: Vec<(NaiveDate, NaiveDate)> =
        suspensions.iter().map(|s| (s.start, s.end)).collect();
    intervals.sort();

    let mut total = 0;
    let mut merged: Option<(NaiveDate, NaiveDate)> = None;
    for (start, end) in intervals {
        match merged {
            Some((m_start, m_end)) if start <= m_end => {
                merged = Some((m_start, m_end.max(end)));
            }
            Some((m_start, m_end)) => {
                total += (m_end - m_start).num_days() + 1;
                merged = Some((start, end));
            }
            None => merged = Some((start, end)),
        }
    }
    if let Some((m_start, m_end)) = merged {
        total += (m_end - m_start).num_days() + 1;
    }
    total
}
