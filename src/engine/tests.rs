//! Unit tests for the workflow assembly.
//!
//! Milestone dates in these fixtures are hand-verified against the 2024
//! Portuguese civil calendar (instruction date 2024-01-02, a Tuesday).

use chrono::NaiveDate;

use crate::engine::workflow::{
    calculate_workflow, total_suspended_days, MILESTONE_CONFORMIDADE, MILESTONE_DIA,
    MILESTONE_REUNIAO,
};
use crate::models::{RegimeConfig, Suspension};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn start() -> NaiveDate {
    date(2024, 1, 2)
}

#[test]
fn test_workflow_produces_five_milestones_in_order() {
    let result = calculate_workflow(start(), &[], &RegimeConfig::regime_150(), None).unwrap();
    assert_eq!(result.milestones.len(), 5);
    assert_eq!(result.milestones[0].name, MILESTONE_REUNIAO);
    assert_eq!(result.milestones[1].name, MILESTONE_CONFORMIDADE);
    assert_eq!(result.milestones[4].name, MILESTONE_DIA);
    for pair in result.milestones.windows(2) {
        assert!(pair[0].resolved_date <= pair[1].resolved_date);
    }
}

#[test]
fn test_workflow_milestone_dates_without_suspensions() {
    let result = calculate_workflow(start(), &[], &RegimeConfig::regime_150(), None).unwrap();
    // 9 business days: Jan 3-5, 8-12, 15.
    assert_eq!(result.milestones[0].resolved_date, date(2024, 1, 15));
    // 30 business days land on Tuesday 2024-02-13.
    assert_eq!(result.milestones[1].resolved_date, date(2024, 2, 13));
}

#[test]
fn test_workflow_day_log_belongs_to_final_milestone() {
    let result = calculate_workflow(start(), &[], &RegimeConfig::regime_150(), None).unwrap();
    let last = result.day_log.last().unwrap();
    assert_eq!(last.counted, Some(150));
    assert_eq!(Some(last.date), result.decision_date());
    for pair in result.day_log.windows(2) {
        assert!(pair[0].date < pair[1].date);
    }
}

#[test]
fn test_workflow_without_suspensions_theoretical_equals_real() {
    let result = calculate_workflow(start(), &[], &RegimeConfig::regime_150(), None).unwrap();
    let theoretical = &result.complementary[0];
    let real = &result.complementary[1];
    assert_eq!(theoretical.date, real.date);
    assert_eq!(result.total_suspended_days, 0);
}

#[test]
fn test_workflow_consultation_window() {
    let result = calculate_workflow(start(), &[], &RegimeConfig::regime_150(), None).unwrap();
    let consultation = result.consultation.unwrap();
    // Conformity 2024-02-13 + 5 business days.
    assert_eq!(consultation.start, date(2024, 2, 20));
    assert!(consultation.start < consultation.end);
    assert_eq!(result.complementary[2].date, consultation.start);
    assert_eq!(result.complementary[3].date, consultation.end);
}

#[test]
fn test_workflow_suspension_shifts_conformity() {
    let suspensions = vec![Suspension::new(date(2024, 2, 1), date(2024, 2, 15)).unwrap()];
    let result =
        calculate_workflow(start(), &suspensions, &RegimeConfig::regime_150(), None).unwrap();
    // The 15 suspended calendar days push conformity from Feb 13 to Feb 28.
    assert_eq!(result.milestones[1].resolved_date, date(2024, 2, 28));
    assert_eq!(result.total_suspended_days, 15);
}

#[test]
fn test_workflow_pea_acceleration() {
    let suspensions = vec![Suspension::new(date(2024, 2, 1), date(2024, 2, 15)).unwrap()];
    let pea = date(2024, 1, 20);
    let result = calculate_workflow(
        start(),
        &suspensions,
        &RegimeConfig::regime_150(),
        Some(pea),
    )
    .unwrap();
    // 13 business days spent before the PEA leave 17 of the nominal 30; 17
    // business days from the suspension end (2024-02-15) land on 2024-03-11.
    assert_eq!(result.milestones[1].resolved_date, date(2024, 3, 11));
    // The accelerated date is also reported as the real conformity.
    assert_eq!(result.complementary[1].date, date(2024, 3, 11));
    // And differs from the theoretical suspension-free reference.
    assert_eq!(result.complementary[0].date, date(2024, 2, 13));
}

#[test]
fn test_workflow_pea_without_suspensions_falls_back() {
    let with_pea = calculate_workflow(
        start(),
        &[],
        &RegimeConfig::regime_150(),
        Some(date(2024, 1, 20)),
    )
    .unwrap();
    let without_pea = calculate_workflow(start(), &[], &RegimeConfig::regime_150(), None).unwrap();
    assert_eq!(
        with_pea.milestones[1].resolved_date,
        without_pea.milestones[1].resolved_date
    );
}

#[test]
fn test_workflow_rejects_inverted_suspension() {
    let inverted = Suspension {
        start: date(2024, 2, 15),
        end: date(2024, 2, 1),
    };
    let result = calculate_workflow(start(), &[inverted], &RegimeConfig::regime_150(), None);
    assert!(result.is_err());
}

#[test]
fn test_workflow_rejects_inconsistent_config() {
    let config = RegimeConfig {
        ptf: 400,
        ..RegimeConfig::regime_150()
    };
    assert!(calculate_workflow(start(), &[], &config, None).is_err());
}

#[test]
fn test_total_suspended_days_merges_overlaps() {
    let suspensions = vec![
        Suspension::new(date(2024, 2, 1), date(2024, 2, 10)).unwrap(),
        Suspension::new(date(2024, 2, 5), date(2024, 2, 15)).unwrap(),
    ];
    assert_eq!(total_suspended_days(&suspensions), 15);
}

#[test]
fn test_total_suspended_days_disjoint_intervals_sum() {
    let suspensions = vec![
        Suspension::new(date(2024, 2, 1), date(2024, 2, 10)).unwrap(),
        Suspension::new(date(2024, 3, 1), date(2024, 3, 5)).unwrap(),
    ];
    assert_eq!(total_suspended_days(&suspensions), 15);
}

#[test]
fn test_total_suspended_days_unsorted_input() {
    let suspensions = vec![
        Suspension::new(date(2024, 3, 1), date(2024, 3, 5)).unwrap(),
        Suspension::new(date(2024, 2, 1), date(2024, 2, 10)).unwrap(),
    ];
    assert_eq!(total_suspended_days(&suspensions), 15);
}

#[test]
fn test_workflow_90_day_regime() {
    let result = calculate_workflow(start(), &[], &RegimeConfig::regime_90(), None).unwrap();
    assert_eq!(result.milestones[4].legal_offset_business_days, 90);
    // 20 business days land on Tuesday 2024-01-30.
    assert_eq!(result.milestones[1].resolved_date, date(2024, 1, 30));
    assert_eq!(result.complementary[7].reference, "Dia 60 Global");
}
