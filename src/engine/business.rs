//! Business-day counting primitives and the rigorous deadline walk.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::engine::calendar::HolidaySet;
use crate::models::{DayClass, DayLogEntry, Suspension};

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// A business day is neither a weekend day nor a listed holiday.
pub fn is_business_day(date: NaiveDate, holidays: &HolidaySet) -> bool {
    !is_weekend(date) && !holidays.is_holiday(date)
}

/// Whether the date falls inside any of the suspension intervals.
///
/// Intervals need not be merged or disjoint; membership is a logical OR.
pub fn is_suspended(date: NaiveDate, suspensions: &[Suspension]) -> bool {
    suspensions.iter().any(|s| s.contains(date))
}

/// Advance `n` business days from `start`, suspension-blind.
///
/// Walks one calendar day at a time and counts only business days. `n = 0`
/// returns `start` unchanged. Terminates for any `n`: every seven-day window
/// holds at least one non-weekend day and holidays are finite.
pub fn add_business_days(start: NaiveDate, n: u32, holidays: &HolidaySet) -> NaiveDate {
    let mut current = start;
    let mut added = 0;
    while added < n {
        current += Duration::days(1);
        if is_business_day(current, holidays) {
            added += 1;
        }
    }
    current
}

/// Push a date forward, one calendar day at a time, until it is neither a
/// weekend day nor a holiday. Identity on business days.
///
/// Deliberately ignores suspensions: the statutory correction only moves a
/// deadline off weekends and holidays.
pub fn roll_forward(date: NaiveDate, holidays: &HolidaySet) -> NaiveDate {
    let mut current = date;
    while is_weekend(current) || holidays.is_holiday(current) {
        current += Duration::days(1);
    }
    current
}

/// The rigorous statutory walk: count `target_business_days` business days
/// from `start`, honoring suspensions, then roll the landing date off
/// weekends and holidays.
///
/// Each visited day classifies as exactly one of Suspended, Weekend, Holiday
/// or Business, with suspension taking precedence; only Business days advance
/// the count. When `want_log` is set, the returned log covers every visited
/// day, starting with the instruction date as day 0 ("Início"). The
/// roll-forward correction applies to the landing date only and is not
/// logged.
pub fn deadline_rigorous(
    start: NaiveDate,
    target_business_days: u32,
    suspensions: &[Suspension],
    holidays: &HolidaySet,
    want_log: bool,
) -> (NaiveDate, Option<Vec<DayLogEntry>>) {
    let mut current = start;
    let mut counted = 0u32;
    let mut log = want_log.then(|| {
        vec![DayLogEntry {
            date: start,
            counted: Some(0),
            class: DayClass::Start,
        }]
    });

    while counted < target_business_days {
        current += Duration::days(1);
        let class = if is_suspended(current, suspensions) {
            DayClass::Suspended
        } else if is_weekend(current) {
            DayClass::Weekend
        } else if holidays.is_holiday(current) {
            DayClass::Holiday
        } else {
            DayClass::Business
        };
        if class == DayClass::Business {
            counted += 1;
        }
        if let Some(log) = log.as_mut() {
            log.push(DayLogEntry {
                date: current,
                counted: (class == DayClass::Business).then_some(counted),
                class,
            });
        }
    }

    (roll_forward(current, holidays), log)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn holidays() -> HolidaySet {
        HolidaySet::for_range(2024, 2026)
    }

    #[test]
    fn test_weekday_is_business_day() {
        // 2024-01-03 is a Wednesday
        assert!(is_business_day(date(2024, 1, 3), &holidays()));
    }

    #[test]
    fn test_weekend_is_not_business_day() {
        // 2024-01-06 is a Saturday, 2024-01-07 a Sunday
        assert!(!is_business_day(date(2024, 1, 6), &holidays()));
        assert!(!is_business_day(date(2024, 1, 7), &holidays()));
    }

    #[test]
    fn test_holiday_is_not_business_day() {
        assert!(!is_business_day(date(2024, 1, 1), &holidays()));
        assert!(!is_business_day(date(2024, 3, 29), &holidays())); // Good Friday
    }

    #[test]
    fn test_is_suspended_any_interval() {
        let suspensions = vec![
            Suspension::new(date(2024, 2, 1), date(2024, 2, 5)).unwrap(),
            Suspension::new(date(2024, 3, 1), date(2024, 3, 10)).unwrap(),
        ];
        assert!(is_suspended(date(2024, 2, 3), &suspensions));
        assert!(is_suspended(date(2024, 3, 10), &suspensions));
        assert!(!is_suspended(date(2024, 2, 20), &suspensions));
        assert!(!is_suspended(date(2024, 2, 20), &[]));
    }

    #[test]
    fn test_add_zero_business_days_is_identity() {
        let start = date(2024, 1, 6); // Saturday: still returned unchanged
        assert_eq!(add_business_days(start, 0, &holidays()), start);
    }

    #[test]
    fn test_add_one_business_day() {
        assert_eq!(
            add_business_days(date(2024, 1, 2), 1, &holidays()),
            date(2024, 1, 3)
        );
    }

    #[test]
    fn test_add_business_days_skips_weekend() {
        // Friday + 1 business day lands on Monday
        assert_eq!(
            add_business_days(date(2024, 1, 5), 1, &holidays()),
            date(2024, 1, 8)
        );
    }

    #[test]
    fn test_add_business_days_skips_holiday() {
        // 2024-04-24 (Wed) + 1 skips Dia da Liberdade (Thu 25th) to Friday
        assert_eq!(
            add_business_days(date(2024, 4, 24), 1, &holidays()),
            date(2024, 4, 26)
        );
    }

    #[test]
    fn test_roll_forward_identity_on_business_day() {
        assert_eq!(
            roll_forward(date(2024, 1, 3), &holidays()),
            date(2024, 1, 3)
        );
    }

    #[test]
    fn test_roll_forward_over_weekend() {
        assert_eq!(
            roll_forward(date(2024, 1, 6), &holidays()),
            date(2024, 1, 8)
        );
    }

    #[test]
    fn test_roll_forward_over_holiday_into_weekend() {
        // Good Friday 2024 → Saturday → Sunday → Monday 2024-04-01
        assert_eq!(
            roll_forward(date(2024, 3, 29), &holidays()),
            date(2024, 4, 1)
        );
    }

    #[test]
    fn test_deadline_without_suspensions_matches_add() {
        let hol = holidays();
        let (deadline, log) = deadline_rigorous(date(2024, 1, 2), 9, &[], &hol, false);
        assert_eq!(deadline, add_business_days(date(2024, 1, 2), 9, &hol));
        assert_eq!(deadline, date(2024, 1, 15));
        assert!(log.is_none());
    }

    #[test]
    fn test_deadline_log_starts_at_day_zero() {
        let (_, log) = deadline_rigorous(date(2024, 1, 2), 3, &[], &holidays(), true);
        let log = log.unwrap();
        assert_eq!(log[0].date, date(2024, 1, 2));
        assert_eq!(log[0].class, DayClass::Start);
        assert_eq!(log[0].counted, Some(0));
    }

    #[test]
    fn test_deadline_log_counts_only_business_days() {
        // 9 business days from 2024-01-02 walk through 13 calendar days.
        let (deadline, log) = deadline_rigorous(date(2024, 1, 2), 9, &[], &holidays(), true);
        let log = log.unwrap();
        assert_eq!(log.len(), 14); // day 0 + 13 visited days
        assert_eq!(log.last().unwrap().date, deadline);
        assert_eq!(log.last().unwrap().counted, Some(9));
        let business_entries = log
            .iter()
            .filter(|e| e.class == DayClass::Business)
            .count();
        assert_eq!(business_entries, 9);
    }

    #[test]
    fn test_suspension_precedence_over_weekend() {
        // 2024-02-03 is a Saturday inside the suspension
        let suspensions = vec![Suspension::new(date(2024, 2, 1), date(2024, 2, 15)).unwrap()];
        let (_, log) = deadline_rigorous(date(2024, 1, 31), 15, &suspensions, &holidays(), true);
        let log = log.unwrap();
        let saturday = log
            .iter()
            .find(|e| e.date == date(2024, 2, 3))
            .expect("suspended Saturday must be visited");
        assert_eq!(saturday.class, DayClass::Suspended);
    }

    #[test]
    fn test_suspended_days_do_not_count() {
        let suspensions = vec![Suspension::new(date(2024, 1, 3), date(2024, 1, 12)).unwrap()];
        // First countable day after the suspension is Monday the 15th.
        let (deadline, _) = deadline_rigorous(date(2024, 1, 2), 1, &suspensions, &holidays(), false);
        assert_eq!(deadline, date(2024, 1, 15));
    }

    #[test]
    fn test_zero_target_rolls_start_forward() {
        // No walk happens; the correction still moves a Saturday start to
        // Monday, even though Monday sits inside a suspension. The
        // correction is suspension-blind by construction.
        let suspensions = vec![Suspension::new(date(2024, 2, 1), date(2024, 2, 15)).unwrap()];
        let (deadline, _) =
            deadline_rigorous(date(2024, 2, 3), 0, &suspensions, &holidays(), false);
        assert_eq!(deadline, date(2024, 2, 5));
        assert!(is_suspended(deadline, &suspensions));
    }

    #[test]
    fn test_zero_target_on_business_day_is_identity() {
        let (deadline, _) = deadline_rigorous(date(2024, 1, 3), 0, &[], &holidays(), false);
        assert_eq!(deadline, date(2024, 1, 3));
    }
}
