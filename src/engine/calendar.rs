//! Portuguese national-holiday calendar.
//!
//! Twelve holidays per year: ten fixed civil/religious dates plus two
//! moveable feasts derived from Easter Sunday (Good Friday at Easter − 2,
//! Corpus Christi at Easter + 60). Easter comes from the anonymous Gregorian
//! computus, valid for any Gregorian year.

use std::collections::HashSet;

use chrono::{Datelike, Duration, NaiveDate};

/// Fixed national holidays as (month, day).
const FIXED_HOLIDAYS: [(u32, u32); 10] = [
    (1, 1),   // Ano Novo
    (4, 25),  // Dia da Liberdade
    (5, 1),   // Dia do Trabalhador
    (6, 10),  // Dia de Portugal
    (8, 15),  // Assunção de Nossa Senhora
    (10, 5),  // Implantação da República
    (11, 1),  // Todos os Santos
    (12, 1),  // Restauração da Independência
    (12, 8),  // Imaculada Conceição
    (12, 25), // Natal
];

/// Easter Sunday for a Gregorian year (anonymous Gregorian computus).
///
/// Pure and total for years where the Gregorian calendar applies (≥ 1583).
pub fn easter_sunday(year: i32) -> NaiveDate {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    // The computus always lands in March or April.
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
        .unwrap_or_else(|| panic!("computus produced an invalid date for year {year}"))
}

/// The twelve national holidays of a single year.
pub fn holidays_for_year(year: i32) -> HashSet<NaiveDate> {
    let mut holidays: HashSet<NaiveDate> = FIXED_HOLIDAYS
        .iter()
        .filter_map(|&(month, day)| NaiveDate::from_ymd_opt(year, month, day))
        .collect();
    let easter = easter_sunday(year);
    holidays.insert(easter - Duration::days(2)); // Sexta-feira Santa
    holidays.insert(easter + Duration::days(60)); // Corpo de Deus
    holidays
}

/// Holiday membership over a known, inclusive year range.
///
/// Counting walks can roll well past the start year (150 business days is
/// over seven calendar months), so callers must provision the set for every
/// year a computation might touch: at least `[start.year, start.year + 2]`.
/// Membership checks assert coverage in debug builds so an under-provisioned
/// set fails tests instead of silently treating uncovered holidays as
/// ordinary business days.
#[derive(Debug, Clone)]
pub struct HolidaySet {
    dates: HashSet<NaiveDate>,
    first_year: i32,
    last_year: i32,
}

impl HolidaySet {
    /// Holidays of a single year.
    pub fn for_year(year: i32) -> Self {
        Self::for_range(year, year)
    }

    /// Union of holidays over the inclusive year range.
    pub fn for_range(first_year: i32, last_year: i32) -> Self {
        let (first_year, last_year) = if first_year <= last_year {
            (first_year, last_year)
        } else {
            (last_year, first_year)
        };
        let mut dates = HashSet::new();
        for year in first_year..=last_year {
            dates.extend(holidays_for_year(year));
        }
        Self {
            dates,
            first_year,
            last_year,
        }
    }

    /// Whether the date's year is inside the provisioned range.
    pub fn covers(&self, date: NaiveDate) -> bool {
        (self.first_year..=self.last_year).contains(&date.year())
    }

    /// Whether the date is a listed holiday.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        debug_assert!(
            self.covers(date),
            "holiday set covers {}..={} but was asked about {}",
            self.first_year,
            self.last_year,
            date
        );
        self.dates.contains(&date)
    }

    /// Number of provisioned holiday dates.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Inclusive year range the set was built for.
    pub fn year_range(&self) -> (i32, i32) {
        (self.first_year, self.last_year)
    }
}
