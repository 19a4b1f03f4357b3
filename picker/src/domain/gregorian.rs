//! Gregorian calendar rules, backed by chrono.
//!
//! Ordinals are Julian Day Numbers so that both calendar systems share one
//! absolute day count.

use chrono::{Datelike, Local, NaiveDate};

/// JDN of the day before 0001/01/01 (chrono's day 0 from the common era)
const JDN_CE_OFFSET: i64 = 1_721_425;

/// First supported year (the common era epoch)
pub const MIN_YEAR: i32 = 1;
/// Last year that still fits the four-digit canonical form
pub const MAX_YEAR: i32 = 9999;

/// Check if a year is a leap year
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Get the number of days in a given month and year, 0 for a month outside 1..=12
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => if is_leap_year(year) { 29 } else { 28 },
        _ => 0,
    }
}

/// Julian Day Number of a Gregorian date, `None` if the date does not exist
pub fn to_ordinal(year: i32, month: u32, day: u32) -> Option<i64> {
    NaiveDate::from_ymd_opt(year, month, day)
        .map(|date| date.num_days_from_ce() as i64 + JDN_CE_OFFSET)
}

/// Gregorian (year, month, day) for a Julian Day Number
pub fn from_ordinal(ordinal: i64) -> Option<(i32, u32, u32)> {
    let days = i32::try_from(ordinal - JDN_CE_OFFSET).ok()?;
    NaiveDate::from_num_days_from_ce_opt(days).map(|date| (date.year(), date.month(), date.day()))
}

/// Today's date from the host's local clock
pub fn today() -> (i32, u32, u32) {
    let now = Local::now();
    (now.year(), now.month(), now.day())
}
