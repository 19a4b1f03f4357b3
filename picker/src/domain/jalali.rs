//! Jalali (Solar Hijri) calendar arithmetic.
//!
//! Leap years follow the 33-year cycle arithmetic anchored on a table of
//! break years. The table covers Jalali years -61..3177; this module only
//! accepts years from 1 (the era epoch) to 3177. Day counts are Julian Day
//! Numbers, shared with the Gregorian module.

use crate::domain::gregorian;

/// Years at which the 33-year leap cycle is re-anchored
const BREAKS: [i32; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181, 1210, 1635, 2060, 2097, 2192, 2262, 2324,
    2394, 2456, 3178,
];

/// First supported year
pub const MIN_YEAR: i32 = 1;
/// Last year covered by the break table
pub const MAX_YEAR: i32 = 3177;

/// Offset between Jalali and Gregorian year numbers at Nowruz
const GREGORIAN_YEAR_OFFSET: i32 = 621;

struct YearInfo {
    /// Years since the last leap year; 0 means this year is leap
    leap: i32,
    /// Gregorian year in which this Jalali year begins
    gregorian_year: i32,
    /// Day of March on which the year begins
    march_day: i32,
}

fn year_info(year: i32) -> Option<YearInfo> {
    let last = BREAKS[BREAKS.len() - 1];
    if year < BREAKS[0] || year >= last {
        return None;
    }

    let gregorian_year = year + GREGORIAN_YEAR_OFFSET;
    let mut leap_j = -14;
    let mut previous = BREAKS[0];
    let mut jump = 0;
    for &next in &BREAKS[1..] {
        jump = next - previous;
        if year < next {
            break;
        }
        leap_j += jump / 33 * 8 + (jump % 33) / 4;
        previous = next;
    }

    let mut n = year - previous;
    leap_j += n / 33 * 8 + (n % 33 + 3) / 4;
    if jump % 33 == 4 && jump - n == 4 {
        leap_j += 1;
    }

    let leap_g = gregorian_year / 4 - (gregorian_year / 100 + 1) * 3 / 4 - 150;
    let march_day = 20 + leap_j - leap_g;

    if jump - n < 6 {
        n = n - jump + (jump + 4) / 33 * 33;
    }
    let mut leap = ((n + 1) % 33 - 1) % 4;
    if leap == -1 {
        leap = 4;
    }

    Some(YearInfo { leap, gregorian_year, march_day })
}

/// Whether `year` lies inside the supported span
pub fn is_supported_year(year: i32) -> bool {
    (MIN_YEAR..=MAX_YEAR).contains(&year)
}

/// Check if a Jalali year is a leap year (Esfand has 30 days)
pub fn is_leap_year(year: i32) -> bool {
    year_info(year).map(|info| info.leap == 0).unwrap_or(false)
}

/// Farvardin..Shahrivar have 31 days, Mehr..Bahman 30, Esfand 29 or 30.
/// Returns 0 for a month outside 1..=12.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1..=6 => 31,
        7..=11 => 30,
        12 => if is_leap_year(year) { 30 } else { 29 },
        _ => 0,
    }
}

fn days_in_year(year: i32) -> i64 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Julian Day Number of 1 Farvardin of `year`
fn nowruz(year: i32) -> Option<i64> {
    let info = year_info(year)?;
    gregorian::to_ordinal(info.gregorian_year, 3, info.march_day as u32)
}

/// Julian Day Number of a Jalali date. The caller validates month and day.
pub fn to_ordinal(year: i32, month: u32, day: u32) -> Option<i64> {
    let nowruz = nowruz(year)?;
    let month = month as i64;
    Some(nowruz + (month - 1) * 31 - month / 7 * (month - 7) + day as i64 - 1)
}

/// Jalali (year, month, day) for a Julian Day Number
pub fn from_ordinal(ordinal: i64) -> Option<(i32, u32, u32)> {
    let (gregorian_year, _, _) = gregorian::from_ordinal(ordinal)?;
    let mut year = gregorian_year - GREGORIAN_YEAR_OFFSET;

    // Days before Nowruz belong to the year that began in the previous March.
    // Past the end of the table there is no Nowruz to compare against.
    let mut start = nowruz(year);
    if start.map_or(true, |start| ordinal < start) {
        year -= 1;
        start = nowruz(year);
    }
    let offset = ordinal - start?;
    if offset >= days_in_year(year) {
        return None;
    }

    if offset <= 185 {
        return Some((year, (1 + offset / 31) as u32, (offset % 31 + 1) as u32));
    }
    let offset = offset - 186;
    Some((year, (7 + offset / 30) as u32, (offset % 30 + 1) as u32))
}
