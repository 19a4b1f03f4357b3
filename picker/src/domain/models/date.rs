use std::cmp::Ordering;
use std::fmt;

use shared::CalendarSystem;

use crate::domain::errors::{PickerError, PickerResult};
use crate::domain::{gregorian, jalali};

/// An immutable civil date tagged with the calendar system it is expressed in.
///
/// Construction validates the day against the month length of that system and
/// caches the absolute day number (JDN), so equal days in different systems
/// compare equal through [`CalendarDate::cmp_day`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
    system: CalendarSystem,
    ordinal: i64,
}

impl CalendarDate {
    /// Create a validated date
    pub fn new(year: i32, month: u32, day: u32, system: CalendarSystem) -> PickerResult<Self> {
        if !is_supported_year(year, system) {
            return Err(PickerError::UnsupportedEra { year, system });
        }
        if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month, system) {
            return Err(PickerError::InvalidDate { year, month, day });
        }

        let ordinal = match system {
            CalendarSystem::Gregorian => gregorian::to_ordinal(year, month, day),
            CalendarSystem::Jalali => jalali::to_ordinal(year, month, day),
        }
        .ok_or(PickerError::InvalidDate { year, month, day })?;

        Ok(Self { year, month, day, system, ordinal })
    }

    /// Build the date in `system` that falls on the given absolute day
    pub fn from_ordinal(ordinal: i64, system: CalendarSystem) -> PickerResult<Self> {
        let ymd = match system {
            CalendarSystem::Gregorian => gregorian::from_ordinal(ordinal),
            CalendarSystem::Jalali => jalali::from_ordinal(ordinal),
        };
        let (year, month, day) = ymd.ok_or(PickerError::UnsupportedEra {
            year: approximate_year(ordinal, system),
            system,
        })?;
        Self::new(year, month, day, system)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month, 1-based
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn system(&self) -> CalendarSystem {
        self.system
    }

    /// Julian Day Number of this date
    pub fn ordinal(&self) -> i64 {
        self.ordinal
    }

    /// (year, month) pair, used to detect month changes
    pub fn year_month(&self) -> (i32, u32) {
        (self.year, self.month)
    }

    /// Order by absolute day, ignoring the calendar system tag
    pub fn cmp_day(&self, other: &CalendarDate) -> Ordering {
        self.ordinal.cmp(&other.ordinal)
    }

    /// Day of week, 0 = Sunday .. 6 = Saturday
    pub fn weekday(&self) -> u32 {
        (self.ordinal + 1).rem_euclid(7) as u32
    }
}

/// Canonical `YYYY/MM/DD` form
impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}/{:02}/{:02}", self.year, self.month, self.day)
    }
}

/// Whether `year` lies inside the span a system supports
pub fn is_supported_year(year: i32, system: CalendarSystem) -> bool {
    match system {
        CalendarSystem::Gregorian => (gregorian::MIN_YEAR..=gregorian::MAX_YEAR).contains(&year),
        CalendarSystem::Jalali => jalali::is_supported_year(year),
    }
}

pub fn is_leap_year(year: i32, system: CalendarSystem) -> bool {
    match system {
        CalendarSystem::Gregorian => gregorian::is_leap_year(year),
        CalendarSystem::Jalali => jalali::is_leap_year(year),
    }
}

pub fn days_in_month(year: i32, month: u32, system: CalendarSystem) -> u32 {
    match system {
        CalendarSystem::Gregorian => gregorian::days_in_month(year, month),
        CalendarSystem::Jalali => jalali::days_in_month(year, month),
    }
}

// Only used to label UnsupportedEra errors for day numbers with no date.
fn approximate_year(ordinal: i64, system: CalendarSystem) -> i32 {
    let gregorian_year = ((ordinal - 1_721_426) as f64 / 365.2425).floor() as i32 + 1;
    match system {
        CalendarSystem::Gregorian => gregorian_year,
        CalendarSystem::Jalali => gregorian_year - 621,
    }
}
