//! Calendar engine for the date picker.
//!
//! This module contains all calendar arithmetic the picker needs: parsing and
//! formatting canonical `YYYY/MM/DD` strings, converting between the Gregorian
//! and Jalali systems through a shared day count, clamping against the
//! configured range, and building month grids for the rendering layer. Every
//! function here is pure apart from [`today`], which reads the host clock.
//!
//! The free functions take the calendar system explicitly. [`CalendarEngine`]
//! binds them to the system a picker instance was configured with and adds the
//! presentation helpers (month names, grids, month navigation).

use std::cmp::Ordering;

use log::debug;
use shared::{CalendarDay, CalendarDayType, CalendarMonth, CalendarSystem};

use crate::domain::errors::{PickerError, PickerResult};
use crate::domain::gregorian;
use crate::domain::models::{self, CalendarDate, DateRange};

const GREGORIAN_MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

const JALALI_MONTH_NAMES: [&str; 12] = [
    "Farvardin", "Ordibehesht", "Khordad", "Tir", "Mordad", "Shahrivar",
    "Mehr", "Aban", "Azar", "Dey", "Bahman", "Esfand",
];

/// Today's date in `system`, from the host's local clock
pub fn today(system: CalendarSystem) -> PickerResult<CalendarDate> {
    let (year, month, day) = gregorian::today();
    let date = CalendarDate::new(year, month, day, CalendarSystem::Gregorian)?;
    convert(date, system)
}

/// Parse a canonical `YYYY/MM/DD` string in the given system.
///
/// Surrounding whitespace is ignored; anything else that is not exactly four,
/// two and two ASCII digits separated by `/` is an `InvalidFormat`.
pub fn parse(text: &str, system: CalendarSystem) -> PickerResult<CalendarDate> {
    let invalid = || PickerError::InvalidFormat(text.to_string());

    let parts: Vec<&str> = text.trim().split('/').collect();
    if parts.len() != 3 {
        return Err(invalid());
    }
    for (part, width) in parts.iter().zip([4, 2, 2]) {
        if part.len() != width || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
    }

    let year: i32 = parts[0].parse().map_err(|_| invalid())?;
    let month: u32 = parts[1].parse().map_err(|_| invalid())?;
    let day: u32 = parts[2].parse().map_err(|_| invalid())?;
    CalendarDate::new(year, month, day, system)
}

/// Canonical `YYYY/MM/DD` form of a date, in the date's own system
pub fn format(date: &CalendarDate) -> String {
    date.to_string()
}

/// The date in `target` denoting the same absolute day
pub fn convert(date: CalendarDate, target: CalendarSystem) -> PickerResult<CalendarDate> {
    if date.system() == target {
        return Ok(date);
    }
    CalendarDate::from_ordinal(date.ordinal(), target)
}

pub fn days_in_month(year: i32, month: u32, system: CalendarSystem) -> u32 {
    models::days_in_month(year, month, system)
}

pub fn is_leap_year(year: i32, system: CalendarSystem) -> bool {
    models::is_leap_year(year, system)
}

/// `date` if it lies inside `range`, otherwise the nearer bound
pub fn clamp(date: CalendarDate, range: &DateRange) -> CalendarDate {
    if let Some(min) = range.minimum() {
        if date.cmp_day(&min) == Ordering::Less {
            return min;
        }
    }
    if let Some(max) = range.maximum() {
        if date.cmp_day(&max) == Ordering::Greater {
            return max;
        }
    }
    date
}

/// Total order by absolute day; the calendar system tag is ignored
pub fn compare(a: &CalendarDate, b: &CalendarDate) -> Ordering {
    a.cmp_day(b)
}

/// Calendar engine bound to one calendar system
#[derive(Debug, Clone)]
pub struct CalendarEngine {
    system: CalendarSystem,
    /// Replacement month names; validated to twelve entries by the caller
    month_names: Option<Vec<String>>,
}

impl CalendarEngine {
    /// Create a new engine for `system`
    pub fn new(system: CalendarSystem) -> Self {
        Self { system, month_names: None }
    }

    /// Create an engine that labels months with `names` (January/Farvardin first)
    pub fn with_month_names(system: CalendarSystem, names: Vec<String>) -> Self {
        Self { system, month_names: Some(names) }
    }

    pub fn system(&self) -> CalendarSystem {
        self.system
    }

    pub fn today(&self) -> PickerResult<CalendarDate> {
        today(self.system)
    }

    /// Parse a canonical string in this engine's system
    pub fn parse(&self, text: &str) -> PickerResult<CalendarDate> {
        parse(text, self.system)
    }

    /// Format a date after bringing it into this engine's system
    pub fn format(&self, date: &CalendarDate) -> PickerResult<String> {
        Ok(format(&self.localize(*date)?))
    }

    /// Convert `date` into this engine's system
    pub fn localize(&self, date: CalendarDate) -> PickerResult<CalendarDate> {
        convert(date, self.system)
    }

    pub fn days_in_month(&self, year: i32, month: u32) -> u32 {
        days_in_month(year, month, self.system)
    }

    pub fn is_leap_year(&self, year: i32) -> bool {
        is_leap_year(year, self.system)
    }

    /// Weekday of the first grid column: Sunday for Gregorian, Saturday for Jalali
    pub fn first_day_of_week(&self) -> u32 {
        match self.system {
            CalendarSystem::Gregorian => 0,
            CalendarSystem::Jalali => 6,
        }
    }

    /// Number of padding cells before day 1 of the month
    pub fn first_day_of_month(&self, year: i32, month: u32) -> PickerResult<u32> {
        let first = CalendarDate::new(year, month, 1, self.system)?;
        Ok((first.weekday() + 7 - self.first_day_of_week()) % 7)
    }

    /// Get the human-readable name for a month number
    pub fn month_name(&self, month: u32) -> &str {
        if !(1..=12).contains(&month) {
            return "Invalid Month";
        }
        let index = (month - 1) as usize;
        match (&self.month_names, self.system) {
            (Some(names), _) => names.get(index).map(String::as_str).unwrap_or("Invalid Month"),
            (None, CalendarSystem::Gregorian) => GREGORIAN_MONTH_NAMES[index],
            (None, CalendarSystem::Jalali) => JALALI_MONTH_NAMES[index],
        }
    }

    /// Generate the grid for one month, disabling days outside `range`
    pub fn month_grid(&self, year: i32, month: u32, range: &DateRange) -> PickerResult<CalendarMonth> {
        let padding = self.first_day_of_month(year, month)?;
        let days_in_month = self.days_in_month(year, month);
        debug!("🗓️ Building grid for {:04}/{:02} ({}): {} padding, {} days", year, month, self.system, padding, days_in_month);

        let mut days = Vec::with_capacity((padding + days_in_month) as usize);
        for _ in 0..padding {
            days.push(CalendarDay {
                day: 0,
                date: None,
                day_type: CalendarDayType::PaddingBefore,
                disabled: true,
            });
        }
        for day in 1..=days_in_month {
            let date = CalendarDate::new(year, month, day, self.system)?;
            days.push(CalendarDay {
                day,
                date: Some(format(&date)),
                day_type: CalendarDayType::MonthDay,
                disabled: !range.contains(&date),
            });
        }

        Ok(CalendarMonth {
            year,
            month,
            month_name: self.month_name(month).to_string(),
            first_day_of_week: self.first_day_of_week(),
            days,
        })
    }

    /// Move `date` by `delta` months, keeping the day where the target month allows
    pub fn shift_month(&self, date: CalendarDate, delta: i32) -> PickerResult<CalendarDate> {
        let date = self.localize(date)?;
        let total = date.year() as i64 * 12 + (date.month() as i64 - 1) + delta as i64;
        let year = i32::try_from(total.div_euclid(12))
            .map_err(|_| PickerError::UnsupportedEra { year: date.year(), system: self.system })?;
        let month = (total.rem_euclid(12) + 1) as u32;
        if !models::is_supported_year(year, self.system) {
            return Err(PickerError::UnsupportedEra { year, system: self.system });
        }
        let day = date.day().min(self.days_in_month(year, month));
        CalendarDate::new(year, month, day, self.system)
    }
}
