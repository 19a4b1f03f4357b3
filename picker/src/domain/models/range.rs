use std::cmp::Ordering;

use shared::CalendarSystem;

use crate::domain::models::date::{is_supported_year, CalendarDate};

/// Inclusive bounds on selectable dates; either side may be open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    minimum: Option<CalendarDate>,
    maximum: Option<CalendarDate>,
}

impl DateRange {
    /// `None` when both bounds are set and `minimum` is after `maximum`
    pub fn new(minimum: Option<CalendarDate>, maximum: Option<CalendarDate>) -> Option<Self> {
        if let (Some(min), Some(max)) = (minimum, maximum) {
            if min.cmp_day(&max) == Ordering::Greater {
                return None;
            }
        }
        Some(Self { minimum, maximum })
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn minimum(&self) -> Option<CalendarDate> {
        self.minimum
    }

    pub fn maximum(&self) -> Option<CalendarDate> {
        self.maximum
    }

    pub fn contains(&self, date: &CalendarDate) -> bool {
        let above_min = self.minimum.map_or(true, |min| date.cmp_day(&min) != Ordering::Less);
        let below_max = self.maximum.map_or(true, |max| date.cmp_day(&max) != Ordering::Greater);
        above_min && below_max
    }
}

/// Inclusive year bounds for the year selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearWindow {
    start_year: i32,
    end_year: i32,
}

impl YearWindow {
    /// `None` if `start_year > end_year`
    pub fn new(start_year: i32, end_year: i32) -> Option<Self> {
        (start_year <= end_year).then_some(Self { start_year, end_year })
    }

    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    pub fn end_year(&self) -> i32 {
        self.end_year
    }

    pub fn contains(&self, year: i32) -> bool {
        (self.start_year..=self.end_year).contains(&year)
    }

    /// Years offered by the selector: the window narrowed to the years the
    /// date range can reach and `system` can represent
    pub fn selectable_years(&self, range: &DateRange, system: CalendarSystem) -> Vec<i32> {
        let start = range.minimum().map_or(self.start_year, |min| self.start_year.max(min.year()));
        let end = range.maximum().map_or(self.end_year, |max| self.end_year.min(max.year()));
        (start..=end).filter(|&year| is_supported_year(year, system)).collect()
    }
}

impl Default for YearWindow {
    fn default() -> Self {
        Self { start_year: 0, end_year: 3000 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::new(year, month, day, CalendarSystem::Gregorian).unwrap()
    }

    #[test]
    fn test_range_rejects_inverted_bounds() {
        assert!(DateRange::new(Some(date(2024, 12, 31)), Some(date(2024, 1, 1))).is_none());
        assert!(DateRange::new(Some(date(2024, 1, 1)), Some(date(2024, 1, 1))).is_some());
    }

    #[test]
    fn test_range_contains_is_inclusive() {
        let range = DateRange::new(Some(date(2024, 1, 1)), Some(date(2024, 12, 31))).unwrap();
        assert!(range.contains(&date(2024, 1, 1)));
        assert!(range.contains(&date(2024, 12, 31)));
        assert!(!range.contains(&date(2023, 12, 31)));
        assert!(!range.contains(&date(2025, 1, 1)));
        assert!(DateRange::unbounded().contains(&date(1, 1, 1)));
    }

    #[test]
    fn test_range_compares_across_systems() {
        let range = DateRange::new(Some(date(2024, 3, 20)), None).unwrap();
        let nowruz = CalendarDate::new(1403, 1, 1, CalendarSystem::Jalali).unwrap();
        let day_before = CalendarDate::new(1402, 12, 29, CalendarSystem::Jalali).unwrap();
        assert!(range.contains(&nowruz));
        assert!(!range.contains(&day_before));
    }

    #[test]
    fn test_year_window() {
        assert!(YearWindow::new(2030, 2020).is_none());
        let window = YearWindow::new(2020, 2030).unwrap();
        assert!(window.contains(2025));
        assert!(!window.contains(2031));

        let range = DateRange::new(Some(date(2022, 6, 1)), Some(date(2040, 1, 1))).unwrap();
        assert_eq!(window.selectable_years(&range, CalendarSystem::Gregorian), (2022..=2030).collect::<Vec<_>>());
        assert_eq!(window.selectable_years(&DateRange::unbounded(), CalendarSystem::Gregorian).len(), 11);
    }

    #[test]
    fn test_selectable_years_stay_inside_calendar_span() {
        let unbounded = DateRange::unbounded();
        let years = YearWindow::default().selectable_years(&unbounded, CalendarSystem::Gregorian);
        assert_eq!(years.first(), Some(&1));
        assert_eq!(years.last(), Some(&3000));

        let wide = YearWindow::new(-5, 12_000).unwrap();
        for system in [CalendarSystem::Gregorian, CalendarSystem::Jalali] {
            let years = wide.selectable_years(&unbounded, system);
            for year in years {
                assert!(CalendarDate::new(year, 1, 1, system).is_ok(), "{year} ({system})");
            }
        }
        assert_eq!(wide.selectable_years(&unbounded, CalendarSystem::Jalali).last(), Some(&3177));
        assert_eq!(wide.selectable_years(&unbounded, CalendarSystem::Gregorian).last(), Some(&9999));
    }
}
