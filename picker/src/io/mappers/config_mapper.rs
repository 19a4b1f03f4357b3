use shared::PickerConfigRequest;

use crate::domain::calendar::CalendarEngine;
use crate::domain::errors::{PickerError, PickerResult};
use crate::domain::models::{CalendarDate, DateRange, MinuteInterval, YearWindow};
use crate::domain::settings::PickerSettings;

pub struct ConfigMapper;

impl ConfigMapper {
    /// Convert the host configuration into validated domain settings.
    ///
    /// Every problem is reported as `PickerError::Configuration`, naming the
    /// offending property.
    pub fn to_settings(request: PickerConfigRequest) -> PickerResult<PickerSettings> {
        let minute_interval = MinuteInterval::new(request.minute_interval).ok_or_else(|| {
            PickerError::Configuration(format!(
                "minuteInterval must be one of {:?}, got {}",
                MinuteInterval::ALLOWED,
                request.minute_interval
            ))
        })?;

        let engine = match request.month_names {
            Some(names) if names.len() == 12 => CalendarEngine::with_month_names(request.calendar_system, names),
            Some(names) => {
                return Err(PickerError::Configuration(format!(
                    "monthNames must list 12 months, got {}",
                    names.len()
                )))
            }
            None => CalendarEngine::new(request.calendar_system),
        };

        let current = Self::parse_optional(&engine, "current", request.current.as_deref())?;
        let selected = Self::parse_optional(&engine, "selected", request.selected.as_deref())?;
        let minimum = Self::parse_optional(&engine, "minimumDate", request.minimum_date.as_deref())?;
        let maximum = Self::parse_optional(&engine, "maximumDate", request.maximum_date.as_deref())?;

        let range = DateRange::new(minimum, maximum).ok_or_else(|| {
            PickerError::Configuration("minimumDate must not be after maximumDate".to_string())
        })?;
        let year_window = YearWindow::new(request.selector_starting_year, request.selector_ending_year)
            .ok_or_else(|| {
                PickerError::Configuration(format!(
                    "selectorStartingYear {} is after selectorEndingYear {}",
                    request.selector_starting_year, request.selector_ending_year
                ))
            })?;

        Ok(PickerSettings {
            reverse: request.reverse.resolve(engine.system()),
            engine,
            range,
            year_window,
            minute_interval,
            mode: request.mode,
            disable_date_change: request.disable_date_change,
            current,
            selected,
        })
    }

    /// Empty and missing strings are both "unset"
    fn parse_optional(
        engine: &CalendarEngine,
        property: &str,
        text: Option<&str>,
    ) -> PickerResult<Option<CalendarDate>> {
        match text.map(str::trim) {
            None | Some("") => Ok(None),
            Some(text) => engine
                .parse(text)
                .map(Some)
                .map_err(|e| PickerError::Configuration(format!("{}: {}", property, e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{CalendarSystem, DisplayMode, ReverseLayout};

    #[test]
    fn test_defaults() {
        let settings = ConfigMapper::to_settings(PickerConfigRequest::default()).unwrap();
        assert_eq!(settings.engine.system(), CalendarSystem::Gregorian);
        assert_eq!(settings.range, DateRange::unbounded());
        assert_eq!(settings.year_window, YearWindow::new(0, 3000).unwrap());
        assert_eq!(settings.minute_interval.minutes(), 5);
        assert_eq!(settings.mode, DisplayMode::Datepicker);
        assert!(!settings.reverse);
        assert!(settings.current.is_none());
    }

    #[test]
    fn test_empty_strings_are_unset() {
        let request = PickerConfigRequest {
            current: Some(String::new()),
            selected: Some("  ".to_string()),
            ..Default::default()
        };
        let settings = ConfigMapper::to_settings(request).unwrap();
        assert!(settings.current.is_none());
        assert!(settings.selected.is_none());
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let request = PickerConfigRequest {
            minimum_date: Some("2024/12/31".to_string()),
            maximum_date: Some("2024/01/01".to_string()),
            ..Default::default()
        };
        assert!(matches!(ConfigMapper::to_settings(request), Err(PickerError::Configuration(_))));
    }

    #[test]
    fn test_inverted_year_window_is_rejected() {
        let request = PickerConfigRequest {
            selector_starting_year: 2030,
            selector_ending_year: 2020,
            ..Default::default()
        };
        assert!(matches!(ConfigMapper::to_settings(request), Err(PickerError::Configuration(_))));
    }

    #[test]
    fn test_bad_interval_and_month_names() {
        let interval = PickerConfigRequest { minute_interval: 7, ..Default::default() };
        assert!(matches!(ConfigMapper::to_settings(interval), Err(PickerError::Configuration(_))));

        let names = PickerConfigRequest { month_names: Some(vec!["Jan".to_string()]), ..Default::default() };
        assert!(matches!(ConfigMapper::to_settings(names), Err(PickerError::Configuration(_))));
    }

    #[test]
    fn test_unparseable_date_names_property() {
        let request = PickerConfigRequest { maximum_date: Some("2024-12-31".to_string()), ..Default::default() };
        match ConfigMapper::to_settings(request) {
            Err(PickerError::Configuration(message)) => assert!(message.starts_with("maximumDate:")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_jalali_dates_and_reverse_layout() {
        let request = PickerConfigRequest {
            calendar_system: CalendarSystem::Jalali,
            selected: Some("1403/12/30".to_string()),
            ..Default::default()
        };
        let settings = ConfigMapper::to_settings(request).unwrap();
        assert!(settings.reverse);
        assert_eq!(settings.selected.map(|d| d.system()), Some(CalendarSystem::Jalali));

        let fixed = PickerConfigRequest {
            calendar_system: CalendarSystem::Jalali,
            reverse: ReverseLayout::Fixed(false),
            ..Default::default()
        };
        assert!(!ConfigMapper::to_settings(fixed).unwrap().reverse);
    }
}
