//! Types shared between the date picker core and its host.
//!
//! Everything in this crate crosses the boundary as plain data: dates travel as
//! canonical `YYYY/MM/DD` strings, configuration uses the host's camelCase
//! property names, and intents/notifications are serde-tagged enums so a host
//! can script or log them as JSON.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Calendar systems supported by the picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CalendarSystem {
    /// Proleptic Gregorian calendar
    #[default]
    Gregorian,
    /// Solar Hijri (Jalali) calendar
    Jalali,
}

impl fmt::Display for CalendarSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarSystem::Gregorian => write!(f, "gregorian"),
            CalendarSystem::Jalali => write!(f, "jalali"),
        }
    }
}

impl CalendarSystem {
    /// The other supported system
    pub fn other(self) -> Self {
        match self {
            CalendarSystem::Gregorian => CalendarSystem::Jalali,
            CalendarSystem::Jalali => CalendarSystem::Gregorian,
        }
    }
}

/// Which body the picker renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum DisplayMode {
    /// Calendar grid, month/year selector and time selector
    #[default]
    Datepicker,
    /// Calendar grid and month/year selector
    Calendar,
    /// Month/year selector only
    MonthYear,
    /// Time selector only
    Time,
}

/// Sub-views shown by a display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModePanels {
    pub calendar: bool,
    pub month_selector: bool,
    pub time_selector: bool,
}

impl DisplayMode {
    /// Sub-views this mode places in the picker body
    pub fn panels(self) -> ModePanels {
        match self {
            DisplayMode::Datepicker => ModePanels { calendar: true, month_selector: true, time_selector: true },
            DisplayMode::Calendar => ModePanels { calendar: true, month_selector: true, time_selector: false },
            DisplayMode::MonthYear => ModePanels { calendar: false, month_selector: true, time_selector: false },
            DisplayMode::Time => ModePanels { calendar: false, month_selector: false, time_selector: true },
        }
    }
}

/// Marker accepted for `reverse: "unset"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeriveFromCalendar {
    #[serde(rename = "unset")]
    Unset,
}

/// Right-to-left layout flag, either fixed or derived from the calendar system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReverseLayout {
    Fixed(bool),
    Derive(DeriveFromCalendar),
}

impl Default for ReverseLayout {
    fn default() -> Self {
        ReverseLayout::Derive(DeriveFromCalendar::Unset)
    }
}

impl ReverseLayout {
    /// Resolve the flag; Jalali renders reversed unless told otherwise
    pub fn resolve(self, system: CalendarSystem) -> bool {
        match self {
            ReverseLayout::Fixed(value) => value,
            ReverseLayout::Derive(_) => system != CalendarSystem::Gregorian,
        }
    }
}

/// Construction configuration as the host supplies it.
///
/// Empty date strings mean "unset", matching hosts that default every date
/// property to `""`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PickerConfigRequest {
    pub current: Option<String>,
    pub selected: Option<String>,
    pub minimum_date: Option<String>,
    pub maximum_date: Option<String>,
    pub selector_starting_year: i32,
    pub selector_ending_year: i32,
    pub disable_date_change: bool,
    pub calendar_system: CalendarSystem,
    pub mode: DisplayMode,
    pub minute_interval: u32,
    pub reverse: ReverseLayout,
    /// Optional replacement for the twelve month names
    pub month_names: Option<Vec<String>>,
}

impl Default for PickerConfigRequest {
    fn default() -> Self {
        Self {
            current: None,
            selected: None,
            minimum_date: None,
            maximum_date: None,
            selector_starting_year: 0,
            selector_ending_year: 3000,
            disable_date_change: false,
            calendar_system: CalendarSystem::Gregorian,
            mode: DisplayMode::Datepicker,
            minute_interval: 5,
            reverse: ReverseLayout::default(),
            month_names: None,
        }
    }
}

/// Hour and minute as plain numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOfDayDto {
    pub hour: u32,
    pub minute: u32,
}

/// Intents the rendering layer can send to the picker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum IntentRequest {
    SelectDate { date: String },
    ChangeActiveDate { date: String },
    ShiftMonth { delta: i32 },
    ToggleMonthPanel,
    ToggleTimePanel,
    SetTime { hour: u32, minute: u32 },
}

/// Notifications delivered to the host after a committed transition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum PickerNotification {
    SelectedChange { date: String },
    MonthYearChange { year: i32, month: u32 },
    TimeChange { hour: u32, minute: u32 },
    DateChange { date: String },
}

/// Type of calendar day for explicit rendering logic
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CalendarDayType {
    /// Empty padding cell before the first day of the month
    PaddingBefore,
    /// Actual day within the month
    MonthDay,
}

/// A single cell of the calendar grid
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarDay {
    /// Day of month, 0 for padding cells
    pub day: u32,
    /// Canonical date of the cell, absent for padding cells
    pub date: Option<String>,
    pub day_type: CalendarDayType,
    /// Outside the configured date range
    pub disabled: bool,
}

/// One month of the calendar grid
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
    pub month_name: String,
    /// Weekday of the first grid column, 0 = Sunday .. 6 = Saturday
    pub first_day_of_week: u32,
    pub days: Vec<CalendarDay>,
}

/// Snapshot of the interaction state in canonical form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionSummary {
    pub active_date: String,
    pub selected_date: Option<String>,
    pub selected_time: Option<TimeOfDayDto>,
    pub month_open: bool,
    pub time_open: bool,
    pub reverse: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_from_empty_object() {
        let config: PickerConfigRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(config, PickerConfigRequest::default());
        assert_eq!(config.minute_interval, 5);
        assert_eq!(config.selector_ending_year, 3000);
        assert_eq!(config.mode, DisplayMode::Datepicker);
    }

    #[test]
    fn test_config_camel_case_fields() {
        let json = r#"{
            "minimumDate": "2024/01/01",
            "maximumDate": "2024/12/31",
            "calendarSystem": "jalali",
            "mode": "monthYear",
            "minuteInterval": 15,
            "disableDateChange": true
        }"#;
        let config: PickerConfigRequest = serde_json::from_str(json).unwrap();
        assert_eq!(config.minimum_date.as_deref(), Some("2024/01/01"));
        assert_eq!(config.calendar_system, CalendarSystem::Jalali);
        assert_eq!(config.mode, DisplayMode::MonthYear);
        assert_eq!(config.minute_interval, 15);
        assert!(config.disable_date_change);
    }

    #[test]
    fn test_reverse_layout_forms() {
        let fixed: ReverseLayout = serde_json::from_str("true").unwrap();
        assert_eq!(fixed, ReverseLayout::Fixed(true));
        let derived: ReverseLayout = serde_json::from_str("\"unset\"").unwrap();
        assert_eq!(derived, ReverseLayout::default());
        assert!(serde_json::from_str::<ReverseLayout>("\"sideways\"").is_err());

        assert!(derived.resolve(CalendarSystem::Jalali));
        assert!(!derived.resolve(CalendarSystem::Gregorian));
        assert!(!ReverseLayout::Fixed(false).resolve(CalendarSystem::Jalali));
    }

    #[test]
    fn test_intent_and_notification_tags() {
        let intent: IntentRequest =
            serde_json::from_str(r#"{"type":"setTime","hour":10,"minute":15}"#).unwrap();
        assert_eq!(intent, IntentRequest::SetTime { hour: 10, minute: 15 });
        let toggle: IntentRequest = serde_json::from_str(r#"{"type":"toggleMonthPanel"}"#).unwrap();
        assert_eq!(toggle, IntentRequest::ToggleMonthPanel);

        let json = serde_json::to_string(&PickerNotification::MonthYearChange { year: 2024, month: 3 }).unwrap();
        assert_eq!(json, r#"{"event":"monthYearChange","year":2024,"month":3}"#);
    }

    #[test]
    fn test_mode_panels() {
        assert!(DisplayMode::Datepicker.panels().time_selector);
        assert!(!DisplayMode::Calendar.panels().time_selector);
        assert!(!DisplayMode::MonthYear.panels().calendar);
        assert_eq!(
            DisplayMode::Time.panels(),
            ModePanels { calendar: false, month_selector: false, time_selector: true }
        );
    }
}
