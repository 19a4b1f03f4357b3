//! Intents accepted by the interaction store and the events it emits.
//!
//! The rendering layer maps user gestures to an [`Intent`]; the store answers
//! with the [`PickerEvent`]s its transition produced. Both carry domain values;
//! the io layer converts them to and from the canonical-string DTOs in `shared`.

use crate::domain::models::{CalendarDate, TimeOfDay};

/// A request to change the session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Flip the month/year panel, leaving the time panel alone
    ToggleMonth,
    /// Flip the time panel, leaving the month/year panel alone
    ToggleTime,
    /// Show a different date (and therefore month) in the grid
    SetActiveDate(CalendarDate),
    /// Commit a selection
    SetSelectedDate(CalendarDate),
    /// Commit a time of day
    SetTime(TimeOfDay),
    /// Move the grid by a number of months
    ShiftMonth(i32),
}

/// Notification produced by a committed transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerEvent {
    MonthYearChanged { year: i32, month: u32 },
    DateChanged(CalendarDate),
    SelectionChanged(CalendarDate),
    TimeChanged(TimeOfDay),
}

impl PickerEvent {
    /// Delivery rank within one transition
    pub(crate) fn rank(&self) -> u8 {
        match self {
            PickerEvent::MonthYearChanged { .. } => 0,
            PickerEvent::DateChanged(_) => 1,
            PickerEvent::SelectionChanged(_) => 2,
            PickerEvent::TimeChanged(_) => 3,
        }
    }
}
