use shared::{IntentRequest, PickerNotification};

use crate::domain::calendar::{self, CalendarEngine};
use crate::domain::commands::{Intent, PickerEvent};
use crate::domain::errors::PickerResult;
use crate::domain::models::TimeOfDay;

pub struct IntentMapper;

impl IntentMapper {
    /// Convert a serialized intent into a domain intent.
    ///
    /// Date strings are parsed in the engine's system, so malformed input
    /// surfaces as `InvalidFormat` / `InvalidDate` before reaching the store.
    pub fn to_domain(request: &IntentRequest, engine: &CalendarEngine) -> PickerResult<Intent> {
        let intent = match request {
            IntentRequest::SelectDate { date } => Intent::SetSelectedDate(engine.parse(date)?),
            IntentRequest::ChangeActiveDate { date } => Intent::SetActiveDate(engine.parse(date)?),
            IntentRequest::ShiftMonth { delta } => Intent::ShiftMonth(*delta),
            IntentRequest::ToggleMonthPanel => Intent::ToggleMonth,
            IntentRequest::ToggleTimePanel => Intent::ToggleTime,
            IntentRequest::SetTime { hour, minute } => Intent::SetTime(TimeOfDay::new(*hour, *minute)?),
        };
        Ok(intent)
    }

    /// Convert a domain event to its notification DTO
    pub fn event_to_dto(event: &PickerEvent) -> PickerNotification {
        match event {
            PickerEvent::MonthYearChanged { year, month } => {
                PickerNotification::MonthYearChange { year: *year, month: *month }
            }
            PickerEvent::DateChanged(date) => PickerNotification::DateChange { date: calendar::format(date) },
            PickerEvent::SelectionChanged(date) => {
                PickerNotification::SelectedChange { date: calendar::format(date) }
            }
            PickerEvent::TimeChanged(time) => {
                PickerNotification::TimeChange { hour: time.hour(), minute: time.minute() }
            }
        }
    }

    /// Convert a list of domain events to notification DTOs
    pub fn events_to_dto_list(events: &[PickerEvent]) -> Vec<PickerNotification> {
        events.iter().map(Self::event_to_dto).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::PickerError;
    use crate::domain::models::CalendarDate;
    use shared::CalendarSystem;

    #[test]
    fn test_to_domain() {
        let engine = CalendarEngine::new(CalendarSystem::Jalali);
        let request = IntentRequest::SelectDate { date: "1403/01/01".to_string() };
        assert_eq!(
            IntentMapper::to_domain(&request, &engine),
            Ok(Intent::SetSelectedDate(CalendarDate::new(1403, 1, 1, CalendarSystem::Jalali).unwrap()))
        );
        assert_eq!(IntentMapper::to_domain(&IntentRequest::ToggleTimePanel, &engine), Ok(Intent::ToggleTime));
    }

    #[test]
    fn test_to_domain_surfaces_parse_errors() {
        let engine = CalendarEngine::new(CalendarSystem::Gregorian);
        let malformed = IntentRequest::ChangeActiveDate { date: "tomorrow".to_string() };
        assert_eq!(
            IntentMapper::to_domain(&malformed, &engine),
            Err(PickerError::InvalidFormat("tomorrow".to_string()))
        );
        let bad_time = IntentRequest::SetTime { hour: 25, minute: 0 };
        assert_eq!(
            IntentMapper::to_domain(&bad_time, &engine),
            Err(PickerError::InvalidTime { hour: 25, minute: 0 })
        );
    }

    #[test]
    fn test_event_to_dto() {
        let date = CalendarDate::new(2024, 3, 9, CalendarSystem::Gregorian).unwrap();
        assert_eq!(
            IntentMapper::event_to_dto(&PickerEvent::SelectionChanged(date)),
            PickerNotification::SelectedChange { date: "2024/03/09".to_string() }
        );
        let time = TimeOfDay::new(10, 15).unwrap();
        assert_eq!(
            IntentMapper::events_to_dto_list(&[PickerEvent::TimeChanged(time)]),
            vec![PickerNotification::TimeChange { hour: 10, minute: 15 }]
        );
    }
}
