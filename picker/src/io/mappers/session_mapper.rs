use shared::{SessionSummary, TimeOfDayDto};

use crate::domain::calendar;
use crate::domain::interaction_store::SessionState;
use crate::domain::models::TimeOfDay;
use crate::domain::settings::PickerSettings;

pub struct SessionMapper;

impl SessionMapper {
    pub fn time_to_dto(time: TimeOfDay) -> TimeOfDayDto {
        TimeOfDayDto { hour: time.hour(), minute: time.minute() }
    }

    /// Canonical snapshot of the session for the host
    pub fn to_summary(state: &SessionState, settings: &PickerSettings) -> SessionSummary {
        SessionSummary {
            active_date: calendar::format(&state.active_date),
            selected_date: state.selected_date.as_ref().map(calendar::format),
            selected_time: state.selected_time.map(Self::time_to_dto),
            month_open: state.panels.month_open(),
            time_open: state.panels.time_open(),
            reverse: settings.reverse,
        }
    }
}
