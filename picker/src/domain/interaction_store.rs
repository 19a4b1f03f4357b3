//! Interaction store for the date picker.
//!
//! Owns the session state of one picker instance and applies intents through a
//! single transition function. A transition is computed on a copy of the state;
//! only when it succeeds is the copy committed and its events delivered to the
//! registered callbacks, so observers always see post-transition state and a
//! rejected intent changes nothing.
//!
//! ## Event order
//!
//! Within one intent at most one event of each kind fires, in this order:
//! month/year changed, date changed, selection changed, time changed.

use log::{debug, info, warn};
use shared::CalendarMonth;

use crate::domain::calendar::{self, CalendarEngine};
use crate::domain::commands::{Intent, PickerEvent};
use crate::domain::errors::{PickerError, PickerResult};
use crate::domain::models::{CalendarDate, PanelState, TimeOfDay};
use crate::domain::observers::PickerCallbacks;
use crate::domain::settings::PickerSettings;

/// Mutable state of one picker instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionState {
    /// Date whose month the grid shows
    pub active_date: CalendarDate,
    pub selected_date: Option<CalendarDate>,
    pub selected_time: Option<TimeOfDay>,
    pub panels: PanelState,
}

/// Result of a successful transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: SessionState,
    pub events: Vec<PickerEvent>,
}

/// Compute the state that `intent` leads to, without committing it
pub fn transition(state: &SessionState, intent: Intent, settings: &PickerSettings) -> PickerResult<Transition> {
    let engine = &settings.engine;
    let mut next = *state;
    let mut events = Vec::new();

    match intent {
        Intent::ToggleMonth => {
            next.panels = state.panels.toggle_month();
        }
        Intent::ToggleTime => {
            next.panels = state.panels.toggle_time();
        }
        Intent::SetActiveDate(date) => {
            let date = checked_in_range(engine.localize(date)?, settings)?;
            apply_active_date(state, &mut next, &mut events, date);
        }
        Intent::ShiftMonth(delta) => {
            let target = engine.shift_month(state.active_date, delta)?;
            let clamped = calendar::clamp(target, &settings.range);
            if clamped.year_month() != target.year_month() {
                return Err(PickerError::OutOfRange(calendar::format(&target)));
            }
            apply_active_date(state, &mut next, &mut events, clamped);
        }
        Intent::SetSelectedDate(date) => {
            let date = engine.localize(date)?;
            if !settings.disable_date_change {
                next.selected_date = Some(checked_in_range(date, settings)?);
            }
            events.push(PickerEvent::SelectionChanged(date));
        }
        Intent::SetTime(time) => {
            settings.minute_interval.check(time)?;
            next.selected_time = Some(time);
            events.push(PickerEvent::TimeChanged(time));
        }
    }

    events.sort_by_key(PickerEvent::rank);
    Ok(Transition { state: next, events })
}

fn checked_in_range(date: CalendarDate, settings: &PickerSettings) -> PickerResult<CalendarDate> {
    if settings.range.contains(&date) {
        Ok(date)
    } else {
        Err(PickerError::OutOfRange(calendar::format(&date)))
    }
}

fn apply_active_date(
    previous: &SessionState,
    next: &mut SessionState,
    events: &mut Vec<PickerEvent>,
    date: CalendarDate,
) {
    next.active_date = date;
    if date.year_month() != previous.active_date.year_month() {
        events.push(PickerEvent::MonthYearChanged { year: date.year(), month: date.month() });
    }
    if date != previous.active_date {
        events.push(PickerEvent::DateChanged(date));
    }
}

/// Owner of the session state and the host callbacks
#[derive(Debug)]
pub struct InteractionStore {
    settings: PickerSettings,
    state: SessionState,
    callbacks: PickerCallbacks,
}

impl InteractionStore {
    /// Create the session for one picker instance.
    ///
    /// The initial active date is `current` (or today) clamped into the range.
    /// A `selected` date outside the range is a configuration error.
    pub fn new(settings: PickerSettings, callbacks: PickerCallbacks) -> PickerResult<Self> {
        let engine = &settings.engine;

        let selected_date = match settings.selected {
            Some(date) => {
                let date = engine.localize(date).map_err(|e| PickerError::Configuration(e.to_string()))?;
                if !settings.range.contains(&date) {
                    return Err(PickerError::Configuration(format!(
                        "selected date {} is outside the allowed range",
                        calendar::format(&date)
                    )));
                }
                Some(date)
            }
            None => None,
        };

        let current = match settings.current {
            Some(date) => engine.localize(date),
            None => engine.today(),
        }
        .map_err(|e| PickerError::Configuration(e.to_string()))?;
        let active_date = calendar::clamp(current, &settings.range);

        let state = SessionState {
            active_date,
            selected_date,
            selected_time: None,
            panels: PanelState::for_mode(settings.mode),
        };
        info!(
            "📅 Date picker ready: {} calendar, mode {:?}, active {}, panels {:?}",
            engine.system(),
            settings.mode,
            active_date,
            state.panels
        );

        Ok(Self { settings, state, callbacks })
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn settings(&self) -> &PickerSettings {
        &self.settings
    }

    pub fn engine(&self) -> &CalendarEngine {
        &self.settings.engine
    }

    /// Replace the registered callbacks
    pub fn set_callbacks(&mut self, callbacks: PickerCallbacks) {
        self.callbacks = callbacks;
    }

    /// Apply one intent: compute, commit, then notify
    pub fn dispatch(&mut self, intent: Intent) -> PickerResult<Vec<PickerEvent>> {
        let Transition { state, events } = match transition(&self.state, intent, &self.settings) {
            Ok(result) => result,
            Err(e) => {
                warn!("Rejected {:?}: {}", intent, e);
                return Err(e);
            }
        };

        self.state = state;
        debug!("Applied {:?} -> {:?} ({} events)", intent, self.state, events.len());

        for event in &events {
            self.callbacks.notify(event);
        }
        Ok(events)
    }

    /// Grid for the month currently shown
    pub fn active_month_grid(&self) -> PickerResult<CalendarMonth> {
        let (year, month) = self.state.active_date.year_month();
        self.engine().month_grid(year, month, &self.settings.range)
    }

    /// Years offered by the year selector
    pub fn selectable_years(&self) -> Vec<i32> {
        self.settings
            .year_window
            .selectable_years(&self.settings.range, self.settings.engine.system())
    }

    /// Minutes offered by the time selector
    pub fn selectable_minutes(&self) -> Vec<u32> {
        self.settings.minute_interval.selectable_minutes()
    }
}
