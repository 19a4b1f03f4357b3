//! Host callbacks fired after each committed transition.
//!
//! Every callback is optional; an unregistered one is a no-op. Dates are passed
//! in canonical `YYYY/MM/DD` form so the host does not depend on the domain
//! date type.

use std::fmt;

use crate::domain::calendar;
use crate::domain::commands::PickerEvent;
use crate::domain::models::TimeOfDay;

type DateCallback = Box<dyn FnMut(&str)>;
type MonthYearCallback = Box<dyn FnMut(i32, u32)>;
type TimeCallback = Box<dyn FnMut(TimeOfDay)>;

/// Optional observers registered by the host
#[derive(Default)]
pub struct PickerCallbacks {
    on_selected_change: Option<DateCallback>,
    on_month_year_change: Option<MonthYearCallback>,
    on_time_change: Option<TimeCallback>,
    on_date_change: Option<DateCallback>,
}

impl PickerCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called with the canonical selected date
    pub fn on_selected_change<F>(mut self, f: F) -> Self
    where
        F: FnMut(&str) + 'static,
    {
        self.on_selected_change = Some(Box::new(f));
        self
    }

    /// Called with the (year, month) the grid moved to
    pub fn on_month_year_change<F>(mut self, f: F) -> Self
    where
        F: FnMut(i32, u32) + 'static,
    {
        self.on_month_year_change = Some(Box::new(f));
        self
    }

    /// Called with the committed time
    pub fn on_time_change<F>(mut self, f: F) -> Self
    where
        F: FnMut(TimeOfDay) + 'static,
    {
        self.on_time_change = Some(Box::new(f));
        self
    }

    /// Called with the canonical active date
    pub fn on_date_change<F>(mut self, f: F) -> Self
    where
        F: FnMut(&str) + 'static,
    {
        self.on_date_change = Some(Box::new(f));
        self
    }

    /// Deliver one event to its callback, if registered
    pub fn notify(&mut self, event: &PickerEvent) {
        match event {
            PickerEvent::MonthYearChanged { year, month } => {
                if let Some(callback) = self.on_month_year_change.as_mut() {
                    callback(*year, *month);
                }
            }
            PickerEvent::DateChanged(date) => {
                if let Some(callback) = self.on_date_change.as_mut() {
                    callback(&calendar::format(date));
                }
            }
            PickerEvent::SelectionChanged(date) => {
                if let Some(callback) = self.on_selected_change.as_mut() {
                    callback(&calendar::format(date));
                }
            }
            PickerEvent::TimeChanged(time) => {
                if let Some(callback) = self.on_time_change.as_mut() {
                    callback(*time);
                }
            }
        }
    }
}

impl fmt::Debug for PickerCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PickerCallbacks")
            .field("on_selected_change", &self.on_selected_change.is_some())
            .field("on_month_year_change", &self.on_month_year_change.is_some())
            .field("on_time_change", &self.on_time_change.is_some())
            .field("on_date_change", &self.on_date_change.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::CalendarDate;
    use shared::CalendarSystem;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_unregistered_callbacks_are_noops() {
        let mut callbacks = PickerCallbacks::new();
        let date = CalendarDate::new(2024, 1, 1, CalendarSystem::Gregorian).unwrap();
        callbacks.notify(&PickerEvent::SelectionChanged(date));
        callbacks.notify(&PickerEvent::MonthYearChanged { year: 2024, month: 1 });
    }

    #[test]
    fn test_dates_are_delivered_in_canonical_form() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let mut callbacks = PickerCallbacks::new().on_selected_change(move |date| sink.borrow_mut().push(date.to_string()));

        let date = CalendarDate::new(1403, 1, 9, CalendarSystem::Jalali).unwrap();
        callbacks.notify(&PickerEvent::SelectionChanged(date));
        callbacks.notify(&PickerEvent::DateChanged(date));
        assert_eq!(*seen.borrow(), vec!["1403/01/09".to_string()]);
    }
}
