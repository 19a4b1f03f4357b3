//! Validated construction settings for one picker instance.

use shared::DisplayMode;

use crate::domain::calendar::CalendarEngine;
use crate::domain::models::{CalendarDate, DateRange, MinuteInterval, YearWindow};

/// Everything the store needs to know about its configuration.
///
/// Values here are already parsed and individually valid; cross-field checks
/// that depend on the clock (initial active date) happen in
/// [`InteractionStore::new`](crate::domain::InteractionStore::new).
#[derive(Debug, Clone)]
pub struct PickerSettings {
    pub engine: CalendarEngine,
    pub range: DateRange,
    pub year_window: YearWindow,
    pub minute_interval: MinuteInterval,
    pub mode: DisplayMode,
    /// Selection becomes read-only: intents are observed but not committed
    pub disable_date_change: bool,
    /// Right-to-left layout, already resolved against the calendar system
    pub reverse: bool,
    /// Date the grid opens on; today when absent
    pub current: Option<CalendarDate>,
    /// Initially selected date
    pub selected: Option<CalendarDate>,
}

impl PickerSettings {
    /// Defaults for `engine`'s system: unbounded, five-minute steps, combined mode
    pub fn new(engine: CalendarEngine) -> Self {
        let reverse = shared::ReverseLayout::default().resolve(engine.system());
        Self {
            engine,
            range: DateRange::unbounded(),
            year_window: YearWindow::default(),
            minute_interval: MinuteInterval::default(),
            mode: DisplayMode::Datepicker,
            disable_date_change: false,
            reverse,
            current: None,
            selected: None,
        }
    }
}
