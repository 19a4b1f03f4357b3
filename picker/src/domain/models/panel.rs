use shared::DisplayMode;

/// Open/closed state of the month/year and time panels.
///
/// The two panels toggle independently; both can be open at once when the
/// combined picker shows them under one body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    ClosedBoth,
    MonthOpen,
    TimeOpen,
    BothOpen,
}

impl PanelState {
    /// Initial panels for a display mode
    pub fn for_mode(mode: DisplayMode) -> Self {
        match mode {
            DisplayMode::MonthYear => PanelState::MonthOpen,
            DisplayMode::Time => PanelState::TimeOpen,
            DisplayMode::Datepicker | DisplayMode::Calendar => PanelState::ClosedBoth,
        }
    }

    fn from_flags(month_open: bool, time_open: bool) -> Self {
        match (month_open, time_open) {
            (false, false) => PanelState::ClosedBoth,
            (true, false) => PanelState::MonthOpen,
            (false, true) => PanelState::TimeOpen,
            (true, true) => PanelState::BothOpen,
        }
    }

    pub fn month_open(self) -> bool {
        matches!(self, PanelState::MonthOpen | PanelState::BothOpen)
    }

    pub fn time_open(self) -> bool {
        matches!(self, PanelState::TimeOpen | PanelState::BothOpen)
    }

    pub fn toggle_month(self) -> Self {
        Self::from_flags(!self.month_open(), self.time_open())
    }

    pub fn toggle_time(self) -> Self {
        Self::from_flags(self.month_open(), !self.time_open())
    }
}
