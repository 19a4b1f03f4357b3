//! Error taxonomy for the picker core.
//!
//! Only [`PickerError::Configuration`] is fatal, and only to instance
//! creation. Every other variant is an outcome reported to the caller of an
//! engine function or a store intent; the session keeps its last good state.

use shared::CalendarSystem;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PickerError {
    #[error("Invalid picker configuration: {0}")]
    Configuration(String),
    #[error("Invalid date format '{0}', expected YYYY/MM/DD")]
    InvalidFormat(String),
    #[error("Invalid date {year:04}/{month:02}/{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    #[error("Date {0} is outside the allowed range")]
    OutOfRange(String),
    #[error("Minute {minute} is not a multiple of the {interval} minute interval")]
    InvalidInterval { minute: u32, interval: u32 },
    #[error("Year {year} is not supported by the {system} calendar")]
    UnsupportedEra { year: i32, system: CalendarSystem },
    #[error("Invalid time {hour:02}:{minute:02}")]
    InvalidTime { hour: u32, minute: u32 },
}

impl PickerError {
    /// Whether a live session can carry on after this error
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, PickerError::Configuration(_))
    }
}

pub type PickerResult<T> = Result<T, PickerError>;
