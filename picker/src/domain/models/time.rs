use std::fmt;

use crate::domain::errors::{PickerError, PickerResult};

/// Hour and minute of the time selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u32,
    minute: u32,
}

impl TimeOfDay {
    pub fn new(hour: u32, minute: u32) -> PickerResult<Self> {
        if hour > 23 || minute > 59 {
            return Err(PickerError::InvalidTime { hour, minute });
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Step of the minute column; only divisors of 60 are allowed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinuteInterval(u32);

impl MinuteInterval {
    pub const ALLOWED: [u32; 12] = [1, 2, 3, 4, 5, 6, 10, 12, 15, 20, 30, 60];

    pub fn new(minutes: u32) -> Option<Self> {
        Self::ALLOWED.contains(&minutes).then_some(Self(minutes))
    }

    pub fn minutes(&self) -> u32 {
        self.0
    }

    /// Fail with `InvalidInterval` unless the minute sits on the grid
    pub fn check(&self, time: TimeOfDay) -> PickerResult<()> {
        if time.minute() % self.0 != 0 {
            return Err(PickerError::InvalidInterval { minute: time.minute(), interval: self.0 });
        }
        Ok(())
    }

    /// Minutes offered by the time selector
    pub fn selectable_minutes(&self) -> Vec<u32> {
        (0..60).step_by(self.0 as usize).collect()
    }
}

impl Default for MinuteInterval {
    fn default() -> Self {
        Self(5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_bounds() {
        assert!(TimeOfDay::new(23, 59).is_ok());
        assert_eq!(TimeOfDay::new(24, 0), Err(PickerError::InvalidTime { hour: 24, minute: 0 }));
        assert!(TimeOfDay::new(0, 60).is_err());
        assert_eq!(TimeOfDay::new(9, 5).unwrap().to_string(), "09:05");
    }

    #[test]
    fn test_interval_set() {
        assert!(MinuteInterval::new(15).is_some());
        assert!(MinuteInterval::new(7).is_none());
        assert!(MinuteInterval::new(0).is_none());
        assert_eq!(MinuteInterval::default().minutes(), 5);
    }

    #[test]
    fn test_interval_check() {
        let quarter = MinuteInterval::new(15).unwrap();
        assert_eq!(
            quarter.check(TimeOfDay::new(10, 7).unwrap()),
            Err(PickerError::InvalidInterval { minute: 7, interval: 15 })
        );
        assert!(quarter.check(TimeOfDay::new(10, 45).unwrap()).is_ok());
        assert_eq!(quarter.selectable_minutes(), vec![0, 15, 30, 45]);

        let hourly = MinuteInterval::new(60).unwrap();
        assert_eq!(hourly.selectable_minutes(), vec![0]);
        assert!(hourly.check(TimeOfDay::new(10, 30).unwrap()).is_err());
    }
}
