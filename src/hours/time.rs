use crate::error::{GarageError, Result};
use chrono::{NaiveTime, Timelike};
use std::fmt;

/// Wall-clock time with minute precision, parsed from "HH:MM"
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    pub fn new(hour: u8, minute: u8) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(GarageError::InvalidTimeFormat(
                Self { hour, minute }.to_string(),
            ));
        }
        Ok(Self { hour, minute })
    }

    /// Parse "HH:MM" (a single-digit hour is accepted, minutes must have two digits)
    pub fn parse(value: &str) -> Result<Self> {
        let invalid = || GarageError::InvalidTimeFormat(value.to_string());

        let (hour, minute) = value.trim().split_once(':').ok_or_else(invalid)?;

        let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(hour) || hour.len() > 2 || !all_digits(minute) || minute.len() != 2 {
            return Err(invalid());
        }

        let hour: u8 = hour.parse().map_err(|_| invalid())?;
        let minute: u8 = minute.parse().map_err(|_| invalid())?;

        Self::new(hour, minute).map_err(|_| invalid())
    }

    /// Minutes since midnight
    pub fn minutes(&self) -> u16 {
        self.hour as u16 * 60 + self.minute as u16
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Whether `now` falls inside `[open_time, close_time]`, both ends inclusive
///
/// Ranges that cross midnight (close before open) are never open.
pub fn is_open_now(open_time: &str, close_time: &str, now: NaiveTime) -> Result<bool> {
    let open = TimeOfDay::parse(open_time)?.minutes();
    let close = TimeOfDay::parse(close_time)?.minutes();
    let current = TimeOfDay::from(now).minutes();

    Ok(current >= open && current <= close)
}
