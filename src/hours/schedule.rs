use super::time::is_open_now;
use crate::error::Result;
use crate::models::{DayOfWeek, DaySchedule, OperatingHours};
use chrono::{Datelike, NaiveDateTime};
use std::collections::BTreeMap;

/// Every day open with the same times, in uniform mode
pub fn create_uniform_operating_hours(open_time: &str, close_time: &str) -> OperatingHours {
    let schedule = DayOfWeek::ALL
        .iter()
        .map(|day| (*day, DaySchedule::open(open_time, close_time)))
        .collect();

    OperatingHours {
        use_custom_schedule: false,
        default_open_time: open_time.to_string(),
        default_close_time: close_time.to_string(),
        custom_schedule: Some(schedule),
    }
}

/// Monday to Friday open, weekend closed
///
/// Uses a custom schedule, since the weekend closure only takes effect in custom mode.
pub fn create_weekdays_only_operating_hours(open_time: &str, close_time: &str) -> OperatingHours {
    let schedule = DayOfWeek::ALL
        .iter()
        .map(|day| {
            let entry = if day.is_weekend() {
                DaySchedule::closed(open_time, close_time)
            } else {
                DaySchedule::open(open_time, close_time)
            };
            (*day, entry)
        })
        .collect();

    OperatingHours {
        use_custom_schedule: true,
        default_open_time: open_time.to_string(),
        default_close_time: close_time.to_string(),
        custom_schedule: Some(schedule),
    }
}

/// Copy the default open/close times into every day, keeping each day's open flag
///
/// Days missing from the custom schedule are added as open.
pub fn apply_default_to_all_days(hours: &OperatingHours) -> OperatingHours {
    let existing = hours.custom_schedule.as_ref();

    let schedule: BTreeMap<DayOfWeek, DaySchedule> = DayOfWeek::ALL
        .iter()
        .map(|day| {
            let is_open = existing
                .and_then(|s| s.get(day))
                .map_or(true, |d| d.is_open);
            let entry = DaySchedule {
                is_open,
                open_time: hours.default_open_time.clone(),
                close_time: hours.default_close_time.clone(),
            };
            (*day, entry)
        })
        .collect();

    OperatingHours {
        custom_schedule: Some(schedule),
        ..hours.clone()
    }
}

/// Uniform schedules always have open days; custom ones need at least one day flagged open
pub fn has_at_least_one_open_day(hours: &OperatingHours) -> bool {
    if !hours.use_custom_schedule {
        return true;
    }

    hours
        .custom_schedule
        .as_ref()
        .is_some_and(|schedule| schedule.values().any(|day| day.is_open))
}

impl OperatingHours {
    /// Effective schedule for one day: the defaults in uniform mode, the day's
    /// entry in custom mode (closed when the entry is missing)
    pub fn day_schedule(&self, day: DayOfWeek) -> DaySchedule {
        if !self.use_custom_schedule {
            return DaySchedule::open(&self.default_open_time, &self.default_close_time);
        }

        self.custom_schedule
            .as_ref()
            .and_then(|schedule| schedule.get(&day))
            .cloned()
            .unwrap_or_else(|| {
                DaySchedule::closed(&self.default_open_time, &self.default_close_time)
            })
    }

    /// Whether the garage is open at a local date and time
    pub fn is_open_at(&self, at: NaiveDateTime) -> Result<bool> {
        let day = self.day_schedule(DayOfWeek::from(at.weekday()));
        if !day.is_open {
            return Ok(false);
        }

        is_open_now(&day.open_time, &day.close_time, at.time())
    }
}
