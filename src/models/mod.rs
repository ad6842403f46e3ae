use crate::error::{GarageError, Result};
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A point on the globe in decimal degrees (WGS84)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Create a coordinate, rejecting values outside [-90, 90] / [-180, 180]
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        let valid = latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude);

        if !valid {
            return Err(GarageError::CoordinateOutOfRange {
                latitude,
                longitude,
            });
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }
}

/// Day of the week, used as the key of a custom schedule
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    pub fn is_weekend(self) -> bool {
        matches!(self, DayOfWeek::Saturday | DayOfWeek::Sunday)
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
            Weekday::Sun => DayOfWeek::Sunday,
        }
    }
}

/// Opening times for a single day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    pub is_open: bool,
    /// "HH:MM"
    pub open_time: String,
    /// "HH:MM"
    pub close_time: String,
}

impl DaySchedule {
    pub fn open(open_time: &str, close_time: &str) -> Self {
        Self {
            is_open: true,
            open_time: open_time.to_string(),
            close_time: close_time.to_string(),
        }
    }

    pub fn closed(open_time: &str, close_time: &str) -> Self {
        Self {
            is_open: false,
            ..Self::open(open_time, close_time)
        }
    }
}

/// Weekly operating hours of a garage
///
/// With `use_custom_schedule` off every day shares the default pair. With it on,
/// `custom_schedule` decides per day; a custom schedule without any open day is
/// accepted and means the garage never opens.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OperatingHours {
    #[serde(default)]
    pub use_custom_schedule: bool,
    pub default_open_time: String,
    pub default_close_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_schedule: Option<BTreeMap<DayOfWeek, DaySchedule>>,
}

/// Garage record as returned by the backend API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Garage {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operating_hours: Option<OperatingHours>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
}

impl Garage {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// A garage together with its distance from the user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RankedGarage {
    pub garage: Garage,
    pub distance_km: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_accepts_bounds() {
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
        assert!(Coordinate::new(10.8231, 106.6297).is_ok());
    }

    #[test]
    fn test_coordinate_rejects_out_of_range() {
        assert_eq!(
            Coordinate::new(91.0, 0.0),
            Err(GarageError::CoordinateOutOfRange {
                latitude: 91.0,
                longitude: 0.0
            })
        );
        assert!(Coordinate::new(0.0, -180.5).is_err());
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
        assert!(Coordinate::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_garage_deserializes_backend_shape() {
        let json = r#"{
            "id": "g1",
            "name": "Garage Sai Gon",
            "address": "12 Le Loi",
            "latitude": 10.77,
            "longitude": 106.70,
            "operatingHours": {
                "useCustomSchedule": true,
                "defaultOpenTime": "08:00",
                "defaultCloseTime": "17:00",
                "customSchedule": {
                    "monday": { "isOpen": true, "openTime": "08:00", "closeTime": "17:00" },
                    "sunday": { "isOpen": false, "openTime": "08:00", "closeTime": "12:00" }
                }
            }
        }"#;

        let garage: Garage = serde_json::from_str(json).unwrap();
        let hours = garage.operating_hours.unwrap();
        let custom = hours.custom_schedule.unwrap();

        assert!(hours.use_custom_schedule);
        assert!(custom[&DayOfWeek::Monday].is_open);
        assert!(!custom[&DayOfWeek::Sunday].is_open);
        assert_eq!(garage.phone, None);
    }

    #[test]
    fn test_day_of_week_from_chrono() {
        assert_eq!(DayOfWeek::from(Weekday::Sat), DayOfWeek::Saturday);
        assert!(DayOfWeek::Sunday.is_weekend());
        assert!(!DayOfWeek::Friday.is_weekend());
    }
}
