//! Garage Scout
//!
//! Client-side helpers for a garage-booking marketplace: distance ranking of
//! garages around the user and weekly operating-hours handling.

pub mod config;
pub mod error;
pub mod geo;
pub mod hours;
pub mod location;
pub mod models;
pub mod sources;

pub use error::{GarageError, Result};
pub use models::{Coordinate, DayOfWeek, DaySchedule, Garage, OperatingHours, RankedGarage};
