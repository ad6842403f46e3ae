use thiserror::Error;

/// Errors raised while interpreting garage data
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GarageError {
    #[error("Invalid time format: '{0}' (expected HH:MM)")]
    InvalidTimeFormat(String),

    #[error("Coordinate out of range: latitude {latitude}, longitude {longitude}")]
    CoordinateOutOfRange { latitude: f64, longitude: f64 },
}

pub type Result<T> = std::result::Result<T, GarageError>;
