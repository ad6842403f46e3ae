use crate::models::Coordinate;
use tracing::{info, warn};

/// Ho Chi Minh City, used when no device position is available
pub const DEFAULT_FALLBACK: Coordinate = Coordinate {
    latitude: 10.8231,
    longitude: 106.6297,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationConfig {
    pub fallback: Coordinate,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            fallback: DEFAULT_FALLBACK,
        }
    }
}

/// Pick the user's position: the device fix when there is one, the configured fallback otherwise
pub fn resolve_user_location(device: Option<Coordinate>, config: &LocationConfig) -> Coordinate {
    match device {
        Some(position) => {
            info!(
                "Using device location ({}, {})",
                position.latitude, position.longitude
            );
            position
        }
        None => {
            warn!(
                "Device location unavailable, falling back to ({}, {})",
                config.fallback.latitude, config.fallback.longitude
            );
            config.fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_location_wins() {
        let device = Coordinate::new(21.0285, 105.8542).unwrap();
        let resolved = resolve_user_location(Some(device), &LocationConfig::default());
        assert_eq!(resolved, device);
    }

    #[test]
    fn test_falls_back_to_config() {
        let config = LocationConfig {
            fallback: Coordinate::new(16.0544, 108.2022).unwrap(),
        };
        assert_eq!(resolve_user_location(None, &config), config.fallback);
        assert_eq!(
            resolve_user_location(None, &LocationConfig::default()),
            DEFAULT_FALLBACK
        );
    }
}
