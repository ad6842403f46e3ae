use crate::models::Coordinate;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometers between two points, using the haversine formula
///
/// Inputs are not range checked; use [`Coordinate::new`] for that. NaN in, NaN out.
pub fn calculate_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    // Rounding can push `a` just past 1 for near-antipodal points
    let a = ((delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

impl Coordinate {
    /// Distance to another coordinate in kilometers
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        calculate_distance(
            self.latitude,
            self.longitude,
            other.latitude,
            other.longitude,
        )
    }
}

/// Format a distance for display: "850m" below one kilometer, "2.3km" otherwise
///
/// Non-finite or negative distances render as "--".
pub fn format_distance(distance_km: f64) -> String {
    if !distance_km.is_finite() || distance_km < 0.0 {
        return "--".to_string();
    }

    if distance_km < 1.0 {
        format!("{}m", (distance_km * 1000.0).round() as i64)
    } else {
        format!("{:.1}km", distance_km)
    }
}

pub fn is_within_radius(point: &Coordinate, center: &Coordinate, radius_km: f64) -> bool {
    point.distance_to(center) <= radius_km
}

#[cfg(test)]
mod tests {
    use super::*;

    const HCMC: (f64, f64) = (10.8231, 106.6297);
    const HANOI: (f64, f64) = (21.0285, 105.8542);

    #[test]
    fn test_distance_to_self_is_zero() {
        assert_eq!(calculate_distance(HCMC.0, HCMC.1, HCMC.0, HCMC.1), 0.0);
        assert_eq!(calculate_distance(-45.0, 170.0, -45.0, 170.0), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let there = calculate_distance(HCMC.0, HCMC.1, HANOI.0, HANOI.1);
        let back = calculate_distance(HANOI.0, HANOI.1, HCMC.0, HCMC.1);
        assert!((there - back).abs() < 1e-9);
    }

    #[test]
    fn test_distance_hcmc_hanoi() {
        // Roughly 1140 km as the crow flies
        let distance = calculate_distance(HCMC.0, HCMC.1, HANOI.0, HANOI.1);
        assert!(distance > 1100.0 && distance < 1180.0, "got {}", distance);
    }

    #[test]
    fn test_one_degree_of_latitude() {
        let distance = calculate_distance(0.0, 0.0, 1.0, 0.0);
        assert!((distance - 111.19).abs() < 0.01, "got {}", distance);
    }

    #[test]
    fn test_antipodal_points_stay_finite() {
        let half_circumference = std::f64::consts::PI * EARTH_RADIUS_KM;

        let mut lat = -90.0;
        while lat <= 90.0 {
            let distance = calculate_distance(lat, 10.0, -lat, -170.0);
            assert!(distance.is_finite(), "NaN at latitude {}", lat);
            assert!((distance - half_circumference).abs() < 1e-3, "got {} at {}", distance, lat);
            lat += 0.0123;
        }

        assert_eq!(format_distance(calculate_distance(-89.5877, 10.0, 89.5877, -170.0)), "20015.1km");
    }

    #[test]
    fn test_nan_propagates() {
        assert!(calculate_distance(f64::NAN, 0.0, 0.0, 0.0).is_nan());
    }

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance(0.5), "500m");
        assert_eq!(format_distance(0.0), "0m");
        assert_eq!(format_distance(0.1234), "123m");
        assert_eq!(format_distance(1.0), "1.0km");
        assert_eq!(format_distance(2.34), "2.3km");
        assert_eq!(format_distance(15.0), "15.0km");
    }

    #[test]
    fn test_format_distance_garbage() {
        assert_eq!(format_distance(f64::NAN), "--");
        assert_eq!(format_distance(f64::INFINITY), "--");
        assert_eq!(format_distance(-1.0), "--");
    }

    #[test]
    fn test_within_radius() {
        let center = Coordinate::new(HCMC.0, HCMC.1).unwrap();
        let nearby = Coordinate::new(10.83, 106.63).unwrap();
        let far = Coordinate::new(HANOI.0, HANOI.1).unwrap();

        assert!(is_within_radius(&nearby, &center, 5.0));
        assert!(!is_within_radius(&far, &center, 5.0));
    }
}
