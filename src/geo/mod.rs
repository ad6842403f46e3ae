pub mod distance;
pub mod ranking;

pub use distance::{calculate_distance, format_distance, is_within_radius, EARTH_RADIUS_KM};
pub use ranking::{nearby, nearest_open, rank_by_distance};
