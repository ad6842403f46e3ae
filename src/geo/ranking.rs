use super::distance::is_within_radius;
use crate::models::{Coordinate, Garage, RankedGarage};
use chrono::NaiveDateTime;
use tracing::{debug, warn};

fn sort_key(distance_km: f64) -> f64 {
    if distance_km.is_finite() {
        distance_km
    } else {
        f64::INFINITY
    }
}

/// Attach distances from `origin` and sort closest first
///
/// Equal distances keep their input order. Garages with a non-finite distance
/// (bad coordinates from the backend) end up last.
pub fn rank_by_distance(garages: &[Garage], origin: &Coordinate) -> Vec<RankedGarage> {
    let mut ranked: Vec<RankedGarage> = garages
        .iter()
        .map(|garage| RankedGarage {
            distance_km: origin.distance_to(&garage.coordinate()),
            garage: garage.clone(),
        })
        .collect();

    ranked.sort_by(|a, b| sort_key(a.distance_km).total_cmp(&sort_key(b.distance_km)));
    ranked
}

/// Garages within `radius_km` of `origin`, closest first, optionally capped at `limit`
pub fn nearby(
    garages: &[Garage],
    origin: &Coordinate,
    radius_km: f64,
    limit: Option<usize>,
) -> Vec<RankedGarage> {
    let mut ranked: Vec<RankedGarage> = rank_by_distance(garages, origin)
        .into_iter()
        .filter(|r| is_within_radius(&r.garage.coordinate(), origin, radius_km))
        .collect();

    if let Some(limit) = limit {
        ranked.truncate(limit);
    }

    debug!(
        "{} of {} garages within {} km",
        ranked.len(),
        garages.len(),
        radius_km
    );
    ranked
}

/// Closest garage that is open at the given local time
///
/// Used to pick a rescue garage. Garages without operating hours count as closed;
/// garages whose hours fail to parse are skipped.
pub fn nearest_open(
    garages: &[Garage],
    origin: &Coordinate,
    at: NaiveDateTime,
) -> Option<RankedGarage> {
    rank_by_distance(garages, origin)
        .into_iter()
        .filter(|r| r.distance_km.is_finite())
        .find(|r| {
            let Some(hours) = &r.garage.operating_hours else {
                return false;
            };
            match hours.is_open_at(at) {
                Ok(open) => open,
                Err(e) => {
                    warn!("Skipping garage {}: {}", r.garage.id, e);
                    false
                }
            }
        })
}
