pub mod api;
pub mod file;
pub mod traits;

pub use api::ApiGarageSource;
pub use file::JsonFileSource;
pub use traits::GarageSource;

use crate::models::Garage;
use anyhow::{Context, Result};
use serde::Deserialize;

/// The backend either returns a bare array or wraps it as `{ "data": [...] }`
#[derive(Deserialize)]
#[serde(untagged)]
enum GarageListing {
    Bare(Vec<Garage>),
    Envelope { data: Vec<Garage> },
}

/// Decode a garage list in either of the shapes the backend produces
pub fn parse_garages(body: &str) -> Result<Vec<Garage>> {
    let listing: GarageListing =
        serde_json::from_str(body).context("Failed to parse garage list")?;

    Ok(match listing {
        GarageListing::Bare(garages) => garages,
        GarageListing::Envelope { data } => data,
    })
}
