use crate::location::{LocationConfig, DEFAULT_FALLBACK};
use crate::models::Coordinate;
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Config {
    /// Backend base URL; when unset garages are read from `garages_file`
    pub api_base_url: Option<String>,
    pub garages_file: PathBuf,
    pub location: LocationConfig,
    /// Position reported by the device, if any
    pub user_location: Option<Coordinate>,
    pub search_radius_km: f64,
    pub result_limit: Option<usize>,
    pub output_file: PathBuf,
}

impl Config {
    /// Load configuration from the environment (and `.env` if present)
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let fallback = Coordinate::new(
            parse_or(&lookup, "FALLBACK_LATITUDE", DEFAULT_FALLBACK.latitude)?,
            parse_or(&lookup, "FALLBACK_LONGITUDE", DEFAULT_FALLBACK.longitude)?,
        )
        .context("Invalid fallback location")?;

        let user_location = match (
            parse_opt::<f64, _>(&lookup, "USER_LATITUDE")?,
            parse_opt::<f64, _>(&lookup, "USER_LONGITUDE")?,
        ) {
            (Some(latitude), Some(longitude)) => Some(
                Coordinate::new(latitude, longitude).context("Invalid user location")?,
            ),
            _ => None,
        };

        let search_radius_km: f64 = parse_or(&lookup, "SEARCH_RADIUS_KM", 10.0)?;
        if !search_radius_km.is_finite() || search_radius_km < 0.0 {
            anyhow::bail!(
                "SEARCH_RADIUS_KM must be a finite, non-negative distance, got {}",
                search_radius_km
            );
        }

        Ok(Self {
            api_base_url: lookup("GARAGE_API_URL").filter(|url| !url.trim().is_empty()),
            garages_file: lookup("GARAGES_FILE")
                .unwrap_or_else(|| "garages.json".to_string())
                .into(),
            location: LocationConfig { fallback },
            user_location,
            search_radius_km,
            result_limit: parse_opt(&lookup, "RESULT_LIMIT")?,
            output_file: lookup("OUTPUT_FILE")
                .unwrap_or_else(|| "ranked_garages.json".to_string())
                .into(),
        })
    }
}

fn parse_opt<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|value| {
            value
                .trim()
                .parse::<T>()
                .with_context(|| format!("{} must be a valid number, got '{}'", key, value))
        })
        .transpose()
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    Ok(parse_opt(lookup, key)?.unwrap_or(default))
}
