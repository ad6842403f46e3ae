use super::{parse_garages, GarageSource};
use crate::models::Garage;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::info;

/// Reads garages from a JSON file on disk (an exported API response)
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl GarageSource for JsonFileSource {
    async fn fetch_garages(&self) -> Result<Vec<Garage>> {
        let body = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read {}", self.path.display()))?;

        let garages = parse_garages(&body)
            .with_context(|| format!("Invalid garage file {}", self.path.display()))?;

        info!("Loaded {} garages from {}", garages.len(), self.path.display());
        Ok(garages)
    }

    fn source_name(&self) -> &'static str {
        "file"
    }
}
