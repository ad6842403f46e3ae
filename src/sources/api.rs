use super::{parse_garages, GarageSource};
use crate::models::Garage;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

/// Fetches garages from the marketplace backend
pub struct ApiGarageSource {
    client: Client,
    base_url: String,
}

impl ApiGarageSource {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn garages_url(&self) -> String {
        format!("{}/garages", self.base_url)
    }
}

#[async_trait]
impl GarageSource for ApiGarageSource {
    async fn fetch_garages(&self) -> Result<Vec<Garage>> {
        let url = self.garages_url();
        debug!("GET {}", url);

        let body = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?
            .error_for_status()
            .with_context(|| format!("Backend rejected {}", url))?
            .text()
            .await
            .context("Failed to read response body")?;

        let garages = parse_garages(&body)?;
        info!("Fetched {} garages from {}", garages.len(), url);
        Ok(garages)
    }

    fn source_name(&self) -> &'static str {
        "api"
    }
}
