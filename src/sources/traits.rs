use crate::models::Garage;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for anything that can hand us a list of garages
#[async_trait]
pub trait GarageSource: Send + Sync {
    /// Fetch all garages from the source
    async fn fetch_garages(&self) -> Result<Vec<Garage>>;

    /// Get the name of the source, for logging
    fn source_name(&self) -> &'static str;
}
