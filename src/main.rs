use chrono::Local;
use garage_scout::config::Config;
use garage_scout::geo::{format_distance, nearby, nearest_open};
use garage_scout::location::resolve_user_location;
use garage_scout::sources::{ApiGarageSource, GarageSource, JsonFileSource};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("🔧 Garage Scout");
    info!("===============");

    let config = Config::from_env()?;

    let source: Box<dyn GarageSource> = match &config.api_base_url {
        Some(url) => Box::new(ApiGarageSource::new(url)?),
        None => Box::new(JsonFileSource::new(&config.garages_file)),
    };

    info!("Loading garages from {} source...", source.source_name());
    let garages = source.fetch_garages().await?;

    let origin = resolve_user_location(config.user_location, &config.location);
    let now = Local::now().naive_local();

    let ranked = nearby(&garages, &origin, config.search_radius_km, config.result_limit);
    info!(
        "\n✅ {} garages within {} km\n",
        ranked.len(),
        config.search_radius_km
    );

    for (i, entry) in ranked.iter().enumerate() {
        let garage = &entry.garage;
        let status = match &garage.operating_hours {
            Some(hours) => match hours.is_open_at(now) {
                Ok(true) => "open",
                Ok(false) => "closed",
                Err(e) => {
                    warn!("Garage {} has unreadable hours: {}", garage.id, e);
                    "unknown hours"
                }
            },
            None => "no hours listed",
        };

        println!("{}. {} ({})", i + 1, garage.name, format_distance(entry.distance_km));
        if !garage.address.is_empty() {
            println!("   {}", garage.address);
        }
        println!("   Status: {}", status);
        if let Some(phone) = &garage.phone {
            println!("   Phone: {}", phone);
        }
        println!();
    }

    match nearest_open(&garages, &origin, now) {
        Some(rescue) => info!(
            "🚨 Nearest open garage for rescue: {} ({})",
            rescue.garage.name,
            format_distance(rescue.distance_km)
        ),
        None => warn!("No garage is open right now"),
    }

    let json = serde_json::to_string_pretty(&ranked)?;
    tokio::fs::write(&config.output_file, json).await?;
    info!("💾 Saved ranked garages to {}", config.output_file.display());

    Ok(())
}
