// src/bin/seed.rs
// DOCUMENTATION: Fixture loader
// PURPOSE: Insert users, places (with images) and wishlists from a JSON file
//
// Usage: seed [path/to/seed.json]   (default: data/seed.json)

use anyhow::{Context, Result};
use tourist_places::config::{init_db_pool, Config};
use tourist_places::services::{SeedData, SeedService};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/seed.json".to_string());

    let raw = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("reading seed file {}", path))?;
    let data: SeedData =
        serde_json::from_str(&raw).with_context(|| format!("parsing seed file {}", path))?;

    let config = Config::from_env();
    config.validate().map_err(anyhow::Error::msg)?;
    let pool = init_db_pool(&config)
        .await
        .with_context(|| format!("opening {}", config.database_url))?;

    let stats = SeedService::load(&pool, &data)
        .await
        .context("loading seed data")?;

    println!(
        "{} users, {} places, {} images, {} wishlist rows inserted; {} skipped",
        stats.users, stats.places, stats.images, stats.wishlists, stats.skipped
    );

    Ok(())
}
