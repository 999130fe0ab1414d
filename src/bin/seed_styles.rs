//! Replace the style catalog with the bundled sample dataset
//!
//! Drops every stored style, then inserts the sample set. Run once per
//! deployment or whenever the sample data changes.

use glam_advisor::config::Settings;
use glam_advisor::models::StyleCategory;
use glam_advisor::services::{seed::sample_styles, PostgresCatalog, StyleCatalog};
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt().with_target(false).init();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let db = &settings.database;
    let Some(url) = db.url.as_deref().filter(|url| !url.is_empty()) else {
        error!("database.url (or DATABASE_URL) must be set to seed the catalog");
        return ExitCode::FAILURE;
    };

    let catalog = match PostgresCatalog::from_settings(
        url,
        db.max_connections,
        db.min_connections,
        db.acquire_timeout_secs,
        db.idle_timeout_secs,
    )
    .await
    {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Failed to connect to PostgreSQL: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let inserted = match catalog.replace_all(sample_styles()).await {
        Ok(inserted) => inserted,
        Err(e) => {
            error!("Error seeding catalog: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let hairstyles = inserted.iter().filter(|s| s.category == StyleCategory::Hairstyle).count();
    let beard_styles = inserted.iter().filter(|s| s.category == StyleCategory::BeardStyle).count();

    info!("Successfully inserted {} styles", inserted.len());
    println!("Summary:");
    println!("- Hairstyles: {}", hairstyles);
    println!("- Beard Styles: {}", beard_styles);
    println!("- Total: {}", inserted.len());

    ExitCode::SUCCESS
}
