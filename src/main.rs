use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use glam_advisor::config::Settings;
use glam_advisor::core::Recommender;
use glam_advisor::routes::{self, AppState};
use glam_advisor::services::{
    seed::sample_styles, FaceShapeClassifier, HttpClassifier, InMemoryCatalog, PostgresCatalog, StyleCatalog,
    TokenVerifier,
};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, error, warn};
use tracing_subscriber::EnvFilter;

fn init_logging(level: &str, format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match format {
        "pretty" => subscriber.pretty().init(),
        "compact" => subscriber.compact().init(),
        _ => subscriber.json().init(),
    }
}

fn startup_error(context: &str, err: impl std::fmt::Display) -> io::Error {
    error!("{}: {}", context, err);
    io::Error::new(io::ErrorKind::Other, format!("{}: {}", context, err))
}

async fn build_catalog(settings: &Settings) -> io::Result<Arc<dyn StyleCatalog>> {
    let db = &settings.database;

    match db.url.as_deref().filter(|url| !url.is_empty()) {
        Some(url) => {
            let catalog = PostgresCatalog::from_settings(
                url,
                db.max_connections,
                db.min_connections,
                db.acquire_timeout_secs,
                db.idle_timeout_secs,
            )
            .await
            .map_err(|e| startup_error("Failed to connect to PostgreSQL", e))?;

            info!("PostgreSQL catalog initialized (max: {} connections)", db.max_connections.unwrap_or(10));
            Ok(Arc::new(catalog))
        }
        None => {
            warn!("No database URL configured, serving the bundled sample catalog from memory");
            let catalog = InMemoryCatalog::with_styles(sample_styles())
                .map_err(|e| startup_error("Failed to load sample catalog", e))?;
            Ok(Arc::new(catalog))
        }
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load();

    // Bring logging up even when the configuration is broken
    match &settings {
        Ok(settings) => init_logging(&settings.logging.level, &settings.logging.format),
        Err(_) => init_logging("info", "json"),
    }

    info!("Starting Glam Advisor recommendation service...");

    let settings = settings.map_err(|e| startup_error("Failed to load configuration", e))?;

    info!("Configuration loaded successfully");

    let catalog = build_catalog(&settings).await?;

    let classifier = HttpClassifier::new(
        settings.classifier.base_url.clone(),
        Duration::from_secs(settings.classifier.timeout_secs),
    )
    .map_err(|e| startup_error("Failed to create face analysis client", e))?;

    info!(
        "Face analysis client targeting {} ({}s timeout)",
        settings.classifier.base_url,
        classifier.timeout().as_secs()
    );

    let classifier: Arc<dyn FaceShapeClassifier> = Arc::new(classifier);
    let recommender = Recommender::new(classifier, catalog)
        .with_max_results(settings.analysis.max_results);

    let app_state = AppState {
        recommender,
        verifier: TokenVerifier::new(&settings.auth.jwt_secret),
        max_upload_bytes: settings.analysis.max_upload_bytes,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
