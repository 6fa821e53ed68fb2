use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use mentor_match::config::{LoggingSettings, Settings};
use mentor_match::core::Matcher;
use mentor_match::routes::{self, mentors::AppState};
use mentor_match::services::Catalog;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Initialize logging
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match logging.format.as_str() {
        "pretty" => subscriber.pretty().init(),
        "json" => subscriber.json().init(),
        _ => subscriber.init(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            init_tracing(&LoggingSettings::default());
            error!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Configuration error: {}", e),
            ));
        }
    };

    init_tracing(&settings.logging);

    info!("Starting mentor matching service...");

    // Load catalogs
    let catalog = Catalog::from_settings(&settings.catalog).map_err(|e| {
        error!("Failed to load catalog: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, format!("Catalog error: {}", e))
    })?;

    info!(
        "Catalog loaded ({} students, {} mentors)",
        catalog.students().len(),
        catalog.mentors().len()
    );

    // Initialize matcher over the read-only catalog
    let matcher = Matcher::from_catalog(Arc::new(catalog))
        .with_alternatives(settings.matching.alternatives);

    info!("Matcher initialized with {} alternatives", matcher.alternatives());

    // Build application state
    let app_state = AppState { matcher };

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
