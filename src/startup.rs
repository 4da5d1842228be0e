use axum::{http::HeaderValue, Router};
use tower_http::cors::{Any, CorsLayer};

use crate::{config::Config, error::config::ConfigError, error::Error, places::PlacesClient};

/// Build the places provider client with the configured credentials
pub fn build_places_client(config: &Config) -> PlacesClient {
    let mut builder = PlacesClient::builder()
        .api_key(&config.places_api_key)
        .region(config.search_region.clone());

    if let Some(url) = &config.places_api_url {
        builder = builder.base_url(url);
    }

    builder.build()
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Build the CORS layer for the configured origin
///
/// Without a configured origin the layer stays restrictive, which is what
/// same-origin deployments want.
pub fn build_cors_layer(config: &Config) -> Result<CorsLayer, Error> {
    let Some(origin) = &config.cors_origin else {
        return Ok(CorsLayer::new());
    };

    let origin = origin
        .parse::<HeaderValue>()
        .map_err(|_| ConfigError::InvalidEnvValue {
            var: "CORS_ORIGIN".to_string(),
            reason: format!("{} is not a valid origin", origin),
        })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any))
}

/// Bind the configured address and serve the application router
pub async fn serve(config: &Config, app: Router) -> Result<(), Error> {
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;

    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
