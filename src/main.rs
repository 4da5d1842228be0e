use savora::{
    config::Config, error::Error, model::app::AppState, router, startup, util::jwt::TokenIssuer,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        eprintln!("Startup error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), Error> {
    let db = startup::connect_to_database(&config).await?;
    let places = startup::build_places_client(&config);
    let tokens = TokenIssuer::new(&config.jwt_secret);
    let cors = startup::build_cors_layer(&config)?;

    tracing::info!("Starting server");

    let app = router::routes()
        .with_state(AppState { db, places, tokens })
        .layer(cors);

    startup::serve(&config, app).await
}
