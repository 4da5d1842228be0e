use std::net::SocketAddr;

use crate::error::config::ConfigError;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Runtime configuration, read once at startup from environment variables.
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub places_api_key: String,
    /// Overrides the provider base URL, mainly for local test doubles.
    pub places_api_url: Option<String>,
    /// Region bias passed through to provider searches, e.g. `es`.
    pub search_region: Option<String>,
    /// Allowed CORS origin; absent means same-origin deployments only.
    pub cors_origin: Option<String>,
    pub bind_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = optional("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse()
            .map_err(|_| ConfigError::InvalidEnvValue {
                var: "BIND_ADDR".to_string(),
                reason: format!("{} is not a socket address", bind_addr),
            })?;

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            places_api_key: required("PLACES_API_KEY")?,
            places_api_url: optional("PLACES_API_URL"),
            search_region: optional("SEARCH_REGION"),
            cors_origin: optional("CORS_ORIGIN"),
            bind_addr,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}
