//! Process configuration, loaded once at startup from the environment.

use std::net::SocketAddr;

use crate::error::AppError;

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// PostgreSQL connection string (`DATABASE_URL`).
    pub database_url: String,
    /// Listen address (`BIND_ADDR`, default `0.0.0.0:3000`).
    pub bind_addr: SocketAddr,
    /// Pool size (`PG_MAX_CONNECTIONS`, default 5).
    pub max_connections: u32,
}

impl AppConfig {
    /// Reads configuration from the environment. `.env` files are honored
    /// when the caller has run `dotenvy::dotenv()` beforehand.
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "postgres://localhost/people".into());
        let bind_addr = std::env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".into())
            .parse()
            .map_err(|e| AppError::BadRequest(format!("invalid BIND_ADDR: {}", e)))?;
        let max_connections = std::env::var("PG_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);
        Ok(AppConfig {
            database_url,
            bind_addr,
            max_connections,
        })
    }
}
