//! Common routes: health, version, and the demo wiring checks.

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::handlers::demo::{pingdb, weather_forecast};
use crate::state::AppState;

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GET /health, GET /version, GET /pingdb, GET /weatherforecast.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/version", get(version))
        .route("/pingdb", get(pingdb))
        .route("/weatherforecast", get(weather_forecast))
        .with_state(state)
}
