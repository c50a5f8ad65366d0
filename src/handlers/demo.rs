//! Wiring-check endpoints: raw database ping and a random forecast.
//! Neither touches the Person store; they exist to verify service setup.

use axum::{extract::State, http::StatusCode, Json};
use chrono::{Days, NaiveDate, Utc};
use rand::Rng;
use serde::Serialize;
use sqlx::ConnectOptions;
use std::str::FromStr;

use crate::state::AppState;

const SUMMARIES: [&str; 10] = [
    "Freezing",
    "Bracing",
    "Chilly",
    "Cool",
    "Mild",
    "Warm",
    "Balmy",
    "Hot",
    "Sweltering",
    "Scorching",
];

/// Opens a fresh connection outside the pool so the check exercises the
/// configured connection string itself.
pub async fn pingdb(State(state): State<AppState>) -> (StatusCode, String) {
    let opts = match sqlx::postgres::PgConnectOptions::from_str(&state.database_url) {
        Ok(opts) => opts,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error: no connection to DB - {}", e),
            )
        }
    };
    match opts.connect().await {
        Ok(_) => (StatusCode::OK, "Successfully connected to DB".into()),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Error: no connection to DB - {}", e),
        ),
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherForecast {
    pub date: NaiveDate,
    pub temperature_c: i32,
    pub temperature_f: i32,
    pub summary: &'static str,
}

/// Five random forecasts for the next five days.
pub async fn weather_forecast() -> Json<Vec<WeatherForecast>> {
    let mut rng = rand::thread_rng();
    let today = Utc::now().date_naive();
    let forecast = (1..=5u64)
        .map(|offset| {
            let temperature_c = rng.gen_range(-20..55);
            WeatherForecast {
                date: today + Days::new(offset),
                temperature_c,
                temperature_f: 32 + (temperature_c as f64 / 0.5556) as i32,
                summary: SUMMARIES[rng.gen_range(0..SUMMARIES.len())],
            }
        })
        .collect();
    Json(forecast)
}
