//! Person resource routes. Mounted under `/api` by `app`.

use axum::{routing::get, Router};

use crate::handlers::person::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;

pub fn person_routes(state: AppState) -> Router {
    Router::new()
        .route("/person", get(list).post(create))
        .route(
            "/person/:id",
            get(read).put(update).delete(delete_handler),
        )
        .with_state(state)
}
