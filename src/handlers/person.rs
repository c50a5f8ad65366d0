//! Person CRUD handlers: list, read, create, update, delete.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::error::AppError;
use crate::person::Person;
use crate::state::AppState;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Person>>, AppError> {
    let people = state.store.list().await?;
    Ok(Json(people))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Person>, AppError> {
    let person = state
        .store
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(id.to_string()))?;
    Ok(Json(person))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Person>,
) -> Result<impl IntoResponse, AppError> {
    let created = state.store.insert(body).await?;
    let location = format!("/api/person/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

/// Full replacement keyed by the path id. Optimistic: no existence
/// pre-check; a conflict from the store triggers a re-check, and only a
/// genuinely vanished row becomes 404 — anything else re-raises.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<Person>,
) -> Result<StatusCode, AppError> {
    if id != body.id {
        return Err(AppError::BadRequest(
            "path id does not match body id".into(),
        ));
    }
    match state.store.replace(&body).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(AppError::Conflict(msg)) => {
            if state.store.exists(id).await? {
                Err(AppError::Conflict(msg))
            } else {
                Err(AppError::NotFound(id.to_string()))
            }
        }
        Err(e) => Err(e),
    }
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let person = state
        .store
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(id.to_string()))?;
    state.store.remove(person.id).await?;
    Ok(StatusCode::NO_CONTENT)
}
