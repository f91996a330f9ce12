//! Axum HTTP handlers for the web server
//!
//! Each handler validates its own inputs in the order path id, body, lookup. Method
//! mismatches never reach a handler; the router sends them to [`method_not_allowed`].

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    Json,
};
use serde::Serialize;

use super::extract::ClientIdParam;
use crate::domain::client::{decode_client, Client};
use crate::{errors::AppError, AppState};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

pub async fn list_clients(State(state): State<AppState>) -> Json<Vec<Client>> {
    Json(state.store.list().await)
}

pub async fn get_client(
    State(state): State<AppState>,
    ClientIdParam(id): ClientIdParam,
) -> Result<Json<Client>, AppError> {
    let client = state
        .store
        .get(id)
        .await
        .ok_or(AppError::ClientNotFound(id))?;
    Ok(Json(client))
}

pub async fn create_client(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Client>), AppError> {
    let client = decode_client(&body)?;
    let created = state.store.create(client).await;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_client(
    State(state): State<AppState>,
    ClientIdParam(id): ClientIdParam,
    body: Bytes,
) -> Result<Json<Client>, AppError> {
    let replacement = decode_client(&body)?;
    let updated = state
        .store
        .update_name(id, replacement.name)
        .await
        .ok_or(AppError::ClientNotFound(id))?;
    Ok(Json(updated))
}

pub async fn delete_client(
    State(state): State<AppState>,
    ClientIdParam(id): ClientIdParam,
) -> Result<StatusCode, AppError> {
    if !state.store.delete(id).await {
        return Err(AppError::ClientNotFound(id));
    }
    Ok(StatusCode::OK)
}
