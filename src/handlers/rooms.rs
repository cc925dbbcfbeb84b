//! Room CRUD handlers: create, list, read, update, delete.

use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::model::parse_room_id;
use crate::response::{created, message};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let room_id = state
        .rooms
        .create(&body)
        .await
        .map_err(|e| e.context("Error creating room"))?;
    Ok(created("Room created successfully", room_id))
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rooms = state
        .rooms
        .list()
        .await
        .map_err(|e| e.context("Error fetching rooms"))?;
    Ok(Json(rooms))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let room = state
        .rooms
        .get(&id)
        .await
        .map_err(|e| e.context("Error fetching room"))?;
    Ok(Json(room))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<JsonBody, AppError>,
) -> Result<impl IntoResponse, AppError> {
    // A bad id is reported ahead of a bad body.
    parse_room_id(&id)?;
    let JsonBody(body) = body?;
    state
        .rooms
        .update(&id, &body)
        .await
        .map_err(|e| e.context("Error updating room"))?;
    Ok(message("Room updated successfully"))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state
        .rooms
        .delete(&id)
        .await
        .map_err(|e| e.context("Error deleting room"))?;
    Ok(message("Room deleted successfully"))
}
