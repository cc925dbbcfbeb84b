//! Success bodies for write operations.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct MessageBody {
    pub message: &'static str,
}

#[derive(Serialize, Debug)]
pub struct CreatedBody {
    pub message: &'static str,
    #[serde(rename = "RoomID")]
    pub room_id: i64,
}

pub fn created(message: &'static str, room_id: i64) -> (StatusCode, Json<CreatedBody>) {
    (StatusCode::CREATED, Json(CreatedBody { message, room_id }))
}

pub fn message(message: &'static str) -> (StatusCode, Json<MessageBody>) {
    (StatusCode::OK, Json(MessageBody { message }))
}
