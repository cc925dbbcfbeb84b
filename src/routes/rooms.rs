//! Room CRUD routes.

use crate::handlers::rooms::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn room_routes(state: AppState) -> Router {
    Router::new()
        .route("/rooms", get(list).post(create))
        .route("/rooms/:id", get(read).put(update).delete(delete_handler))
        .with_state(state)
}
