//! Shared application state for all routes.

use crate::service::RoomService;
use crate::store::RoomStore;

#[derive(Clone, Debug)]
pub struct AppState {
    pub rooms: RoomService,
}

impl AppState {
    pub fn new(store: RoomStore) -> Self {
        Self {
            rooms: RoomService::new(store),
        }
    }
}
