//! Hospital rooms: JSON CRUD over a single SQLite table.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::Settings;
pub use error::{AppError, ConfigError};
pub use model::{Room, RoomInput};
pub use routes::{app, common_routes, common_routes_with_ready, room_routes};
pub use service::{RoomService, RoomValidator};
pub use state::AppState;
pub use store::RoomStore;
