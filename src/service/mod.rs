//! RoomService and the room payload validator.

mod crud;
mod validation;
pub use crud::RoomService;
pub use validation::RoomValidator;
