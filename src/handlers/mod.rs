//! HTTP handlers for room CRUD.

pub mod rooms;
