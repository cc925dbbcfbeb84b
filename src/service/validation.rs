//! Room payload validation.

use crate::error::AppError;
use crate::model::{Capacity, RoomInput};
use serde_json::Value;

const ROOM_NUMBER_ERROR: &str = "RoomNumber is required and must be a string";
const TYPE_ERROR: &str = "Type is required and must be a string";
const CAPACITY_ERROR: &str = "Capacity is required and must be a positive number";
const STATUS_ERROR: &str = "Status is required and must be a string";

pub struct RoomValidator;

impl RoomValidator {
    /// Check every rule and collect one message per violated field. Empty means valid.
    pub fn validate(body: &Value) -> Vec<String> {
        let mut errors = Vec::new();
        if required_str(body, "RoomNumber").is_none() {
            errors.push(ROOM_NUMBER_ERROR.to_string());
        }
        if required_str(body, "Type").is_none() {
            errors.push(TYPE_ERROR.to_string());
        }
        if capacity(body, "Capacity").is_none() {
            errors.push(CAPACITY_ERROR.to_string());
        }
        if required_str(body, "Status").is_none() {
            errors.push(STATUS_ERROR.to_string());
        }
        errors
    }

    /// Validate and build the typed payload. Extra keys are ignored.
    pub fn parse(body: &Value) -> Result<RoomInput, AppError> {
        match (
            required_str(body, "RoomNumber"),
            required_str(body, "Type"),
            capacity(body, "Capacity"),
            required_str(body, "Status"),
        ) {
            (Some(room_number), Some(room_type), Some(capacity), Some(status)) => Ok(RoomInput {
                room_number: room_number.to_string(),
                room_type: room_type.to_string(),
                capacity,
                status: status.to_string(),
            }),
            _ => Err(AppError::Validation(Self::validate(body))),
        }
    }
}

fn required_str<'a>(body: &'a Value, key: &str) -> Option<&'a str> {
    body.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

fn capacity(body: &Value, key: &str) -> Option<Capacity> {
    match body.get(key)? {
        Value::Number(n) => Capacity::new(n.clone()),
        _ => None,
    }
}
