//! Room record as stored and served, plus the typed write payload.

use crate::error::AppError;
use serde::Serialize;
use serde_json::Number;
use sqlx::encode::{Encode, IsNull};
use sqlx::error::BoxDynError;
use sqlx::sqlite::{Sqlite, SqliteTypeInfo};
use sqlx::Database;

/// One row of `HospitalRoom`. Serializes with the column names as JSON keys.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Room {
    #[serde(rename = "RoomID")]
    #[sqlx(rename = "RoomID")]
    pub room_id: i64,
    #[serde(rename = "RoomNumber")]
    #[sqlx(rename = "RoomNumber")]
    pub room_number: String,
    #[serde(rename = "Type")]
    #[sqlx(rename = "Type")]
    pub room_type: String,
    /// Selected as text so integer and real cells both decode without loss.
    #[serde(rename = "Capacity")]
    #[sqlx(rename = "Capacity", try_from = "String")]
    pub capacity: Capacity,
    #[serde(rename = "Status")]
    #[sqlx(rename = "Status")]
    pub status: String,
}

/// The four writable fields. Only produced by [`crate::service::RoomValidator::parse`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomInput {
    #[serde(rename = "RoomNumber")]
    pub room_number: String,
    #[serde(rename = "Type")]
    pub room_type: String,
    #[serde(rename = "Capacity")]
    pub capacity: Capacity,
    #[serde(rename = "Status")]
    pub status: String,
}

impl Room {
    pub fn with_input(room_id: i64, input: RoomInput) -> Self {
        Room {
            room_id,
            room_number: input.room_number,
            room_type: input.room_type,
            capacity: input.capacity,
            status: input.status,
        }
    }
}

/// A positive JSON number. Integers stay integers; `2.5` stays `2.5`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Capacity(Number);

impl Capacity {
    /// `None` unless `n` is finite and strictly greater than zero.
    pub fn new(n: Number) -> Option<Self> {
        let f = n.as_f64()?;
        (f.is_finite() && f > 0.0).then_some(Capacity(n))
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.0.as_i64()
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.0.as_f64()
    }
}

impl From<i64> for Capacity {
    fn from(n: i64) -> Self {
        Capacity(n.into())
    }
}

impl TryFrom<String> for Capacity {
    type Error = serde_json::Error;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        serde_json::from_str::<Number>(text.trim()).map(Capacity)
    }
}

impl<'q> Encode<'q, Sqlite> for Capacity {
    fn encode_by_ref(
        &self,
        buf: &mut <Sqlite as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, BoxDynError> {
        match (self.0.as_i64(), self.0.as_f64()) {
            (Some(n), _) => <i64 as Encode<Sqlite>>::encode_by_ref(&n, buf),
            (None, Some(f)) => <f64 as Encode<Sqlite>>::encode_by_ref(&f, buf),
            (None, None) => Err(format!("capacity {} is not representable", self.0).into()),
        }
    }
}

impl sqlx::Type<Sqlite> for Capacity {
    fn type_info() -> SqliteTypeInfo {
        <f64 as sqlx::Type<Sqlite>>::type_info()
    }
}

/// Parse the `:id` path segment with JavaScript `Number()` rules.
///
/// Returns `Ok(Some(id))` for an integral number, `Ok(None)` for a number that
/// cannot be a RoomID (`1.5`, `Infinity`, out of range), and `InvalidId` for
/// text that is not a number at all.
pub fn parse_room_id(raw: &str) -> Result<Option<i64>, AppError> {
    if raw.is_empty() {
        return Err(AppError::InvalidId);
    }
    let s = raw.trim();
    // Blank text converts to 0.
    if s.is_empty() {
        return Ok(Some(0));
    }
    if let Ok(n) = s.parse::<i64>() {
        return Ok(Some(n));
    }
    match s {
        "Infinity" | "+Infinity" | "-Infinity" => return Ok(None),
        _ => {}
    }
    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = s.strip_prefix(prefix) {
            if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
                return Err(AppError::InvalidId);
            }
            return Ok(i64::from_str_radix(digits, radix).ok());
        }
    }
    // Rust also accepts inf/nan spellings that are not numbers in JavaScript.
    if !s.bytes().all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-')) {
        return Err(AppError::InvalidId);
    }
    let n: f64 = s.parse().map_err(|_| AppError::InvalidId)?;
    if n.is_finite() && n.fract() == 0.0 && n >= i64::MIN as f64 && n < i64::MAX as f64 {
        Ok(Some(n as i64))
    } else {
        Ok(None)
    }
}
