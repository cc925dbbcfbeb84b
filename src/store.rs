//! `HospitalRoom` table access over a SQLite pool. All values are bound parameters.

use crate::error::AppError;
use crate::model::{Room, RoomInput};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

pub const ROOM_TABLE: &str = "HospitalRoom";

/// AUTOINCREMENT keeps RoomIDs from being reused after the highest row is deleted.
const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS HospitalRoom (
        RoomID INTEGER PRIMARY KEY AUTOINCREMENT,
        RoomNumber TEXT,
        Type TEXT,
        Capacity INTEGER,
        Status TEXT
    )
"#;
const INSERT: &str = "INSERT INTO HospitalRoom (RoomNumber, Type, Capacity, Status) VALUES (?, ?, ?, ?)";
/// Capacity may be stored as INTEGER or REAL; text keeps either exact.
const SELECT_ALL: &str =
    "SELECT RoomID, RoomNumber, Type, CAST(Capacity AS TEXT) AS Capacity, Status FROM HospitalRoom ORDER BY RoomID";
const SELECT_BY_ID: &str =
    "SELECT RoomID, RoomNumber, Type, CAST(Capacity AS TEXT) AS Capacity, Status FROM HospitalRoom WHERE RoomID = ?";
const UPDATE: &str = "UPDATE HospitalRoom SET RoomNumber = ?, Type = ?, Capacity = ?, Status = ? WHERE RoomID = ?";
const DELETE: &str = "DELETE FROM HospitalRoom WHERE RoomID = ?";

/// Handle to the single-file room store. Cheap to clone (shares the pool).
#[derive(Clone, Debug)]
pub struct RoomStore {
    pool: SqlitePool,
}

impl RoomStore {
    /// Open the database at `url`, creating the file if it does not exist.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, AppError> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;
        tracing::info!(url = %url, "opened room store");
        Ok(Self { pool })
    }

    /// Private in-memory store. One connection that never expires, so the data
    /// lives as long as the store.
    pub async fn in_memory() -> Result<Self, AppError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        let store = Self { pool };
        store.ensure_schema().await?;
        Ok(store)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create the `HospitalRoom` table if it does not exist.
    pub async fn ensure_schema(&self) -> Result<(), AppError> {
        tracing::debug!(table = ROOM_TABLE, "ensure table");
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    /// Insert a row and return the RoomID the database assigned.
    pub async fn insert(&self, input: &RoomInput) -> Result<i64, AppError> {
        tracing::debug!(sql = INSERT, params = ?input, "query");
        let result = sqlx::query(INSERT)
            .bind(&input.room_number)
            .bind(&input.room_type)
            .bind(&input.capacity)
            .bind(&input.status)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn list(&self) -> Result<Vec<Room>, AppError> {
        tracing::debug!(sql = SELECT_ALL, "query");
        let rows = sqlx::query_as::<_, Room>(SELECT_ALL)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn get(&self, room_id: i64) -> Result<Option<Room>, AppError> {
        tracing::debug!(sql = SELECT_BY_ID, room_id, "query");
        let row = sqlx::query_as::<_, Room>(SELECT_BY_ID)
            .bind(room_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Overwrite all four fields. Returns the number of rows affected (0 or 1).
    pub async fn update(&self, room_id: i64, input: &RoomInput) -> Result<u64, AppError> {
        tracing::debug!(sql = UPDATE, room_id, params = ?input, "query");
        let result = sqlx::query(UPDATE)
            .bind(&input.room_number)
            .bind(&input.room_type)
            .bind(&input.capacity)
            .bind(&input.status)
            .bind(room_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Returns the number of rows affected (0 or 1).
    pub async fn delete(&self, room_id: i64) -> Result<u64, AppError> {
        tracing::debug!(sql = DELETE, room_id, "query");
        let result = sqlx::query(DELETE)
            .bind(room_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Round trip used by the readiness probe.
    pub async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
