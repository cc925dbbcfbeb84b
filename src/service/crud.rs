//! RoomService: validation plus one store call per operation.

use super::RoomValidator;
use crate::error::AppError;
use crate::model::{parse_room_id, Room};
use crate::store::RoomStore;
use serde_json::Value;

#[derive(Clone, Debug)]
pub struct RoomService {
    store: RoomStore,
}

impl RoomService {
    pub fn new(store: RoomStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &RoomStore {
        &self.store
    }

    /// Validate and insert. Returns the new RoomID.
    pub async fn create(&self, body: &Value) -> Result<i64, AppError> {
        let input = RoomValidator::parse(body)?;
        let room_id = self.store.insert(&input).await?;
        tracing::info!(room_id, "room created");
        Ok(room_id)
    }

    /// All rooms in RoomID order. Unbounded.
    pub async fn list(&self) -> Result<Vec<Room>, AppError> {
        self.store.list().await
    }

    pub async fn get(&self, raw_id: &str) -> Result<Room, AppError> {
        let room_id = parse_room_id(raw_id)?.ok_or(AppError::NotFound)?;
        self.store.get(room_id).await?.ok_or(AppError::NotFound)
    }

    /// Full replacement of the four fields. Absence is detected from the rows
    /// affected by the write, not by a prior lookup.
    pub async fn update(&self, raw_id: &str, body: &Value) -> Result<(), AppError> {
        let room_id = parse_room_id(raw_id)?;
        let input = RoomValidator::parse(body)?;
        let room_id = room_id.ok_or(AppError::NotFound)?;
        if self.store.update(room_id, &input).await? == 0 {
            return Err(AppError::NotFound);
        }
        tracing::info!(room_id, "room updated");
        Ok(())
    }

    pub async fn delete(&self, raw_id: &str) -> Result<(), AppError> {
        let room_id = parse_room_id(raw_id)?.ok_or(AppError::NotFound)?;
        if self.store.delete(room_id).await? == 0 {
            return Err(AppError::NotFound);
        }
        tracing::info!(room_id, "room deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    async fn service() -> RoomService {
        RoomService::new(RoomStore::in_memory().await.unwrap())
    }

    fn icu(capacity: i64, status: &str) -> Value {
        json!({"RoomNumber": "101", "Type": "ICU", "Capacity": capacity, "Status": status})
    }

    #[tokio::test]
    async fn create_then_get_returns_input_fields() {
        let svc = service().await;
        let body = icu(2, "Available");
        let id = svc.create(&body).await.unwrap();
        let room = svc.get(&id.to_string()).await.unwrap();
        assert_eq!(room, Room::with_input(id, RoomValidator::parse(&body).unwrap()));
    }

    #[tokio::test]
    async fn fractional_capacity_round_trips() {
        let svc = service().await;
        let body = json!({"RoomNumber": "5", "Type": "Ward", "Capacity": 2.5, "Status": "Open"});
        let id = svc.create(&body).await.unwrap();
        let room = svc.get(&id.to_string()).await.unwrap();
        assert_eq!(room, Room::with_input(id, RoomValidator::parse(&body).unwrap()));
        assert_eq!(room.capacity.as_f64(), Some(2.5));
    }

    #[tokio::test]
    async fn create_rejects_invalid_payload_without_writing() {
        let svc = service().await;
        let err = svc.create(&json!({"RoomNumber": "102"})).await.unwrap_err();
        match err {
            AppError::Validation(errors) => assert_eq!(errors.len(), 3),
            other => panic!("unexpected {other:?}"),
        }
        assert!(svc.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_replaces_all_fields() {
        let svc = service().await;
        let id = svc.create(&icu(2, "Available")).await.unwrap().to_string();
        let replacement = json!({"RoomNumber": "9B", "Type": "Ward", "Capacity": 6, "Status": "Closed"});
        svc.update(&id, &replacement).await.unwrap();

        let room = svc.get(&id).await.unwrap();
        let expected = Room::with_input(id.parse().unwrap(), RoomValidator::parse(&replacement).unwrap());
        assert_eq!(room, expected);
        assert_eq!(serde_json::to_value(&room).unwrap()["RoomNumber"], "9B");
    }

    #[tokio::test]
    async fn update_validates_before_reporting_absence() {
        let svc = service().await;
        let err = svc.update("77", &json!({})).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        let err = svc.update("1.5", &json!({})).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let err = svc.update("77", &icu(1, "Open")).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound));
        let err = svc.update("1.5", &icu(1, "Open")).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound));
    }

    #[tokio::test]
    async fn non_numeric_id_is_invalid_for_every_operation() {
        let svc = service().await;
        assert!(matches!(svc.get("abc").await, Err(AppError::InvalidId)));
        assert!(matches!(svc.update("abc", &icu(1, "Open")).await, Err(AppError::InvalidId)));
        assert!(matches!(svc.update("abc", &json!({})).await, Err(AppError::InvalidId)));
        assert!(matches!(svc.delete("abc").await, Err(AppError::InvalidId)));
    }

    #[tokio::test]
    async fn missing_rooms_are_not_found() {
        let svc = service().await;
        assert!(matches!(svc.get("5").await, Err(AppError::NotFound)));
        assert!(matches!(svc.delete("5").await, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn numeric_forms_without_a_row_are_not_found() {
        let svc = service().await;
        for raw in ["Infinity", "0x10", "  ", "1.5"] {
            assert!(matches!(svc.get(raw).await, Err(AppError::NotFound)), "{raw:?}");
            assert!(matches!(svc.delete(raw).await, Err(AppError::NotFound)), "{raw:?}");
            assert!(matches!(svc.update(raw, &icu(1, "Open")).await, Err(AppError::NotFound)), "{raw:?}");
        }
    }

    #[tokio::test]
    async fn hex_id_addresses_the_same_room() {
        let svc = service().await;
        for _ in 0..16 {
            svc.create(&icu(1, "Open")).await.unwrap();
        }
        assert_eq!(svc.get("0x10").await.unwrap().room_id, 16);
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let svc = service().await;
        let id = svc.create(&icu(2, "Available")).await.unwrap().to_string();
        svc.delete(&id).await.unwrap();
        assert!(matches!(svc.get(&id).await, Err(AppError::NotFound)));
        assert!(matches!(svc.delete(&id).await, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn list_is_in_id_order() {
        let svc = service().await;
        for n in ["301", "302", "303"] {
            svc.create(&json!({"RoomNumber": n, "Type": "Ward", "Capacity": 1, "Status": "Open"}))
                .await
                .unwrap();
        }
        let numbers: Vec<String> = svc.list().await.unwrap().into_iter().map(|r| r.room_number).collect();
        assert_eq!(numbers, vec!["301", "302", "303"]);
    }
}
