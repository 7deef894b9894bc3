use async_trait::async_trait;
use uuid::Uuid;

use common::types::{DatabaseState, Dish};
use models::dish::DishFields;

use crate::errors::ServiceError;

/// Persistence abstraction for the dish collection.
#[async_trait]
pub trait DishRepository: Send + Sync {
    /// Every dish, newest `created_at` first; ties put the later insert first.
    async fn list(&self) -> Result<Vec<Dish>, ServiceError>;
    async fn count(&self) -> Result<u64, ServiceError>;
    async fn insert(&self, fields: DishFields) -> Result<Dish, ServiceError>;
    async fn insert_many(&self, all: Vec<DishFields>) -> Result<u64, ServiceError>;
    /// Dish at `offset` in ascending-id order.
    async fn find_at(&self, offset: u64) -> Result<Option<Dish>, ServiceError>;
    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError>;
    async fn delete_all(&self) -> Result<u64, ServiceError>;
    async fn connection_state(&self) -> Result<DatabaseState, ServiceError>;
}
