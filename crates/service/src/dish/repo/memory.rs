use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use common::types::{DatabaseState, Dish};
use models::dish::DishFields;

use crate::dish::repository::DishRepository;
use crate::errors::ServiceError;

/// In-memory repository for tests and database-less runs.
/// Dishes are kept in insertion order.
#[derive(Default)]
pub struct MemoryDishRepository {
    dishes: RwLock<Vec<Dish>>,
}

impl MemoryDishRepository {
    pub fn new() -> Self { Self::default() }
}

fn new_dish(fields: DishFields) -> Dish {
    Dish {
        id: Uuid::new_v4(),
        name: fields.name,
        description: fields.description,
        cuisine: fields.cuisine,
        created_at: Utc::now(),
    }
}

#[async_trait::async_trait]
impl DishRepository for MemoryDishRepository {
    async fn list(&self) -> Result<Vec<Dish>, ServiceError> {
        let dishes = self.dishes.read().await;
        let mut out: Vec<Dish> = dishes.iter().rev().cloned().collect();
        // stable: equal timestamps keep latest-insert-first
        out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(out)
    }

    async fn count(&self) -> Result<u64, ServiceError> {
        Ok(self.dishes.read().await.len() as u64)
    }

    async fn insert(&self, fields: DishFields) -> Result<Dish, ServiceError> {
        let dish = new_dish(fields);
        self.dishes.write().await.push(dish.clone());
        Ok(dish)
    }

    async fn insert_many(&self, all: Vec<DishFields>) -> Result<u64, ServiceError> {
        let mut dishes = self.dishes.write().await;
        let n = all.len() as u64;
        dishes.extend(all.into_iter().map(new_dish));
        Ok(n)
    }

    async fn find_at(&self, offset: u64) -> Result<Option<Dish>, ServiceError> {
        let dishes = self.dishes.read().await;
        let mut by_id: Vec<&Dish> = dishes.iter().collect();
        by_id.sort_by_key(|d| d.id);
        Ok(usize::try_from(offset).ok().and_then(|i| by_id.get(i)).map(|d| (*d).clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        let mut dishes = self.dishes.write().await;
        let before = dishes.len();
        dishes.retain(|d| d.id != id);
        Ok(dishes.len() != before)
    }

    async fn delete_all(&self) -> Result<u64, ServiceError> {
        let mut dishes = self.dishes.write().await;
        let n = dishes.len() as u64;
        dishes.clear();
        Ok(n)
    }

    async fn connection_state(&self) -> Result<DatabaseState, ServiceError> {
        Ok(DatabaseState::Connected)
    }
}
