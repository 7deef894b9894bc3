use std::sync::Arc;

use rand::Rng;
use tracing::{info, instrument};
use uuid::Uuid;

use common::types::{DatabaseState, Dish, NewDish};

use super::domain::fields_from_input;
use super::repository::DishRepository;
use crate::errors::ServiceError;

/// Dish business service independent of web framework.
#[derive(Clone)]
pub struct DishService {
    repo: Arc<dyn DishRepository>,
}

impl DishService {
    pub fn new(repo: Arc<dyn DishRepository>) -> Self { Self { repo } }

    pub fn repository(&self) -> &Arc<dyn DishRepository> { &self.repo }

    pub async fn list(&self) -> Result<Vec<Dish>, ServiceError> {
        self.repo.list().await
    }

    pub async fn count(&self) -> Result<u64, ServiceError> {
        self.repo.count().await
    }

    /// Validate and store a new dish. Nothing is written when validation fails.
    #[instrument(skip(self, input))]
    pub async fn create(&self, input: &NewDish) -> Result<Dish, ServiceError> {
        let fields = fields_from_input(input)?;
        let dish = self.repo.insert(fields).await?;
        info!(dish_id = %dish.id, name = %dish.name, "dish_created");
        Ok(dish)
    }

    /// Uniformly random dish: draw an offset in `[0, count)` and read the dish
    /// at that position in id order.
    pub async fn random(&self) -> Result<Dish, ServiceError> {
        let count = self.repo.count().await?;
        if count == 0 {
            return Err(ServiceError::NotFound("no dishes found".into()));
        }
        let offset = rand::thread_rng().gen_range(0..count);
        self.repo
            .find_at(offset)
            .await?
            .ok_or_else(|| ServiceError::NotFound("no dishes found".into()))
    }

    /// Remove a dish by its textual id. Ids that do not parse cannot exist and
    /// are reported as not found.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        let id = Uuid::parse_str(id.trim()).map_err(|_| ServiceError::not_found("dish"))?;
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found("dish"));
        }
        info!(dish_id = %id, "dish_deleted");
        Ok(())
    }

    pub async fn database_state(&self) -> Result<DatabaseState, ServiceError> {
        self.repo.connection_state().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use crate::dish::repo::memory::MemoryDishRepository;

    fn service() -> DishService {
        DishService::new(Arc::new(MemoryDishRepository::new()))
    }

    #[tokio::test]
    async fn create_assigns_id_and_timestamp() {
        let svc = service();
        let before = chrono::Utc::now();
        let d = svc.create(&NewDish::new("  Beef Tacos ").with_cuisine("Mexican")).await.unwrap();
        assert_eq!(d.name, "Beef Tacos");
        assert!(d.created_at >= before && d.created_at <= chrono::Utc::now());
        assert_eq!(svc.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn create_without_name_persists_nothing() {
        let svc = service();
        let err = svc.create(&NewDish::default()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        let err = svc.create(&NewDish::new("   ")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert_eq!(svc.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn roundtrip_keeps_absent_description() {
        let svc = service();
        svc.create(&NewDish::new("X").with_cuisine("Italian")).await.unwrap();
        let listed = svc.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "X");
        assert_eq!(listed[0].cuisine.as_deref(), Some("Italian"));
        assert_eq!(listed[0].description, None);
    }

    #[tokio::test]
    async fn random_on_empty_is_not_found() {
        assert!(matches!(service().random().await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn scenario_list_delete_random() {
        let svc = service();
        let a = svc.create(&NewDish::new("A")).await.unwrap();
        let b = svc.create(&NewDish::new("B")).await.unwrap();
        let c = svc.create(&NewDish::new("C")).await.unwrap();

        let ids: Vec<Uuid> = svc.list().await.unwrap().iter().map(|d| d.id).collect();
        assert_eq!(ids, [c.id, b.id, a.id]);

        svc.delete(&b.id.to_string()).await.unwrap();
        let ids: Vec<Uuid> = svc.list().await.unwrap().iter().map(|d| d.id).collect();
        assert_eq!(ids, [c.id, a.id]);

        for _ in 0..200 {
            let picked = svc.random().await.unwrap();
            assert_ne!(picked.id, b.id);
            assert!(picked.id == a.id || picked.id == c.id);
        }
    }

    #[tokio::test]
    async fn delete_unknown_or_malformed_id_leaves_collection() {
        let svc = service();
        svc.create(&NewDish::new("A")).await.unwrap();
        let err = svc.delete(&Uuid::new_v4().to_string()).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        let err = svc.delete("not-an-id").await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert_eq!(svc.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn random_pick_is_roughly_uniform() {
        let svc = service();
        for n in ["A", "B", "C", "D"] {
            svc.create(&NewDish::new(n)).await.unwrap();
        }
        let trials = 4000;
        let mut hits: HashMap<String, u32> = HashMap::new();
        for _ in 0..trials {
            *hits.entry(svc.random().await.unwrap().name).or_default() += 1;
        }
        assert_eq!(hits.len(), 4);
        for (name, n) in hits {
            let freq = n as f64 / trials as f64;
            assert!((0.18..0.32).contains(&freq), "{name} picked with frequency {freq}");
        }
    }
}
