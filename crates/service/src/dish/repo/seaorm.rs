use std::sync::Arc;

use uuid::Uuid;

use common::types::{DatabaseState, Dish};
use models::dish::{self, DishFields};

use crate::db::DbHandle;
use crate::dish::domain::from_model;
use crate::dish::repository::DishRepository;
use crate::errors::ServiceError;

/// SeaORM-backed repository; every call goes through the lazily connected handle.
pub struct SeaOrmDishRepository {
    pub db: Arc<DbHandle>,
}

impl SeaOrmDishRepository {
    pub fn new(db: Arc<DbHandle>) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl DishRepository for SeaOrmDishRepository {
    async fn list(&self) -> Result<Vec<Dish>, ServiceError> {
        let db = self.db.get().await?;
        let rows = dish::list_newest_first(db).await?;
        Ok(rows.into_iter().map(from_model).collect())
    }

    async fn count(&self) -> Result<u64, ServiceError> {
        Ok(dish::count(self.db.get().await?).await?)
    }

    async fn insert(&self, fields: DishFields) -> Result<Dish, ServiceError> {
        let created = dish::create(self.db.get().await?, fields).await?;
        Ok(from_model(created))
    }

    async fn insert_many(&self, all: Vec<DishFields>) -> Result<u64, ServiceError> {
        Ok(dish::create_many(self.db.get().await?, all).await?)
    }

    async fn find_at(&self, offset: u64) -> Result<Option<Dish>, ServiceError> {
        let found = dish::find_at_offset(self.db.get().await?, offset).await?;
        Ok(found.map(from_model))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        Ok(dish::delete(self.db.get().await?, id).await?)
    }

    async fn delete_all(&self) -> Result<u64, ServiceError> {
        Ok(dish::delete_all(self.db.get().await?).await?)
    }

    async fn connection_state(&self) -> Result<DatabaseState, ServiceError> {
        self.db.state().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn seaorm_repository_roundtrip() -> anyhow::Result<()> {
        let Some(handle) = get_db().await else { return Ok(()) };
        let repo = SeaOrmDishRepository::new(handle);

        let name = format!("repo_dish_{}", Uuid::new_v4());
        let created = repo.insert(DishFields::parse(Some(name.as_str()), Some("desc"), None)?).await?;
        assert_eq!(created.name, name);
        assert_eq!(repo.connection_state().await?, DatabaseState::Connected);

        let listed = repo.list().await?;
        assert!(listed.iter().any(|d| d.id == created.id));
        assert!(repo.count().await? >= 1);

        assert!(repo.delete(created.id).await?);
        assert!(!repo.list().await?.iter().any(|d| d.id == created.id));

        // kept in one test so offsets are not shifted by a concurrent writer
        check_ordering(&repo).await
    }

    async fn check_ordering(repo: &SeaOrmDishRepository) -> anyhow::Result<()> {
        let prefix = format!("repo_order_{}_", Uuid::new_v4().simple());
        let batch = ["A", "B", "C"]
            .iter()
            .map(|n| DishFields::parse(Some(format!("{prefix}{n}").as_str()), None, None))
            .collect::<Result<Vec<_>, _>>()?;
        let mut ids = Vec::new();
        for fields in batch {
            ids.push(repo.insert(fields).await?.id);
        }

        let listed = repo.list().await?;
        let ours: Vec<Uuid> = listed.iter().filter(|d| d.name.starts_with(&prefix)).map(|d| d.id).collect();
        assert_eq!(ours, vec![ids[2], ids[1], ids[0]]);

        let mut sorted: Vec<Uuid> = listed.iter().map(|d| d.id).collect();
        sorted.sort();
        assert_eq!(repo.find_at(0).await?.map(|d| d.id), sorted.first().copied());
        assert_eq!(repo.find_at(sorted.len() as u64 - 1).await?.map(|d| d.id), sorted.last().copied());

        for id in ids {
            repo.delete(id).await?;
        }
        Ok(())
    }
}
