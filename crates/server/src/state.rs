use std::sync::Arc;

use configs::{DatabaseConfig, StoreBackend};
use service::db::DbHandle;
use service::dish::repo::{memory::MemoryDishRepository, seaorm::SeaOrmDishRepository};
use service::dish::{DishRepository, DishService};

/// Shared per-process state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub dishes: DishService,
}

impl AppState {
    pub fn new(dishes: DishService) -> Self { Self { dishes } }

    /// State backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(DishService::new(Arc::new(MemoryDishRepository::new())))
    }

    /// Pick the store from config. The database handle connects on first use.
    pub fn from_config(cfg: &DatabaseConfig) -> Self {
        let repo: Arc<dyn DishRepository> = match cfg.backend {
            StoreBackend::Memory => Arc::new(MemoryDishRepository::new()),
            StoreBackend::Postgres => {
                Arc::new(SeaOrmDishRepository::new(Arc::new(DbHandle::new(cfg.clone()))))
            }
        };
        Self::new(DishService::new(repo))
    }
}
