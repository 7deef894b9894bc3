//! Store connection lifecycle.
//!
//! [`DbHandle`] is built once at startup and shared through application
//! state. It connects on first use and keeps the pool for the process
//! lifetime.

use configs::DatabaseConfig;
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;
use tracing::{error, info};

use common::types::DatabaseState;

use crate::errors::ServiceError;

pub struct DbHandle {
    cfg: DatabaseConfig,
    run_migrations: bool,
    conn: OnceCell<DatabaseConnection>,
}

impl DbHandle {
    /// A handle that runs pending migrations right after connecting.
    pub fn new(cfg: DatabaseConfig) -> Self {
        Self { cfg, run_migrations: true, conn: OnceCell::new() }
    }

    pub fn without_migrations(mut self) -> Self {
        self.run_migrations = false;
        self
    }

    /// Whether a connection has been established yet.
    pub fn is_connected(&self) -> bool {
        self.conn.initialized()
    }

    /// Shared connection, established on first call. A failed attempt is not
    /// cached; the next call tries again.
    pub async fn get(&self) -> Result<&DatabaseConnection, ServiceError> {
        self.conn
            .get_or_try_init(|| async {
                let db = models::db::connect_with_config(&self.cfg).await.map_err(|e| {
                    error!(error = %e, "database connection error");
                    ServiceError::Db(e.to_string())
                })?;
                if self.run_migrations {
                    Migrator::up(&db, None).await.map_err(|e| {
                        error!(error = %e, "database migration failed");
                        ServiceError::Db(e.to_string())
                    })?;
                }
                info!("new database connection established");
                Ok(db)
            })
            .await
    }

    /// Connect if needed, then report whether the pool still answers.
    pub async fn state(&self) -> Result<DatabaseState, ServiceError> {
        let db = self.get().await?;
        Ok(match db.ping().await {
            Ok(()) => DatabaseState::Connected,
            Err(e) => {
                error!(error = %e, "database ping failed");
                DatabaseState::Disconnected
            }
        })
    }
}
