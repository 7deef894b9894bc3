#![cfg(test)]
use std::sync::Arc;

use configs::DatabaseConfig;

use crate::db::DbHandle;

/// Live database handle for repository tests, or `None` when no database is
/// configured (`DATABASE_URL` missing) or `SKIP_DB_TESTS` is set.
pub async fn get_db() -> Option<Arc<DbHandle>> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let url = std::env::var("DATABASE_URL").ok()?;
    let handle = DbHandle::new(DatabaseConfig { url, ..DatabaseConfig::default() });
    match handle.get().await {
        Ok(_) => Some(Arc::new(handle)),
        Err(e) => {
            eprintln!("skip: cannot connect to db: {}", e);
            None
        }
    }
}
