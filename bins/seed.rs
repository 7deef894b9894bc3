use std::sync::Arc;

use dotenvy::dotenv;
use service::db::DbHandle;
use service::dish::repo::seaorm::SeaOrmDishRepository;
use service::dish::{seed, DishService};
use tracing::{error, info};

/// Wipe the dish collection and insert the sample dishes.
async fn run() -> anyhow::Result<u64> {
    let cfg = configs::AppConfig::load_and_validate()?;
    seed::ensure_persistent(cfg.database.backend)?;

    info!(service = "seed", event = "connect", "connecting to database");
    let handle = Arc::new(DbHandle::new(cfg.database));
    handle.get().await?;

    let dishes = DishService::new(Arc::new(SeaOrmDishRepository::new(handle)));
    Ok(seed::reseed(&dishes).await?)
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    dotenv().ok();
    common::utils::logging::init_logging_from_env();

    match run().await {
        Ok(added) => {
            info!(service = "seed", event = "done", added, "successfully added {added} dishes");
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service = "seed", event = "failed", error = %e, "error seeding database");
            std::process::ExitCode::FAILURE
        }
    }
}
