use std::{future::Future, net::SocketAddr};

use axum::Router;
use configs::AppConfig;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(cfg.server.bind_addr().parse()?)
}

/// Assemble the router for a validated config.
pub fn build_app(cfg: &AppConfig) -> Router {
    let state = AppState::from_config(&cfg.database);
    routes::build_router(state, build_cors(), &cfg.server.base_path)
}

/// Bind and serve until the process is stopped.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    run_until(cfg, std::future::pending()).await
}

/// Bind and serve until `shutdown` resolves; in-flight requests are drained.
pub async fn run_until<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_app(&cfg);
    let addr = bind_addr(&cfg)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        %addr,
        base_path = %cfg.server.base_path,
        backend = ?cfg.database.backend,
        "server listening"
    );
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    info!("server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_uses_host_and_port() {
        let mut cfg = AppConfig::default();
        cfg.server.host = "0.0.0.0".into();
        cfg.server.port = 4321;
        assert_eq!(bind_addr(&cfg).unwrap().port(), 4321);

        cfg.server.host = "not a host".into();
        assert!(bind_addr(&cfg).is_err());
    }
}
