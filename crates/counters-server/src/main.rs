//! Counter service binary.
//!
//! - Resource endpoint: /counters/{name} (POST create, PUT increment, GET read)
//! - Ops: /healthz, /readyz, /metrics
//! - Config: $COUNTERS_CONFIG (default `counters.yaml`, defaults if absent)
//! - Graceful shutdown on Ctrl+C / SIGTERM, bounded by server.shutdown_grace_ms

use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Notify;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use counters_server::{app_state::AppState, config, router};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let path = std::env::var("COUNTERS_CONFIG").unwrap_or_else(|_| "counters.yaml".into());
    let cfg = config::load_or_default(&path).expect("config load failed");
    let listen = cfg.server.listen_addr().expect("server.listen validated at load");
    let grace = Duration::from_millis(cfg.server.shutdown_grace_ms);

    let state = AppState::new(cfg);
    let app = router::build_router(state.clone());

    tracing::info!(%listen, "counters-server starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    let shutdown = Arc::new(Notify::new());
    let serve = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state, Arc::clone(&shutdown)));

    tokio::select! {
        res = serve.into_future() => res.expect("server failed"),
        _ = async {
            shutdown.notified().await;
            tokio::time::sleep(grace).await;
        } => {
            tracing::warn!(grace_ms = grace.as_millis() as u64, "shutdown grace elapsed, dropping open connections");
        }
    }
    tracing::info!("counters-server stopped");
}

async fn shutdown_signal(state: AppState, shutdown: Arc<Notify>) {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    state.set_draining();
    shutdown.notify_one();
    tracing::info!("signal received, draining");
}
