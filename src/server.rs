//! HTTP server initialization and runtime setup.
//!
//! Handles the storage pool, component wiring, the pool monitor and the Axum
//! server lifecycle including graceful drain.

use crate::application::services::{AliasAllocator, AllocatorSettings, UrlService};
use crate::config::Config;
use crate::infrastructure::persistence::{Database, DatabaseSettings};
use crate::infrastructure::pool_monitor::run_pool_monitor;
use crate::routes::app_router;
use crate::shutdown::{Shutdown, wait_for_signal};
use crate::state::AppState;
use crate::utils::alias_generator::RandomAliasGenerator;

use anyhow::{Context, Result};
use axum::Router;
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Storage connection pool and schema
/// - Alias generator, allocator and URL service
/// - Pool monitor (unless disabled)
/// - Axum HTTP server
///
/// On SIGINT/SIGTERM the listener stops accepting and in-flight requests get
/// `SHUTDOWN_TIMEOUT_SECS` to finish. The pool is closed last.
///
/// # Errors
///
/// Returns an error if:
/// - Storage connection or schema creation fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let database = Database::connect(&DatabaseSettings::from_config(&config))
        .await
        .context("Failed to connect to storage")?;
    tracing::info!(backend = database.backend(), "Connected to storage");

    let repository = database.url_repository(config.storage_timeout());
    repository
        .init_schema()
        .await
        .context("Failed to initialize storage schema")?;

    let generator = Arc::new(RandomAliasGenerator::new(config.alias_alphabet));
    let allocator = AliasAllocator::new(
        repository.clone(),
        generator,
        AllocatorSettings {
            alias_length: config.alias_length,
            max_attempts: config.alias_max_attempts,
        },
    );
    let url_service = Arc::new(UrlService::new(repository, allocator));
    let state = AppState::new(url_service);

    let shutdown = Shutdown::new();
    let monitor = config.pool_stats_interval().map(|interval| {
        tokio::spawn(run_pool_monitor(
            database.clone(),
            interval,
            shutdown.subscribe(),
        ))
    });

    let app = app_router(state, config.http_timeout());

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    let served = serve_until_signal(listener, app, config.shutdown_timeout()).await;

    shutdown.trigger();
    if let Some(handle) = monitor
        && let Err(e) = handle.await
    {
        tracing::warn!(error = %e, "pool monitor task failed");
    }

    database.close().await;
    tracing::info!("Storage pool closed");

    served
}

/// Serves `app` until a shutdown signal, then drains for at most `drain`.
async fn serve_until_signal(listener: TcpListener, app: Router, drain: Duration) -> Result<()> {
    let (stop_tx, stop_rx) = oneshot::channel::<()>();

    let serve = axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = stop_rx.await;
        })
        .into_future();
    tokio::pin!(serve);

    tokio::select! {
        result = &mut serve => {
            return result.context("Server error");
        }
        _ = wait_for_signal() => {}
    }

    tracing::info!(
        drain_secs = drain.as_secs(),
        "Stopped accepting connections, draining in-flight requests"
    );
    let _ = stop_tx.send(());

    match tokio::time::timeout(drain, &mut serve).await {
        Ok(result) => {
            result.context("Server error during drain")?;
            tracing::info!("Drain complete");
        }
        Err(_) => {
            tracing::warn!(
                drain_secs = drain.as_secs(),
                "Drain window elapsed, dropping remaining connections"
            );
        }
    }

    Ok(())
}
