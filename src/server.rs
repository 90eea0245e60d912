//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, worker spawning, and Axum server lifecycle.

use crate::application::services::{AnalyticsService, LinkService};
use crate::config::Config;
use crate::domain::click_worker::run_click_worker;
use crate::infrastructure::geoip::GeoIpClient;
use crate::infrastructure::persistence::{PgClickRepository, PgLinkRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Geolocation client (or disabled fallback)
/// - Background click worker
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails
/// - Migrations fail
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    let geoip = match &config.geoip_url {
        Some(url) => {
            let timeout = Duration::from_millis(config.geoip_timeout_ms);
            match GeoIpClient::new(url, timeout) {
                Ok(client) => {
                    tracing::info!("Geolocation enabled ({url})");
                    Arc::new(client)
                }
                Err(e) => {
                    tracing::warn!("Failed to build geolocation client: {e}. Disabling lookups.");
                    Arc::new(GeoIpClient::disabled())
                }
            }
        }
        None => {
            tracing::info!("Geolocation disabled");
            Arc::new(GeoIpClient::disabled())
        }
    };

    let pool_arc = Arc::new(pool);
    let link_repository = Arc::new(PgLinkRepository::new(pool_arc.clone()));
    let click_repository = Arc::new(PgClickRepository::new(pool_arc.clone()));

    let (click_tx, click_rx) = mpsc::channel(config.click_queue_capacity);
    tokio::spawn(run_click_worker(click_rx, click_repository.clone(), geoip));
    tracing::info!("Click worker started");

    let state = AppState {
        link_service: Arc::new(LinkService::new(link_repository)),
        analytics_service: Arc::new(AnalyticsService::new(click_repository)),
        click_tx,
        base_url: config.base_url.clone(),
        behind_proxy: config.behind_proxy,
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}
