//! HTTP server initialization and runtime setup.
//!
//! Wires the seeded catalog, the submission worker, and the Axum server
//! lifecycle together.

use crate::application::services::{OnboardingService, ProductService, SimulationService};
use crate::config::Config;
use crate::domain::submission_worker::run_submission_worker;
use crate::infrastructure::persistence::{MemoryApplicationRepository, MemoryProductRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Seeded in-memory product catalog
/// - Onboarding application store
/// - Background submission worker
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let product_repository = Arc::new(MemoryProductRepository::with_default_catalog());
    let application_repository = Arc::new(MemoryApplicationRepository::new());

    let (submission_tx, submission_rx) = mpsc::channel(config.submission_queue_capacity);

    tokio::spawn(run_submission_worker(
        submission_rx,
        application_repository.clone(),
    ));
    tracing::info!("Submission worker started");

    let product_service = Arc::new(ProductService::new(product_repository));
    let simulation_service = Arc::new(SimulationService::new());
    let onboarding_service = Arc::new(OnboardingService::new(
        application_repository,
        submission_tx.clone(),
    ));

    let state = AppState {
        product_service,
        simulation_service,
        onboarding_service,
        submission_tx,
    };

    let app = app_router(state, config.behind_proxy);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

/// Resolves when the process receives ctrl-c.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install shutdown handler: {e}");
        return;
    }
    tracing::info!("Shutdown signal received");
}
