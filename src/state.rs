//! Shared application state injected into all handlers.

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::application::services::{OnboardingService, ProductService, SimulationService};
use crate::domain::submission_event::SubmissionEvent;
use crate::infrastructure::persistence::{MemoryApplicationRepository, MemoryProductRepository};

/// Application-wide shared state.
///
/// Services are concrete over the in-memory repositories the portal ships
/// with; integration tests build the same shape through `tests/common`.
/// The submission sender is kept here in addition to the onboarding service
/// so the health check can inspect the queue.
#[derive(Clone)]
pub struct AppState {
    pub product_service: Arc<ProductService<MemoryProductRepository>>,
    pub simulation_service: Arc<SimulationService>,
    pub onboarding_service: Arc<OnboardingService<MemoryApplicationRepository>>,
    pub submission_tx: mpsc::Sender<SubmissionEvent>,
}
