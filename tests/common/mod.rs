#![allow(dead_code)]

use std::sync::Arc;
use tokio::sync::mpsc;

use savings_portal::application::services::{OnboardingService, ProductService, SimulationService};
use savings_portal::domain::submission_event::SubmissionEvent;
use savings_portal::infrastructure::persistence::{
    MemoryApplicationRepository, MemoryProductRepository,
};
use savings_portal::state::AppState;

/// Builds an [`AppState`] over the seeded catalog and an empty application
/// store, returning the submission receiver so tests can observe hand-offs.
pub fn create_test_state() -> (AppState, mpsc::Receiver<SubmissionEvent>) {
    let product_repository = Arc::new(MemoryProductRepository::with_default_catalog());
    let application_repository = Arc::new(MemoryApplicationRepository::new());

    let (submission_tx, submission_rx) = mpsc::channel(100);

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

    (state, submission_rx)
}
