//! Business logic services for the application layer.

pub mod onboarding_service;
pub mod product_service;
pub mod simulation_service;

pub use onboarding_service::OnboardingService;
pub use product_service::{ProductPage, ProductService};
pub use simulation_service::SimulationService;
