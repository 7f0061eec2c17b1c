//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod onboarding;
pub mod products;
pub mod simulate;

pub use health::health_handler;
pub use onboarding::onboarding_handler;
pub use products::{product_get_handler, product_list_handler};
pub use simulate::{simulate_handler, simulation_defaults_handler};
