//! Savings simulation orchestration.
//!
//! Maps boundary input onto the projection engine and engine errors onto API
//! errors with the field name the web form should highlight.

use rust_decimal::Decimal;
use serde_json::json;

use crate::domain::entities::{Product, ProductSelection};
use crate::domain::projection::{
    self, ProjectionError, SimulationInput, SimulationResult,
};
use crate::error::AppError;

/// Stateless service in front of the projection engine.
#[derive(Debug, Default)]
pub struct SimulationService;

impl SimulationService {
    pub fn new() -> Self {
        Self
    }

    /// Validates the parameters and runs the projection.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for out-of-range input and
    /// [`AppError::Internal`] if the projection overflows.
    pub fn simulate(
        &self,
        initial_amount: Decimal,
        monthly_contribution: Decimal,
        months: u32,
        annual_interest_rate: f64,
    ) -> Result<SimulationResult, AppError> {
        let input = SimulationInput::new(
            initial_amount,
            monthly_contribution,
            months,
            annual_interest_rate,
        )
        .map_err(reject)?;

        projection::project(&input).map_err(reject)
    }

    /// Pre-filled simulator input for a catalog product.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the product cannot seed a valid
    /// input (e.g. a product minimum beyond the representable range).
    pub fn defaults_for(&self, product: &Product) -> Result<SimulationInput, AppError> {
        let selection = ProductSelection::from(product);
        SimulationInput::defaults_for(&selection).map_err(reject)
    }
}

/// Maps an engine error onto the API error envelope.
fn reject(error: ProjectionError) -> AppError {
    let field = match error {
        ProjectionError::InitialAmountBelowMinimum => "initialAmount",
        ProjectionError::NegativeContribution => "monthlyContribution",
        ProjectionError::TermOutOfRange => "months",
        ProjectionError::RateOutOfRange => "annualInterestRate",
        ProjectionError::Overflow => {
            return AppError::internal("Projection failed", json!({ "reason": error.to_string() }));
        }
    };

    AppError::bad_request(error.to_string(), json!({ "field": field }))
}
