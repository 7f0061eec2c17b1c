//! DTOs for the savings simulator endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::projection::{SimulationInput, SimulationResult};

/// Request body for `POST /simulator`.
///
/// Amount fields accept either a JSON number or a string-encoded number as
/// produced by the monetary input widget, so `1234567.89`, `"1234567.89"`
/// and `"$ 1.234.567,89"` are equivalent on the wire. Range constraints are
/// re-checked by the projection engine; the validator bounds here exist to
/// produce field-level messages before the domain is reached.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SimulateRequest {
    #[serde(with = "wire_amount")]
    pub initial_amount: Decimal,

    #[serde(with = "wire_amount")]
    pub monthly_contribution: Decimal,

    #[validate(range(min = 1, max = 120, message = "Term must be between 1 and 120 months"))]
    pub months: u32,

    #[validate(range(
        min = 0.01,
        max = 0.40,
        message = "Annual rate must be between 0.01 and 0.40"
    ))]
    pub annual_interest_rate: f64,
}

/// Response body for `POST /simulator`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulateResponse {
    pub estimated_profit: Decimal,
    pub total_balance: Decimal,
}

impl From<SimulationResult> for SimulateResponse {
    fn from(result: SimulationResult) -> Self {
        Self {
            estimated_profit: result.estimated_profit,
            total_balance: result.total_balance,
        }
    }
}

/// Query parameters for `GET /simulator/defaults`.
#[derive(Debug, Deserialize)]
pub struct SimulationDefaultsParams {
    /// Catalog id of the selected product.
    pub product: String,
}

/// Pre-filled simulator form values for a selected product.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationDefaultsResponse {
    pub product_id: String,
    pub product_name: String,
    pub initial_amount: Decimal,
    pub monthly_contribution: Decimal,
    pub months: u32,
    pub annual_interest_rate: f64,
}

impl SimulationDefaultsResponse {
    /// Builds the response from a validated pre-fill.
    pub fn new(product_id: String, product_name: String, input: &SimulationInput) -> Self {
        Self {
            product_id,
            product_name,
            initial_amount: input.initial_amount(),
            monthly_contribution: input.monthly_contribution(),
            months: input.months(),
            annual_interest_rate: input.annual_interest_rate(),
        }
    }
}

/// Serde helper reading an amount from a JSON number or a string-encoded
/// number (plain or COP-formatted).
mod wire_amount {
    use rust_decimal::Decimal;
    use rust_decimal::prelude::FromPrimitive;
    use serde::de::{self, Deserializer, Visitor};

    use crate::domain::currency;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct AmountVisitor;

        impl Visitor<'_> for AmountVisitor {
            type Value = Decimal;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a number or a string-encoded amount")
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Decimal, E> {
                Decimal::from_f64(v).ok_or_else(|| E::custom("amount is not a finite number"))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Decimal, E> {
                Ok(Decimal::from(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Decimal, E> {
                Ok(Decimal::from(v))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Decimal, E> {
                currency::parse(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(AmountVisitor)
    }
}
