//! Compound-interest savings projection engine.
//!
//! Projects an ending balance from an initial deposit, a recurring monthly
//! contribution, a term in months, and an effective annual rate. The annual
//! rate is converted to its equivalent monthly periodic rate; each period
//! credits interest on the running balance and then adds the contribution.
//!
//! All monetary arithmetic runs over [`Decimal`] with checked operations, so
//! an out-of-range result surfaces as [`ProjectionError::Overflow`] instead
//! of a nonsense balance. The engine is pure and deterministic, which is what
//! makes it testable without the HTTP layer.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::domain::entities::ProductSelection;

/// Smallest opening deposit the bank accepts.
pub const MIN_INITIAL_AMOUNT: Decimal = dec!(10_000);

/// Term bounds in months.
pub const MIN_MONTHS: u32 = 1;
pub const MAX_MONTHS: u32 = 120;

/// Effective annual rate bounds, as fractions (0.12 = 12% E.A.).
pub const MIN_ANNUAL_RATE: f64 = 0.01;
pub const MAX_ANNUAL_RATE: f64 = 0.40;

/// Simulator form defaults, seeded when a customer arrives from the catalog.
const DEFAULT_INITIAL_AMOUNT: Decimal = dec!(1_000_000);
const DEFAULT_MONTHLY_CONTRIBUTION: Decimal = dec!(100_000);
const DEFAULT_TERM_MONTHS: u32 = 12;

/// Why an input was rejected or a projection failed.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ProjectionError {
    #[error("initial amount must be at least 10.000")]
    InitialAmountBelowMinimum,

    #[error("monthly contribution cannot be negative")]
    NegativeContribution,

    #[error("term must be between 1 and 120 months")]
    TermOutOfRange,

    #[error("annual rate must be between 0.01 and 0.40")]
    RateOutOfRange,

    #[error("projection exceeded the representable amount range")]
    Overflow,
}

/// Validated simulation parameters.
///
/// Fields are private and only reachable through [`SimulationInput::new`],
/// so every constructed value already satisfies the range constraints and
/// [`project`] never sees partially-valid input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationInput {
    initial_amount: Decimal,
    monthly_contribution: Decimal,
    months: u32,
    annual_interest_rate: f64,
}

impl SimulationInput {
    /// Validates and constructs simulation parameters.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint:
    /// - `initial_amount` below [`MIN_INITIAL_AMOUNT`]
    /// - negative `monthly_contribution`
    /// - `months` outside `[MIN_MONTHS, MAX_MONTHS]`
    /// - `annual_interest_rate` outside `[MIN_ANNUAL_RATE, MAX_ANNUAL_RATE]`
    ///   (a NaN rate fails this check rather than leaking into the math)
    pub fn new(
        initial_amount: Decimal,
        monthly_contribution: Decimal,
        months: u32,
        annual_interest_rate: f64,
    ) -> Result<Self, ProjectionError> {
        if initial_amount < MIN_INITIAL_AMOUNT {
            return Err(ProjectionError::InitialAmountBelowMinimum);
        }

        if monthly_contribution.is_sign_negative() && !monthly_contribution.is_zero() {
            return Err(ProjectionError::NegativeContribution);
        }

        if !(MIN_MONTHS..=MAX_MONTHS).contains(&months) {
            return Err(ProjectionError::TermOutOfRange);
        }

        if !(annual_interest_rate >= MIN_ANNUAL_RATE && annual_interest_rate <= MAX_ANNUAL_RATE) {
            return Err(ProjectionError::RateOutOfRange);
        }

        Ok(Self {
            initial_amount,
            monthly_contribution,
            months,
            annual_interest_rate,
        })
    }

    /// Pre-filled input for a customer arriving from the catalog.
    ///
    /// The selection is passed in explicitly; there is no shared
    /// "currently selected product" state anywhere in the crate. The product
    /// rate is clamped into the legal range and the opening deposit never
    /// falls below the product minimum.
    pub fn defaults_for(selection: &ProductSelection) -> Result<Self, ProjectionError> {
        let initial_amount = selection.min_amount.max(DEFAULT_INITIAL_AMOUNT);
        let rate = selection
            .interest_rate
            .clamp(MIN_ANNUAL_RATE, MAX_ANNUAL_RATE);

        Self::new(
            initial_amount,
            DEFAULT_MONTHLY_CONTRIBUTION,
            DEFAULT_TERM_MONTHS,
            rate,
        )
    }

    pub fn initial_amount(&self) -> Decimal {
        self.initial_amount
    }

    pub fn monthly_contribution(&self) -> Decimal {
        self.monthly_contribution
    }

    pub fn months(&self) -> u32 {
        self.months
    }

    pub fn annual_interest_rate(&self) -> f64 {
        self.annual_interest_rate
    }
}

/// Outcome of a projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationResult {
    /// Cumulative interest credited over the term, rounded to 2 decimals.
    pub estimated_profit: Decimal,
    /// Ending balance: initial amount + all contributions + profit.
    pub total_balance: Decimal,
}

/// Projects the ending balance for a validated input.
///
/// `total_balance` is computed as
/// `initial + contribution × months + estimated_profit`, so the balance
/// decomposition holds exactly on the rounded figures.
///
/// # Errors
///
/// Returns [`ProjectionError::Overflow`] if an intermediate amount leaves the
/// representable decimal range.
pub fn project(input: &SimulationInput) -> Result<SimulationResult, ProjectionError> {
    let monthly_rate =
        monthly_rate(input.annual_interest_rate).ok_or(ProjectionError::Overflow)?;

    let mut balance = input.initial_amount;
    let mut profit = Decimal::ZERO;

    for _ in 0..input.months {
        let interest = balance
            .checked_mul(monthly_rate)
            .ok_or(ProjectionError::Overflow)?;
        profit = profit
            .checked_add(interest)
            .ok_or(ProjectionError::Overflow)?;
        balance = balance
            .checked_add(interest)
            .and_then(|b| b.checked_add(input.monthly_contribution))
            .ok_or(ProjectionError::Overflow)?;
    }

    let estimated_profit =
        profit.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    let contributed = input
        .monthly_contribution
        .checked_mul(Decimal::from(input.months))
        .ok_or(ProjectionError::Overflow)?;
    let total_balance = input
        .initial_amount
        .checked_add(contributed)
        .and_then(|t| t.checked_add(estimated_profit))
        .ok_or(ProjectionError::Overflow)?;

    Ok(SimulationResult {
        estimated_profit,
        total_balance,
    })
}

/// Monthly periodic rate equivalent to the effective annual rate under
/// monthly compounding: `(1 + ea)^(1/12) - 1`.
fn monthly_rate(annual_rate: f64) -> Option<Decimal> {
    Decimal::from_f64((1.0 + annual_rate).powf(1.0 / 12.0) - 1.0)
}
