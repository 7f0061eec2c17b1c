//! Colombian Peso display formatting and parsing.
//!
//! Amounts are rendered in the `es-CO` convention: `.` groups thousands and
//! `,` separates decimals, so `1234567.89` reads `1.234.567,89`. The currency
//! symbol is never part of the rendered value; prefixing `$` is the caller's
//! concern, though [`parse`] tolerates it on input.
//!
//! Parsing returns a tagged result instead of collapsing blank and garbage
//! input into `0`, so callers can tell "the user cleared the field" apart
//! from "the user typed nonsense".

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Fraction digits the display format preserves.
pub const MAX_FRACTION_DIGITS: u32 = 2;

/// Errors that can occur while parsing a formatted amount.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseAmountError {
    /// The input contained no characters besides symbols and whitespace.
    #[error("amount is empty")]
    Empty,

    /// The input could not be read as a monetary amount.
    #[error("not a valid amount: '{0}'")]
    Invalid(String),
}

/// Formats an amount with `.` thousands grouping and `,` decimals.
///
/// The value is rounded to at most [`MAX_FRACTION_DIGITS`] fraction digits;
/// trailing fraction zeros are trimmed, matching the web client's
/// `Intl.NumberFormat("es-CO", { minimumFractionDigits: 0 })` rendering.
/// Zero renders as `"0"`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use savings_portal::domain::currency::format;
///
/// assert_eq!(format(dec!(1234567.89)), "1.234.567,89");
/// assert_eq!(format(dec!(1000)), "1.000");
/// assert_eq!(format(dec!(0)), "0");
/// ```
pub fn format(amount: Decimal) -> String {
    let rounded = amount
        .round_dp_with_strategy(MAX_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
        .normalize();

    let digits = rounded.abs().to_string();
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (digits.as_str(), ""),
    };

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }
    push_grouped(&mut out, int_part);
    if !frac_part.is_empty() {
        out.push(',');
        out.push_str(frac_part);
    }

    out
}

/// Formats a float amount, yielding an empty string for non-finite input.
///
/// Convenience entry for callers holding `f64` values; `NaN` and infinities
/// cannot be rendered as money and produce `""` rather than panicking.
pub fn format_f64(value: f64) -> String {
    match Decimal::from_f64(value) {
        Some(amount) => format(amount),
        None => String::new(),
    }
}

/// Parses a formatted amount back into a [`Decimal`].
///
/// Strips `$` and whitespace, drops `.` thousands separators and accepts at
/// most one `,` decimal separator. A leading minus sign is parsed through;
/// whether negatives are acceptable is the caller's policy.
///
/// Round-trip guarantee: `parse(&format(x)) == Ok(x)` for every `x` with at
/// most two decimal places.
///
/// # Errors
///
/// - [`ParseAmountError::Empty`] when nothing is left after stripping
/// - [`ParseAmountError::Invalid`] for anything that is not a number
pub fn parse(formatted: &str) -> Result<Decimal, ParseAmountError> {
    let cleaned: String = formatted
        .chars()
        .filter(|c| *c != '$' && !c.is_whitespace())
        .collect();

    if cleaned.is_empty() {
        return Err(ParseAmountError::Empty);
    }

    if cleaned.matches(',').count() > 1 {
        return Err(ParseAmountError::Invalid(formatted.trim().to_string()));
    }

    let normalized = cleaned.replace('.', "").replacen(',', ".", 1);

    normalized
        .parse::<Decimal>()
        .map_err(|_| ParseAmountError::Invalid(formatted.trim().to_string()))
}

/// Writes `digits` into `out`, inserting a `.` every three digits from the right.
fn push_grouped(out: &mut String, digits: &str) {
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
}
