//! Money helpers built on rust_decimal
//!
//! Amounts are accumulated as exact `Decimal` values and only rounded
//! (2 decimal places, half-up) when presented.

use crate::error::{AppError, AppResult};
use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Round to 2 decimal places, midpoint away from zero
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Format an amount for display, e.g. `105.00 EGP`
pub fn format_money(value: Decimal, currency: &str) -> String {
    format!("{:.2} {}", round_money(value), currency)
}

/// `amount * percent / 100`, unrounded
#[inline]
pub fn percent_of(amount: Decimal, percent: Decimal) -> Decimal {
    amount * percent / Decimal::ONE_HUNDRED
}

/// Reject negative amounts
pub fn require_non_negative(value: Decimal, field_name: &str) -> AppResult<()> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(AppError::invalid_amount(format!(
            "{} must be non-negative, got {}",
            field_name, value
        ))
        .with_detail("field", field_name));
    }
    Ok(())
}
