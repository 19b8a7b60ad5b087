//! Order and cart total calculations
//!
//! All arithmetic is exact `Decimal`; rounding happens only when an amount
//! is formatted for display (see [`shared::money`]).
//!
//! A negative grand total means the stored amounts are inconsistent (a
//! discount larger than what it discounts). It is reported as
//! [`ErrorCode::DataIntegrity`](shared::ErrorCode::DataIntegrity) and never
//! sign-flipped.

use rust_decimal::Decimal;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::Order;
use shared::money::{percent_of, require_non_negative};

/// `subtotal + delivery_fee - discount_total`
///
/// Inputs must be non-negative; a negative result is a data-integrity error.
pub fn compute_total(
    subtotal: Decimal,
    delivery_fee: Decimal,
    discount_total: Decimal,
) -> AppResult<Decimal> {
    require_non_negative(subtotal, "subtotal")?;
    require_non_negative(delivery_fee, "delivery_fee")?;
    require_non_negative(discount_total, "discount_total")?;

    let total = subtotal + delivery_fee - discount_total;
    if total.is_sign_negative() && !total.is_zero() {
        tracing::warn!(
            %subtotal,
            %delivery_fee,
            %discount_total,
            %total,
            "Negative order total, discount exceeds subtotal plus delivery"
        );
        return Err(AppError::data_integrity(format!(
            "order total is negative ({})",
            total
        ))
        .with_detail("subtotal", subtotal.to_string())
        .with_detail("delivery_fee", delivery_fee.to_string())
        .with_detail("discount_total", discount_total.to_string())
        .with_detail("total", total.to_string()));
    }
    Ok(total)
}

/// Total breakdown of a fetched order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderTotals {
    pub subtotal: Decimal,
    pub delivery_fee: Decimal,
    pub discount_total: Decimal,
    pub grand_total: Decimal,
}

impl OrderTotals {
    /// Breakdown of `order`; errors carry the order reference
    pub fn for_order(order: &Order) -> AppResult<Self> {
        let grand_total = compute_total(order.subtotal, order.delivery_fee, order.discount_total)
            .map_err(|e| e.with_detail("order", order.reference()))?;
        Ok(Self {
            subtotal: order.subtotal,
            delivery_fee: order.delivery_fee,
            discount_total: order.discount_total,
            grand_total,
        })
    }
}

/// Totals of a cart before checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartTotals {
    /// Σ unit price × quantity
    pub subtotal: Decimal,
    /// Coupon percentage (0–100)
    pub discount_percent: Decimal,
    /// `subtotal * discount_percent / 100`
    pub discount_amount: Decimal,
    pub delivery_fee: Decimal,
    /// `subtotal - discount_amount + delivery_fee`
    pub grand_total: Decimal,
}

impl CartTotals {
    /// Compute totals from `(unit_price, quantity)` lines
    pub fn compute<I>(lines: I, discount_percent: Decimal, delivery_fee: Decimal) -> AppResult<Self>
    where
        I: IntoIterator<Item = (Decimal, u32)>,
    {
        if discount_percent < Decimal::ZERO || discount_percent > Decimal::ONE_HUNDRED {
            return Err(AppError::with_message(
                ErrorCode::ValueOutOfRange,
                format!(
                    "discount percent must be between 0 and 100, got {}",
                    discount_percent
                ),
            ));
        }
        require_non_negative(delivery_fee, "delivery_fee")?;

        let mut subtotal = Decimal::ZERO;
        for (unit_price, quantity) in lines {
            require_non_negative(unit_price, "unit_price")?;
            subtotal += unit_price * Decimal::from(quantity);
        }

        let discount_amount = percent_of(subtotal, discount_percent);
        let grand_total = compute_total(subtotal, delivery_fee, discount_amount)?;

        Ok(Self {
            subtotal,
            discount_percent,
            discount_amount,
            delivery_fee,
            grand_total,
        })
    }
}
