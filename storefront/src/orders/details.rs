//! Order detail view

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;
use shared::error::{AppError, AppResult};
use shared::models::{Order, OrderStatus};

use crate::order_money::compute_total;

/// One line of the detail table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemRow {
    pub name: String,
    pub quantity: i64,
    pub unit_price: Decimal,
    pub discount: Decimal,
    pub line_total: Decimal,
}

/// Order breakdown shown on the details screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderDetails {
    pub reference: String,
    pub status: OrderStatus,
    pub created_at: Option<NaiveDateTime>,
    pub items: Vec<ItemRow>,
    pub subtotal: Decimal,
    pub delivery_fee: Decimal,
    pub discount_total: Decimal,
    /// `subtotal + delivery_fee - discount_total`
    pub final_total: Decimal,
}

impl OrderDetails {
    pub fn from_order(order: &Order) -> AppResult<Self> {
        let reference = order.reference();
        let mut items = Vec::with_capacity(order.items.len());
        for (index, item) in order.items.iter().enumerate() {
            let line_total = item.line_total();
            if line_total.is_sign_negative() && !line_total.is_zero() {
                tracing::warn!(
                    order = %reference,
                    line = index,
                    %line_total,
                    "Negative line total"
                );
                return Err(AppError::data_integrity(format!(
                    "line {} of order {} has a negative total ({})",
                    index + 1,
                    reference,
                    line_total
                ))
                .with_detail("order", reference.clone())
                .with_detail("line", index + 1));
            }
            items.push(ItemRow {
                name: item.product_name().to_string(),
                quantity: item.counted_quantity(),
                unit_price: item.unit_price(),
                discount: item.discount(),
                line_total,
            });
        }

        let final_total = compute_total(order.subtotal, order.delivery_fee, order.discount_total)
            .map_err(|e| e.with_detail("order", reference.clone()))?;

        Ok(Self {
            reference,
            status: order.status,
            created_at: order.created_at,
            items,
            subtotal: order.subtotal,
            delivery_fee: order.delivery_fee,
            discount_total: order.discount_total,
            final_total,
        })
    }
}
