//! Checkout: turning a cart into an order draft

use chrono::NaiveDateTime;
use rand::Rng;
use rust_decimal::Decimal;
use serde::Serialize;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::OrderStatus;

use super::{Cart, CartLine};

/// Delivery windows offered for scheduled orders
pub const DELIVERY_SLOTS: [&str; 9] = [
    "12:00 PM - 1:00 PM",
    "1:00 PM - 2:00 PM",
    "2:00 PM - 3:00 PM",
    "3:00 PM - 4:00 PM",
    "4:00 PM - 5:00 PM",
    "5:00 PM - 6:00 PM",
    "6:00 PM - 7:00 PM",
    "7:00 PM - 8:00 PM",
    "8:00 PM - 9:00 PM",
];

/// `delivery_time` of an immediate order
pub const ASAP: &str = "ASAP";
/// `estimated_delivery` of an immediate order
pub const ASAP_ESTIMATE: &str = "25-35 minutes";

const ORDER_NUMBER_LEN: usize = 9;
const ORDER_NUMBER_CHARSET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// When the customer wants the order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "slot")]
pub enum DeliveryOption {
    Now,
    /// One of [`DELIVERY_SLOTS`]; `None` until the customer picks one
    Later(Option<String>),
}

impl DeliveryOption {
    /// `(delivery_time, estimated_delivery)` for this option
    fn schedule(&self) -> AppResult<(String, String)> {
        match self {
            Self::Now => Ok((ASAP.to_string(), ASAP_ESTIMATE.to_string())),
            Self::Later(slot) => {
                let slot = slot
                    .as_deref()
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .ok_or_else(|| AppError::new(ErrorCode::DeliveryTimeRequired))?;
                if !DELIVERY_SLOTS.contains(&slot) {
                    return Err(AppError::validation(format!(
                        "Unknown delivery slot: {}",
                        slot
                    )));
                }
                Ok((slot.to_string(), slot.to_string()))
            }
        }
    }
}

/// Order created at checkout, before it is sent to the kitchen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderDraft {
    pub order_number: String,
    pub lines: Vec<CartLine>,
    pub subtotal: Decimal,
    pub discount_percent: Decimal,
    pub discount_amount: Decimal,
    pub delivery_fee: Decimal,
    pub total: Decimal,
    pub delivery_option: DeliveryOption,
    pub delivery_time: String,
    /// Present only when a coupon was applied
    pub coupon_code: Option<String>,
    pub status: OrderStatus,
    pub estimated_delivery: String,
    pub created_at: NaiveDateTime,
}

/// Random 9-character order number of digits and uppercase letters
pub fn generate_order_number() -> String {
    let mut rng = rand::thread_rng();
    (0..ORDER_NUMBER_LEN)
        .map(|_| ORDER_NUMBER_CHARSET[rng.gen_range(0..ORDER_NUMBER_CHARSET.len())] as char)
        .collect()
}

impl Cart {
    /// Build an order draft from the cart
    ///
    /// The cart itself is left untouched; callers clear it once the draft
    /// is accepted.
    pub fn checkout(&self, option: DeliveryOption, delivery_fee: Decimal) -> AppResult<OrderDraft> {
        if self.is_empty() {
            return Err(AppError::new(ErrorCode::CartEmpty));
        }
        let (delivery_time, estimated_delivery) = option.schedule()?;
        let totals = self.totals(delivery_fee)?;

        let draft = OrderDraft {
            order_number: generate_order_number(),
            lines: self.lines().to_vec(),
            subtotal: totals.subtotal,
            discount_percent: totals.discount_percent,
            discount_amount: totals.discount_amount,
            delivery_fee: totals.delivery_fee,
            total: totals.grand_total,
            delivery_option: option,
            delivery_time,
            coupon_code: self.coupon().map(|c| c.code.to_string()),
            status: OrderStatus::Preparing,
            estimated_delivery,
            created_at: chrono::Utc::now().naive_utc(),
        };

        tracing::info!(
            order_number = %draft.order_number,
            lines = draft.lines.len(),
            total = %draft.total,
            "Order placed"
        );
        Ok(draft)
    }
}
