//! Sales Report Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Label used when no report period was chosen
pub const NO_PERIOD_LABEL: &str = "No period selected";

/// Revenue accumulated for one product name
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductRevenue {
    pub name: String,
    pub quantity: i64,
    pub revenue: Decimal,
}

/// Aggregated statistics over a set of orders
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total_sales: Decimal,
    pub total_orders: usize,
    pub delivery_orders: usize,
    pub pickup_orders: usize,
    /// At most five products, revenue descending
    pub top_products: Vec<ProductRevenue>,
    pub date_range_label: String,
}

impl ReportSummary {
    /// All-zero summary for an empty order list
    pub fn empty(date_range_label: impl Into<String>) -> Self {
        Self {
            total_sales: Decimal::ZERO,
            total_orders: 0,
            delivery_orders: 0,
            pickup_orders: 0,
            top_products: Vec::new(),
            date_range_label: date_range_label.into(),
        }
    }
}

impl Default for ReportSummary {
    fn default() -> Self {
        Self::empty(NO_PERIOD_LABEL)
    }
}
