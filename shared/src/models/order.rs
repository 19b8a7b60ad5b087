//! Order Model
//!
//! Read-only snapshots of orders as returned by `/api/Orders/*`. Field names
//! follow the backend's camelCase payload; Rust names follow what the values
//! mean (`totalWithoutFee` is the items subtotal, `deliveryCost` the charged
//! delivery fee, `deliveryFee` the delivery zone).

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use super::{nullable, timestamp};

/// Label used when neither the menu item nor the snapshot carries a name
pub const UNKNOWN_ITEM_NAME: &str = "Unknown Item";

/// Order status as stored by the backend
///
/// Deserialization accepts wire names and slugs case-insensitively; `null`
/// and unknown values read as `Pending`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Preparing,
    OutForDelivery,
    Delivered,
    Cancelled,
    Rejected,
}

impl OrderStatus {
    /// Every status, in lifecycle order
    pub const ALL: [OrderStatus; 7] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
        OrderStatus::Rejected,
    ];

    /// Wire name (`OutForDelivery`), also used as the `status` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Confirmed => "Confirmed",
            Self::Preparing => "Preparing",
            Self::OutForDelivery => "OutForDelivery",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
            Self::Rejected => "Rejected",
        }
    }

    /// Human readable label (`Out for Delivery`)
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Confirmed => "Confirmed",
            Self::Preparing => "Preparing",
            Self::OutForDelivery => "Out for Delivery",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
            Self::Rejected => "Rejected",
        }
    }

    /// Lowercase slug (`out_for_delivery`)
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Preparing => "preparing",
            Self::OutForDelivery => "out_for_delivery",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
            Self::Rejected => "rejected",
        }
    }

    /// Whether the order may still be cancelled
    pub fn is_cancellable(&self) -> bool {
        !matches!(self, Self::Cancelled | Self::Rejected)
    }

    /// Parse a wire name or slug, case-insensitively
    pub fn parse(s: &str) -> Option<Self> {
        let needle = s.trim();
        Self::ALL.into_iter().find(|status| {
            status.as_str().eq_ignore_ascii_case(needle) || status.slug().eq_ignore_ascii_case(needle)
        })
    }
}

impl<'de> Deserialize<'de> for OrderStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw
            .as_deref()
            .and_then(|s| {
                let status = Self::parse(s);
                if status.is_none() {
                    tracing::warn!(value = %s, "Unknown order status, reading as Pending");
                }
                status
            })
            .unwrap_or_default())
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Menu item reference embedded in an order line
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemRef {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub base_price: Option<Decimal>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// One product line within an order
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub menu_item: Option<MenuItemRef>,
    /// Name captured when the order was placed
    #[serde(default, rename = "menuItemNameSnapshotAtOrder")]
    pub name_snapshot: Option<String>,
    /// Base price captured when the order was placed
    #[serde(default, rename = "menuItemBasePriceSnapshotAtOrder")]
    pub base_price_snapshot: Option<Decimal>,
    #[serde(default)]
    pub quantity: Option<i32>,
    /// Line total after discounts
    #[serde(default)]
    pub total_price: Option<Decimal>,
    #[serde(default, rename = "totalDiscount")]
    pub discount: Option<Decimal>,
}

impl OrderItem {
    /// Product name: menu item name, then the order-time snapshot, then
    /// [`UNKNOWN_ITEM_NAME`]
    pub fn product_name(&self) -> &str {
        self.menu_item
            .as_ref()
            .and_then(|m| m.name.as_deref())
            .filter(|n| !n.is_empty())
            .or_else(|| self.name_snapshot.as_deref().filter(|n| !n.is_empty()))
            .unwrap_or(UNKNOWN_ITEM_NAME)
    }

    /// Unit price: snapshot when positive, else the menu item's base price
    pub fn unit_price(&self) -> Decimal {
        match self.base_price_snapshot {
            Some(p) if p > Decimal::ZERO => p,
            _ => self
                .menu_item
                .as_ref()
                .and_then(|m| m.base_price)
                .unwrap_or(Decimal::ZERO),
        }
    }

    /// Quantity counted in reports: a missing or zero quantity counts as one
    pub fn counted_quantity(&self) -> i64 {
        match self.quantity {
            Some(q) if q != 0 => i64::from(q),
            _ => 1,
        }
    }

    /// Stored line total, zero when missing
    pub fn line_total(&self) -> Decimal {
        self.total_price.unwrap_or(Decimal::ZERO)
    }

    /// Stored line discount, zero when missing
    pub fn discount(&self) -> Decimal {
        self.discount.unwrap_or(Decimal::ZERO)
    }
}

/// Delivery zone attached to an order (`deliveryFee` on the wire)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryZone {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub area_name: Option<String>,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub fee: Decimal,
    #[serde(default)]
    pub estimated_time_min: Option<u32>,
    #[serde(default)]
    pub estimated_time_max: Option<u32>,
}

/// Customer order
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    #[serde(default)]
    pub order_number: Option<String>,
    #[serde(default, with = "timestamp::lenient")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub items: Vec<OrderItem>,
    /// Items subtotal, before delivery and discount
    #[serde(
        default,
        rename = "totalWithoutFee",
        deserialize_with = "nullable::or_default"
    )]
    pub subtotal: Decimal,
    /// Delivery fee charged on this order
    #[serde(
        default,
        rename = "deliveryCost",
        deserialize_with = "nullable::or_default"
    )]
    pub delivery_fee: Decimal,
    /// Total discount applied to the order
    #[serde(
        default,
        rename = "totalDiscount",
        deserialize_with = "nullable::or_default"
    )]
    pub discount_total: Decimal,
    /// Server-computed `subtotal + delivery fee`
    #[serde(default)]
    pub total_with_fee: Option<Decimal>,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub delivery_is_paid: bool,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default, rename = "deliveryFee")]
    pub delivery_zone: Option<DeliveryZone>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

impl Order {
    /// Display reference: the order number, or `#<id>`
    pub fn reference(&self) -> String {
        match self.order_number.as_deref() {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => format!("#{}", self.id),
        }
    }

    /// Stored `totalWithFee`, falling back to `subtotal + delivery_fee`
    pub fn total_with_fee(&self) -> Decimal {
        self.total_with_fee
            .unwrap_or(self.subtotal + self.delivery_fee)
    }

    /// Fee that decides delivery vs pickup: the zone fee when a zone is
    /// attached, else the charged delivery fee
    pub fn delivery_charge(&self) -> Decimal {
        self.delivery_zone
            .as_ref()
            .map(|z| z.fee)
            .unwrap_or(self.delivery_fee)
    }

    /// Delivered to the customer (positive delivery charge)
    pub fn is_delivery(&self) -> bool {
        self.delivery_charge() > Decimal::ZERO
    }
}

/// Decode an order list, skipping records that cannot be read
///
/// One malformed order must not hide the rest of the list; each skipped
/// record is logged with its position.
pub fn decode_order_list(values: Vec<serde_json::Value>) -> Vec<Order> {
    let total = values.len();
    let orders: Vec<Order> = values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match Order::deserialize(value) {
            Ok(order) => Some(order),
            Err(e) => {
                tracing::warn!(index, error = %e, "Skipping malformed order");
                None
            }
        })
        .collect();
    if orders.len() < total {
        tracing::warn!(
            skipped = total - orders.len(),
            total,
            "Some orders could not be read"
        );
    }
    orders
}
