//! Shopping cart
//!
//! Lines keyed by menu item id, an optional coupon, totals and checkout.
//! Money math goes through [`crate::order_money::CartTotals`].

pub mod checkout;
pub mod coupon;

use rust_decimal::Decimal;
use serde::Serialize;
use shared::error::{AppError, AppResult, ErrorCode};

use crate::order_money::CartTotals;

pub use checkout::{ASAP, ASAP_ESTIMATE, DELIVERY_SLOTS, DeliveryOption, OrderDraft, generate_order_number};
pub use coupon::{COUPONS, Coupon, lookup_coupon};

/// One product line in the cart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub unit_price: Decimal,
    pub quantity: u32,
}

impl CartLine {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        category: impl Into<String>,
        unit_price: Decimal,
        quantity: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            unit_price,
            quantity,
        }
    }

    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// Cart contents and applied coupon
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
    coupon: Option<Coupon>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across lines
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |count, l| count.saturating_add(l.quantity))
    }

    /// Add a line; an existing line with the same id gains the quantity
    pub fn add_item(&mut self, line: CartLine) {
        if line.quantity == 0 {
            return;
        }
        match self.lines.iter_mut().find(|l| l.id == line.id) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(line.quantity),
            None => self.lines.push(line),
        }
    }

    /// Set the quantity of line `id`
    ///
    /// Quantities below one are ignored and return `false`, as does an
    /// unknown id. Removing a line is [`Cart::remove_item`].
    pub fn update_quantity(&mut self, id: i64, quantity: i64) -> bool {
        if quantity < 1 {
            return false;
        }
        let Ok(quantity) = u32::try_from(quantity) else {
            return false;
        };
        match self.lines.iter_mut().find(|l| l.id == id) {
            Some(line) => {
                line.quantity = quantity;
                true
            }
            None => false,
        }
    }

    pub fn remove_item(&mut self, id: i64) -> AppResult<CartLine> {
        let position = self
            .lines
            .iter()
            .position(|l| l.id == id)
            .ok_or_else(|| AppError::new(ErrorCode::CartItemNotFound).with_detail("id", id))?;
        Ok(self.lines.remove(position))
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.coupon = None;
    }

    pub fn coupon(&self) -> Option<&Coupon> {
        self.coupon.as_ref()
    }

    /// Apply a coupon code, replacing any previous one
    pub fn apply_coupon(&mut self, code: &str) -> AppResult<Coupon> {
        let coupon = lookup_coupon(code)?;
        self.coupon = Some(coupon);
        Ok(coupon)
    }

    pub fn remove_coupon(&mut self) {
        self.coupon = None;
    }

    /// Applied discount percentage, zero without a coupon
    pub fn discount_percent(&self) -> Decimal {
        self.coupon.map(|c| c.percent()).unwrap_or(Decimal::ZERO)
    }

    pub fn totals(&self, delivery_fee: Decimal) -> AppResult<CartTotals> {
        CartTotals::compute(
            self.lines.iter().map(|l| (l.unit_price, l.quantity)),
            self.discount_percent(),
            delivery_fee,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cart() -> Cart {
        let mut cart = Cart::new();
        cart.add_item(CartLine::new(1, "Crispy Chicken Burger", "Burgers", Decimal::new(4599, 2), 2));
        cart.add_item(CartLine::new(2, "Spicy Wings", "Chicken", Decimal::new(3599, 2), 1));
        cart
    }

    #[test]
    fn test_add_merges_same_id() {
        let mut cart = cart();
        cart.add_item(CartLine::new(1, "Crispy Chicken Burger", "Burgers", Decimal::new(4599, 2), 1));
        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.lines()[0].quantity, 3);
        assert_eq!(cart.item_count(), 4);
    }

    #[test]
    fn test_add_caps_quantity_at_max() {
        let mut cart = cart();
        cart.add_item(CartLine::new(2, "Spicy Wings", "Chicken", Decimal::new(3599, 2), u32::MAX));
        assert_eq!(cart.lines()[1].quantity, u32::MAX);
        assert_eq!(cart.item_count(), u32::MAX);
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = cart();
        assert!(cart.update_quantity(2, 4));
        assert_eq!(cart.lines()[1].quantity, 4);

        assert!(!cart.update_quantity(2, 0));
        assert!(!cart.update_quantity(2, -3));
        assert_eq!(cart.lines()[1].quantity, 4);

        assert!(!cart.update_quantity(99, 2));
    }

    #[test]
    fn test_remove_item() {
        let mut cart = cart();
        let removed = cart.remove_item(1).unwrap();
        assert_eq!(removed.name, "Crispy Chicken Burger");
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.remove_item(1).unwrap_err().code, ErrorCode::CartItemNotFound);
    }

    #[test]
    fn test_coupon_changes_totals() {
        let mut cart = cart();
        let fee = Decimal::from(15);
        assert_eq!(cart.totals(fee).unwrap().grand_total, Decimal::new(14297, 2));

        cart.apply_coupon(" save25 ").unwrap();
        assert_eq!(cart.discount_percent(), Decimal::from(25));
        let totals = cart.totals(fee).unwrap();
        assert_eq!(totals.discount_amount, Decimal::new(319925, 4));

        assert!(cart.apply_coupon("BOGUS").is_err());
        assert_eq!(cart.coupon().map(|c| c.code), Some("SAVE25"));

        cart.remove_coupon();
        assert_eq!(cart.discount_percent(), Decimal::ZERO);
    }

    #[test]
    fn test_clear() {
        let mut cart = cart();
        cart.apply_coupon("WELCOME10").unwrap();
        cart.clear();
        assert!(cart.is_empty());
        assert!(cart.coupon().is_none());
    }
}
