//! Sales aggregation
//!
//! One pass over the orders: sum `totalWithFee`, split delivery vs pickup,
//! and accumulate quantity/revenue per product name. Products are ranked by
//! revenue (descending, stable, so ties keep first-seen order) and the first
//! [`TOP_PRODUCTS_LIMIT`] are kept.

use std::collections::HashMap;

use rust_decimal::Decimal;
use shared::models::{Order, ProductRevenue, ReportSummary};

use super::range::{ReportRange, range_label};

/// Number of products kept in `top_products`
pub const TOP_PRODUCTS_LIMIT: usize = 5;

/// Summarize `orders` with no period label
pub fn aggregate(orders: &[Order]) -> ReportSummary {
    aggregate_for_range(orders, None)
}

/// Summarize `orders` fetched for `range`
pub fn aggregate_for_range(orders: &[Order], range: Option<&ReportRange>) -> ReportSummary {
    let label = range_label(range);
    if orders.is_empty() {
        return ReportSummary::empty(label);
    }

    let mut total_sales = Decimal::ZERO;
    let mut delivery_orders = 0usize;
    for order in orders {
        total_sales += order.total_with_fee();
        let charge = order.delivery_charge();
        if charge > Decimal::ZERO {
            delivery_orders += 1;
        } else if charge < Decimal::ZERO {
            tracing::warn!(
                order = %order.reference(),
                fee = %charge,
                "Negative delivery fee, counting order as pickup"
            );
        }
    }

    let top_products = rank_products(orders, TOP_PRODUCTS_LIMIT);

    tracing::debug!(
        orders = orders.len(),
        delivery_orders,
        %total_sales,
        products = top_products.len(),
        "Aggregated sales report"
    );

    ReportSummary {
        total_sales,
        total_orders: orders.len(),
        delivery_orders,
        pickup_orders: orders.len() - delivery_orders,
        top_products,
        date_range_label: label,
    }
}

/// Per-product totals across all items, revenue descending, at most `limit`
pub fn rank_products(orders: &[Order], limit: usize) -> Vec<ProductRevenue> {
    let mut products: Vec<ProductRevenue> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for item in orders.iter().flat_map(|o| o.items.iter()) {
        let name = item.product_name();
        let slot = *index.entry(name).or_insert_with(|| {
            products.push(ProductRevenue {
                name: name.to_string(),
                quantity: 0,
                revenue: Decimal::ZERO,
            });
            products.len() - 1
        });
        let entry = &mut products[slot];
        entry.quantity += item.counted_quantity();
        entry.revenue += item.line_total();
    }

    // sort_by is stable: equal revenue keeps first-encountered order
    products.sort_by(|a, b| b.revenue.cmp(&a.revenue));
    products.truncate(limit);
    products
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::models::{DeliveryZone, MenuItemRef, NO_PERIOD_LABEL, OrderItem};
    use std::str::FromStr;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn item(name: &str, quantity: i32, total: &str) -> OrderItem {
        OrderItem {
            menu_item: Some(MenuItemRef {
                name: Some(name.to_string()),
                ..Default::default()
            }),
            quantity: Some(quantity),
            total_price: Some(d(total)),
            ..Default::default()
        }
    }

    fn order(id: i64, fee: &str, items: Vec<OrderItem>) -> Order {
        let subtotal: Decimal = items.iter().map(|i| i.line_total()).sum();
        Order {
            id,
            items,
            subtotal,
            delivery_fee: d(fee),
            total_with_fee: Some(subtotal + d(fee)),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_orders() {
        let summary = aggregate(&[]);
        assert_eq!(summary.total_sales, Decimal::ZERO);
        assert_eq!(summary.total_orders, 0);
        assert_eq!(summary.delivery_orders, 0);
        assert_eq!(summary.pickup_orders, 0);
        assert!(summary.top_products.is_empty());
        assert_eq!(summary.date_range_label, NO_PERIOD_LABEL);
    }

    #[test]
    fn test_burger_soda_example() {
        let orders = vec![
            order(1, "0", vec![item("Burger", 2, "20")]),
            order(2, "0", vec![item("Burger", 1, "10"), item("Soda", 3, "9")]),
        ];
        let summary = aggregate(&orders);
        assert_eq!(
            summary.top_products,
            vec![
                ProductRevenue {
                    name: "Burger".into(),
                    quantity: 3,
                    revenue: d("30"),
                },
                ProductRevenue {
                    name: "Soda".into(),
                    quantity: 3,
                    revenue: d("9"),
                },
            ]
        );
    }

    #[test]
    fn test_totals_and_split() {
        let orders = vec![
            order(1, "15", vec![item("Burger", 1, "50")]),
            order(2, "0", vec![item("Fries", 2, "20.50")]),
            order(3, "10", vec![]),
        ];
        let summary = aggregate(&orders);
        assert_eq!(summary.total_orders, 3);
        assert_eq!(summary.delivery_orders, 2);
        assert_eq!(summary.pickup_orders, 1);
        assert_eq!(summary.total_sales, d("95.50"));
        let expected: Decimal = orders.iter().map(Order::total_with_fee).sum();
        assert_eq!(summary.total_sales, expected);
    }

    #[test]
    fn test_total_sales_uses_stored_total() {
        let mut o = order(1, "15", vec![item("Burger", 1, "50")]);
        o.total_with_fee = Some(d("99.99"));
        let summary = aggregate(&[o]);
        assert_eq!(summary.total_sales, d("99.99"));
    }

    #[test]
    fn test_zone_fee_decides_delivery() {
        let mut o = order(1, "0", vec![]);
        o.delivery_zone = Some(DeliveryZone {
            fee: d("20"),
            ..Default::default()
        });
        let summary = aggregate(&[o]);
        assert_eq!(summary.delivery_orders, 1);
        assert_eq!(summary.pickup_orders, 0);
    }

    #[test]
    fn test_negative_fee_counts_as_pickup() {
        let o = order(1, "-5", vec![]);
        let summary = aggregate(&[o]);
        assert_eq!(summary.delivery_orders, 0);
        assert_eq!(summary.pickup_orders, 1);
        assert_eq!(summary.delivery_orders + summary.pickup_orders, summary.total_orders);
    }

    #[test]
    fn test_malformed_items_default() {
        let orders = vec![order(
            1,
            "0",
            vec![
                OrderItem::default(),
                OrderItem {
                    name_snapshot: Some("Tea".into()),
                    quantity: Some(0),
                    ..Default::default()
                },
            ],
        )];
        let products = rank_products(&orders, TOP_PRODUCTS_LIMIT);
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].name, "Unknown Item");
        assert_eq!(products[0].quantity, 1);
        assert_eq!(products[0].revenue, Decimal::ZERO);
        assert_eq!(products[1].name, "Tea");
        assert_eq!(products[1].quantity, 1);
    }

    #[test]
    fn test_product_names_are_case_sensitive() {
        let orders = vec![order(1, "0", vec![item("Cola", 1, "5"), item("cola", 1, "5")])];
        let products = rank_products(&orders, TOP_PRODUCTS_LIMIT);
        assert_eq!(products.len(), 2);
    }

    #[test]
    fn test_top_products_truncated_and_sorted() {
        let items = vec![
            item("A", 1, "5"),
            item("B", 1, "70"),
            item("C", 1, "30"),
            item("D", 1, "30"),
            item("E", 1, "1"),
            item("F", 1, "90"),
            item("G", 1, "12"),
        ];
        let summary = aggregate(&[order(1, "0", items)]);
        assert_eq!(summary.top_products.len(), TOP_PRODUCTS_LIMIT);
        let names: Vec<&str> = summary.top_products.iter().map(|p| p.name.as_str()).collect();
        // C and D tie; C was seen first
        assert_eq!(names, vec!["F", "B", "C", "D", "G"]);
        assert!(
            summary
                .top_products
                .windows(2)
                .all(|w| w[0].revenue >= w[1].revenue)
        );
    }

    #[test]
    fn test_aggregate_is_idempotent_and_non_mutating() {
        let orders = vec![
            order(1, "15", vec![item("Burger", 2, "20")]),
            order(2, "0", vec![item("Soda", 3, "9")]),
        ];
        let before = orders.clone();
        let first = aggregate(&orders);
        let second = aggregate(&orders);
        assert_eq!(first, second);
        assert_eq!(orders, before);
    }

    #[test]
    fn test_range_label_in_summary() {
        let range = ReportRange::new(
            NaiveDate::from_ymd_opt(2024, 5, 1),
            NaiveDate::from_ymd_opt(2024, 5, 31),
        )
        .unwrap();
        let summary = aggregate_for_range(&[], Some(&range));
        assert_eq!(summary.date_range_label, "2024-05-01 to 2024-05-31");

        let summary = aggregate_for_range(&[order(1, "0", vec![])], Some(&range));
        assert_eq!(summary.date_range_label, "2024-05-01 to 2024-05-31");
        assert_eq!(summary.total_orders, 1);
    }
}
