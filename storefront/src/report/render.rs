//! Plain-text rendering of a report summary

use shared::models::ReportSummary;
use shared::money::format_money;

const RULE_WIDTH: usize = 48;

fn total_row(label: &str, value: impl std::fmt::Display) -> String {
    format!("{:<20}{:>28}\n", label, value)
}

fn product_row(
    rank: impl std::fmt::Display,
    name: &str,
    qty: impl std::fmt::Display,
    revenue: &str,
) -> String {
    format!("{:<4}{:<24}{:>6}{:>14}\n", rank, name, qty, revenue)
}

/// Render `summary` as an aligned text block
pub fn render_text(summary: &ReportSummary, currency: &str) -> String {
    let mut out = format!("Sales report: {}\n", summary.date_range_label);
    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');
    out.push_str(&total_row(
        "Total sales",
        format_money(summary.total_sales, currency),
    ));
    out.push_str(&total_row("Total orders", summary.total_orders));
    out.push_str(&total_row("Delivery orders", summary.delivery_orders));
    out.push_str(&total_row("Pickup orders", summary.pickup_orders));

    if summary.top_products.is_empty() {
        out.push_str("\nNo products sold in this period\n");
        return out;
    }

    out.push_str("\nTop products\n");
    out.push_str(&product_row("#", "Product", "Qty", "Revenue"));
    for (rank, product) in summary.top_products.iter().enumerate() {
        out.push_str(&product_row(
            rank + 1,
            &product.name,
            product.quantity,
            &format_money(product.revenue, currency),
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use shared::models::ProductRevenue;

    #[test]
    fn test_render_empty() {
        let text = render_text(&ReportSummary::default(), "EGP");
        assert!(text.starts_with("Sales report: No period selected\n"));
        assert!(text.contains("0.00 EGP"));
        assert!(text.contains("No products sold in this period"));
    }

    #[test]
    fn test_render_products() {
        let summary = ReportSummary {
            total_sales: Decimal::new(3950, 2),
            total_orders: 2,
            delivery_orders: 1,
            pickup_orders: 1,
            top_products: vec![ProductRevenue {
                name: "Burger".into(),
                quantity: 3,
                revenue: Decimal::from(30),
            }],
            date_range_label: "2024-05-01 to 2024-05-31".into(),
        };
        let text = render_text(&summary, "EGP");
        assert!(text.contains("39.50 EGP"));
        assert!(text.contains("Top products"));
        let line = text.lines().find(|l| l.contains("Burger")).unwrap();
        assert!(line.starts_with("1   Burger"));
        assert!(line.ends_with("30.00 EGP"));
    }
}
