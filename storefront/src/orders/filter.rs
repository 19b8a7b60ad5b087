//! Client-side order filtering and sorting

use std::cmp::Ordering;

use chrono::NaiveDate;
use shared::models::{Order, OrderStatus};

/// Local filters over an already fetched list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderFilter {
    pub status: Option<OrderStatus>,
    /// Inclusive, on the `createdAt` day
    pub start: Option<NaiveDate>,
    /// Inclusive, on the `createdAt` day
    pub end: Option<NaiveDate>,
    /// Matched against the order number and product names
    pub search: Option<String>,
}

impl OrderFilter {
    /// Whether `order` passes every set filter
    ///
    /// Orders without a creation date fail any date bound.
    pub fn matches(&self, order: &Order) -> bool {
        if let Some(status) = self.status
            && order.status != status
        {
            return false;
        }

        if self.start.is_some() || self.end.is_some() {
            let Some(day) = order.created_at.map(|at| at.date()) else {
                return false;
            };
            if self.start.is_some_and(|start| day < start) || self.end.is_some_and(|end| day > end)
            {
                return false;
            }
        }

        match self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            Some(term) => search_matches(order, &term.to_lowercase()),
            None => true,
        }
    }
}

fn search_matches(order: &Order, needle: &str) -> bool {
    order
        .order_number
        .as_deref()
        .is_some_and(|n| n.to_lowercase().contains(needle))
        || order
            .items
            .iter()
            .any(|item| item.product_name().to_lowercase().contains(needle))
}

/// Orders passing `filter`, in their original order
pub fn filter_orders(orders: &[Order], filter: &OrderFilter) -> Vec<Order> {
    orders.iter().filter(|o| filter.matches(o)).cloned().collect()
}

/// Sort order of the order list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OrderSort {
    #[default]
    Newest,
    Oldest,
    TotalHigh,
    TotalLow,
}

/// Sorted copy of `orders`; ties keep their original order
///
/// Orders without a creation date go last for both date sorts.
pub fn sort_orders(orders: &[Order], sort: OrderSort) -> Vec<Order> {
    let mut sorted = orders.to_vec();
    match sort {
        OrderSort::Newest => sorted.sort_by(|a, b| by_date(a, b, true)),
        OrderSort::Oldest => sorted.sort_by(|a, b| by_date(a, b, false)),
        OrderSort::TotalHigh => sorted.sort_by(|a, b| b.total_with_fee().cmp(&a.total_with_fee())),
        OrderSort::TotalLow => sorted.sort_by(|a, b| a.total_with_fee().cmp(&b.total_with_fee())),
    }
    sorted
}

fn by_date(a: &Order, b: &Order, newest_first: bool) -> Ordering {
    match (a.created_at, b.created_at) {
        (Some(x), Some(y)) if newest_first => y.cmp(&x),
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
