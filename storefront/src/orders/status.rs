//! Status changes applied to a local order list

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Order, OrderStatus};

/// Copy of `orders` with order `id` set to `status`
pub fn apply_status_change(orders: &[Order], id: i64, status: OrderStatus) -> AppResult<Vec<Order>> {
    let position = find(orders, id)?;
    let mut updated = orders.to_vec();
    let previous = updated[position].status;
    updated[position].status = status;
    tracing::info!(order_id = id, from = %previous, to = %status, "Order status changed");
    Ok(updated)
}

/// Copy of `orders` with order `id` cancelled
///
/// Cancelled and rejected orders cannot be cancelled again.
pub fn cancel_order(orders: &[Order], id: i64) -> AppResult<Vec<Order>> {
    let position = find(orders, id)?;
    let current = orders[position].status;
    if !current.is_cancellable() {
        return Err(AppError::new(ErrorCode::OrderNotCancellable)
            .with_detail("order_id", id)
            .with_detail("status", current.as_str()));
    }
    apply_status_change(orders, id, OrderStatus::Cancelled)
}

fn find(orders: &[Order], id: i64) -> AppResult<usize> {
    orders
        .iter()
        .position(|o| o.id == id)
        .ok_or_else(|| AppError::new(ErrorCode::OrderNotFound).with_detail("order_id", id))
}
