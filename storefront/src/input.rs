//! Reading exported order lists from disk

use std::path::Path;

use anyhow::Context;
use shared::models::{Order, decode_order_list};

/// Read orders from a JSON file holding the backend's list response
///
/// A `null` document is an empty list. Records that cannot be read are
/// skipped with a warning.
pub fn read_orders(path: &Path) -> anyhow::Result<Vec<Order>> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read orders from {}", path.display()))?;
    let values: Option<Vec<serde_json::Value>> = serde_json::from_slice(&bytes)
        .with_context(|| format!("{} is not a valid order list", path.display()))?;
    let orders = decode_order_list(values.unwrap_or_default());
    tracing::info!(count = orders.len(), path = %path.display(), "Loaded orders from file");
    Ok(orders)
}
