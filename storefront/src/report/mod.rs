//! Sales reports
//!
//! - [`aggregator`]: totals, delivery/pickup split and top products
//! - [`range`]: validated report period and its label
//! - [`render`]: plain-text output

pub mod aggregator;
pub mod range;
pub mod render;

pub use aggregator::{TOP_PRODUCTS_LIMIT, aggregate, aggregate_for_range, rank_products};
pub use range::{ReportRange, range_label};
pub use render::render_text;
