//! Order list operations
//!
//! - [`query`]: which endpoint and parameters the viewer's roles allow
//! - [`filter`]: client-side filtering and sorting
//! - [`status`]: status changes on a local copy of the list
//! - [`details`]: per-order breakdown with the final total

pub mod details;
pub mod filter;
pub mod query;
pub mod status;

pub use details::{ItemRow, OrderDetails};
pub use filter::{OrderFilter, OrderSort, filter_orders, sort_orders};
pub use query::{OrderQuery, StatusFilter, scope_for};
pub use status::{apply_status_change, cancel_order};
