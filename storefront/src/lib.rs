//! NileFood storefront
//!
//! Business logic of the storefront and its sales dashboard:
//!
//! - **Reports** (`report`): sales totals, delivery/pickup split, top products
//! - **Orders** (`orders`): list queries, filtering, status changes, details
//! - **Cart** (`cart`): lines, coupons, checkout
//! - **Money** (`order_money`): order and cart totals
//! - **Users** (`users`): search, ordering, role assignment
//!
//! # Module layout
//!
//! ```text
//! storefront/src/
//! ├── core/          # configuration
//! ├── report/        # aggregation, range, rendering
//! ├── orders/        # query, filter, status, details
//! ├── cart/          # cart, coupons, checkout
//! ├── order_money/   # total calculations
//! ├── users.rs       # user management helpers
//! ├── input.rs       # order files
//! └── utils/         # logger, time helpers
//! ```

pub mod cart;
pub mod core;
pub mod input;
pub mod order_money;
pub mod orders;
pub mod report;
pub mod users;
pub mod utils;

pub use cart::{Cart, CartLine, DeliveryOption, OrderDraft};
pub use core::Config;
pub use order_money::{CartTotals, OrderTotals, compute_total};
pub use orders::{OrderDetails, OrderFilter, OrderQuery, OrderSort, StatusFilter};
pub use report::{ReportRange, aggregate, aggregate_for_range};
pub use utils::{AppError, AppResult, ErrorCode};

pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env`, read the configuration and start logging
pub fn setup_environment() -> Config {
    // A missing .env file is fine
    let _ = dotenv::dotenv();
    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    config
}
