//! Shared types for the NileFood storefront
//!
//! Common types used by the storefront logic, the HTTP client and the CLI:
//! order/user models, report summaries, money helpers and the unified error
//! system.

pub mod error;
pub mod models;
pub mod money;

// Re-exports
pub use rust_decimal::Decimal;
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode};
