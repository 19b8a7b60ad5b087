//! Data models
//!
//! Shared between the storefront logic, the HTTP client and the CLI.
//! Wire names follow the backend's camelCase JSON; money is `Decimal`.

pub mod nullable;
pub mod order;
pub mod report;
pub mod timestamp;
pub mod user;

// Re-exports
pub use order::*;
pub use report::*;
pub use user::*;
