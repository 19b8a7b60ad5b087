//! Utility module
//!
//! - [`logger`]: tracing setup for the CLI
//! - [`time`]: date parsing helpers

pub mod logger;
pub mod time;

pub use shared::error::{AppError, AppResult, ErrorCode};
