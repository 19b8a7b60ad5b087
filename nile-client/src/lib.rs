//! Nile Client - HTTP client for the storefront backend
//!
//! Provides typed calls to the orders, users and roles endpoints.

pub mod config;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod query;

pub use config::ClientConfig;
pub use endpoints::Endpoint;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use query::{OrderListRequest, OrderScope};

// Re-export shared models for convenience
pub use shared::models::{Order, OrderStatus, Role, User};
