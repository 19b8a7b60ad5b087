//! HTTP client for network-based API calls

use crate::endpoints::{self, Endpoint};
use crate::{ClientConfig, ClientError, ClientResult, OrderListRequest, OrderScope};
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use shared::models::{Order, Role, User, decode_order_list};

/// HTTP client for making requests to the storefront backend
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        })
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Whether a token is configured
    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    /// Absolute URL for an endpoint
    pub fn url(&self, endpoint: &Endpoint) -> ClientResult<Url> {
        endpoint.url(&self.base_url)
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    fn request(&self, method: Method, endpoint: &Endpoint) -> ClientResult<RequestBuilder> {
        let url = self.url(endpoint)?;
        tracing::debug!(method = %method, path = %endpoint.path(), "Request");
        let mut request = self.client.request(method, url);
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        Ok(request)
    }

    /// GET `endpoint` and decode the JSON body
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> ClientResult<T> {
        let response = self.request(Method::GET, endpoint)?.send().await?;
        Self::handle_response(endpoint, response).await
    }

    /// POST to `endpoint` without a body, ignoring the response body
    pub async fn post_empty(&self, endpoint: &Endpoint) -> ClientResult<()> {
        let response = self.request(Method::POST, endpoint)?.send().await?;
        Self::check_status(endpoint, response).await.map(|_| ())
    }

    /// DELETE `endpoint`, ignoring the response body
    pub async fn delete(&self, endpoint: &Endpoint) -> ClientResult<()> {
        let response = self.request(Method::DELETE, endpoint)?.send().await?;
        Self::check_status(endpoint, response).await.map(|_| ())
    }

    /// Map non-success statuses to [`ClientError`]
    async fn check_status(
        endpoint: &Endpoint,
        response: reqwest::Response,
    ) -> ClientResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let path = endpoint.path();
        let body = response.text().await?;
        tracing::warn!(status = %status, path = %path, body = %body, "Request failed");
        Err(match status {
            StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
            StatusCode::FORBIDDEN => ClientError::Forbidden { path, body },
            StatusCode::NOT_FOUND => ClientError::NotFound { path },
            StatusCode::BAD_REQUEST => ClientError::Rejected { path, body },
            _ => ClientError::Server {
                path,
                status: status.as_u16(),
                body,
            },
        })
    }

    /// Check the status, then decode the JSON body
    async fn handle_response<T: DeserializeOwned>(
        endpoint: &Endpoint,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let response = Self::check_status(endpoint, response).await?;
        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Err(ClientError::EmptyResponse {
                path: endpoint.path(),
            });
        }
        serde_json::from_slice(&bytes).map_err(|source| ClientError::Decode {
            path: endpoint.path(),
            source,
        })
    }

    // ========== Account API ==========

    /// Current user's profile, including roles
    pub async fn profile(&self) -> ClientResult<User> {
        self.get(&endpoints::profile()).await
    }

    // ========== Orders API ==========

    /// List orders
    ///
    /// A `null` body is read as an empty list. Records that do not decode
    /// are skipped with a warning instead of failing the whole list.
    pub async fn orders(&self, request: &OrderListRequest) -> ClientResult<Vec<Order>> {
        let values: Option<Vec<serde_json::Value>> = self.get(&request.endpoint()).await?;
        let orders = decode_order_list(values.unwrap_or_default());
        tracing::info!(count = orders.len(), scope = ?request.scope, "Fetched orders");
        Ok(orders)
    }

    /// Fetch one order with its items
    pub async fn order(&self, scope: OrderScope, order_id: i64) -> ClientResult<Order> {
        self.get(&scope.detail(order_id)).await
    }

    // ========== Users API ==========

    pub async fn users(&self) -> ClientResult<Vec<User>> {
        let users: Option<Vec<User>> = self.get(&endpoints::users()).await?;
        Ok(users.unwrap_or_default())
    }

    pub async fn roles(&self) -> ClientResult<Vec<Role>> {
        let roles: Option<Vec<Role>> = self.get(&endpoints::roles()).await?;
        Ok(roles.unwrap_or_default())
    }

    pub async fn assign_role(&self, user_id: &str, role: &str) -> ClientResult<()> {
        self.post_empty(&endpoints::assign_role(user_id, role)).await?;
        tracing::info!(user_id = %user_id, role = %role, "Role assigned");
        Ok(())
    }

    /// Delete the user with `email`; the address is sent as one path segment
    pub async fn delete_user(&self, email: &str) -> ClientResult<()> {
        self.delete(&endpoints::delete_user(email)).await?;
        tracing::info!(email = %email, "User deleted");
        Ok(())
    }
}
