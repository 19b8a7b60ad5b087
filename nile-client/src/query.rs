//! Order list request parameters

use chrono::NaiveDate;
use shared::models::OrderStatus;

use crate::endpoints::Endpoint;

/// Date format used by `startRange` / `endRange`
const RANGE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Which order collection a caller may read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderScope {
    /// Every customer's orders (staff only)
    All,
    /// The caller's own orders
    #[default]
    Own,
}

impl OrderScope {
    /// List endpoint for this scope
    pub fn list_path(&self) -> &'static str {
        match self {
            Self::All => "api/Orders/GetAll",
            Self::Own => "api/Orders/GetAllForUser",
        }
    }

    /// Detail endpoint for one order in this scope
    pub fn detail(&self, order_id: i64) -> Endpoint {
        let base = match self {
            Self::All => "api/Orders/GetById",
            Self::Own => "api/Orders/GetByForUserId",
        };
        Endpoint::new(base).segment(order_id.to_string())
    }
}

/// Parameters of an order list request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderListRequest {
    pub scope: OrderScope,
    pub status: Option<OrderStatus>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    /// Only honoured for [`OrderScope::All`]
    pub user_id: Option<String>,
}

impl OrderListRequest {
    pub fn new(scope: OrderScope) -> Self {
        Self {
            scope,
            ..Default::default()
        }
    }

    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_range(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn path(&self) -> &'static str {
        self.scope.list_path()
    }

    /// Query string pairs, in a stable order
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        if let Some(start) = self.start {
            pairs.push(("startRange", start.format(RANGE_DATE_FORMAT).to_string()));
        }
        if let Some(end) = self.end {
            pairs.push(("endRange", end.format(RANGE_DATE_FORMAT).to_string()));
        }
        if self.scope == OrderScope::All
            && let Some(user_id) = self.user_id.as_deref().filter(|u| !u.is_empty())
        {
            pairs.push(("userId", user_id.to_string()));
        }
        pairs
    }

    pub fn endpoint(&self) -> Endpoint {
        self.query_pairs()
            .into_iter()
            .fold(Endpoint::new(self.path()), |endpoint, (key, value)| {
                endpoint.query(key, value)
            })
    }
}
