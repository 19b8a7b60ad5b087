//! Order list query

use chrono::NaiveDate;
use nile_client::{OrderListRequest, OrderScope};
use shared::models::OrderStatus;

use crate::users::is_staff;

/// Status dropdown value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(OrderStatus),
}

impl StatusFilter {
    pub fn status(&self) -> Option<OrderStatus> {
        match self {
            Self::All => None,
            Self::Only(status) => Some(*status),
        }
    }
}

/// Order collection a viewer holding `roles` may read
pub fn scope_for<S: AsRef<str>>(roles: &[S]) -> OrderScope {
    if is_staff(roles) {
        OrderScope::All
    } else {
        OrderScope::Own
    }
}

/// Filters chosen on the order list screen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderQuery {
    pub status: StatusFilter,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub user_id: Option<String>,
}

impl OrderQuery {
    /// Request for a viewer holding `roles`
    ///
    /// Staff read every order and may narrow by user; everyone else reads
    /// only their own orders.
    pub fn to_request<S: AsRef<str>>(&self, roles: &[S]) -> OrderListRequest {
        let scope = scope_for(roles);

        let mut request = OrderListRequest::new(scope).with_range(self.start, self.end);
        if let Some(status) = self.status.status() {
            request = request.with_status(status);
        }
        if scope == OrderScope::All
            && let Some(user_id) = self.user_id.as_deref().filter(|u| !u.is_empty())
        {
            request = request.with_user(user_id);
        }
        request
    }
}
