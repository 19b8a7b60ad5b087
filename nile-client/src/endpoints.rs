//! Backend endpoints
//!
//! An [`Endpoint`] is a list of path segments plus query pairs. Segments
//! are percent-encoded when the URL is built, so caller-supplied values
//! such as an email address stay inside their own segment.

use reqwest::Url;

use crate::{ClientError, ClientResult};

pub const PROFILE_PATH: &str = "api/Account/Profile";
pub const USERS_PATH: &str = "api/Users/GetAll";
pub const ROLES_PATH: &str = "api/Roles/GetAll";
pub const ASSIGN_ROLE_PATH: &str = "api/Users/AssignRole";
pub const DELETE_USER_PATH: &str = "api/Users/Delete";

/// A request target relative to the backend base URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    segments: Vec<String>,
    query: Vec<(&'static str, String)>,
}

impl Endpoint {
    /// Endpoint for a fixed `a/b/c` path
    pub fn new(path: &str) -> Self {
        Self {
            segments: path
                .split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            query: Vec::new(),
        }
    }

    /// Append one path segment; it is encoded as a whole
    pub fn segment(mut self, value: impl Into<String>) -> Self {
        self.segments.push(value.into());
        self
    }

    pub fn query(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.query.push((key, value.into()));
        self
    }

    pub fn query_pairs(&self) -> &[(&'static str, String)] {
        &self.query
    }

    /// Unencoded path, for logs and error messages
    pub fn path(&self) -> String {
        self.segments.join("/")
    }

    /// Absolute URL under `base`, keeping any path prefix of `base`
    pub fn url(&self, base: &str) -> ClientResult<Url> {
        let invalid = |reason: String| ClientError::InvalidUrl {
            url: base.to_string(),
            reason,
        };
        let mut url = Url::parse(base).map_err(|e| invalid(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| invalid("URL cannot have a path".to_string()))?
            .pop_if_empty()
            .extend(&self.segments);
        if !self.query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(self.query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }
}

// ========== Account / users / roles ==========

pub fn profile() -> Endpoint {
    Endpoint::new(PROFILE_PATH)
}

pub fn users() -> Endpoint {
    Endpoint::new(USERS_PATH)
}

pub fn roles() -> Endpoint {
    Endpoint::new(ROLES_PATH)
}

pub fn assign_role(user_id: &str, role: &str) -> Endpoint {
    Endpoint::new(ASSIGN_ROLE_PATH)
        .query("userId", user_id)
        .query("role", role)
}

pub fn delete_user(email: &str) -> Endpoint {
    Endpoint::new(DELETE_USER_PATH).segment(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://restaurant-template.runasp.net";

    fn url(endpoint: &Endpoint) -> String {
        endpoint.url(BASE).unwrap().to_string()
    }

    #[test]
    fn test_fixed_paths() {
        assert_eq!(url(&profile()), format!("{}/api/Account/Profile", BASE));
        assert_eq!(url(&users()), format!("{}/api/Users/GetAll", BASE));
        assert_eq!(url(&roles()), format!("{}/api/Roles/GetAll", BASE));
    }

    #[test]
    fn test_assign_role_query() {
        let endpoint = assign_role("u-7", "Admin");
        assert_eq!(
            endpoint.query_pairs(),
            &[("userId", "u-7".to_string()), ("role", "Admin".to_string())]
        );
        assert_eq!(
            url(&endpoint),
            format!("{}/api/Users/AssignRole?userId=u-7&role=Admin", BASE)
        );
    }

    #[test]
    fn test_query_values_are_form_encoded() {
        let endpoint = assign_role("a&b=c", "Order Manager");
        assert_eq!(
            url(&endpoint),
            format!("{}/api/Users/AssignRole?userId=a%26b%3Dc&role=Order+Manager", BASE)
        );
    }

    #[test]
    fn test_delete_user_plain_email() {
        assert_eq!(
            url(&delete_user("sara@example.com")),
            format!("{}/api/Users/Delete/sara@example.com", BASE)
        );
    }

    #[test]
    fn test_delete_user_email_stays_one_segment() {
        let endpoint = delete_user("a/b?c#d@x.com");
        let built = endpoint.url(BASE).unwrap();
        assert_eq!(
            built.as_str(),
            format!("{}/api/Users/Delete/a%2Fb%3Fc%23d@x.com", BASE)
        );
        assert!(built.query().is_none());
        assert!(built.fragment().is_none());
        assert_eq!(built.path_segments().unwrap().count(), 4);
        assert_eq!(endpoint.path(), "api/Users/Delete/a/b?c#d@x.com");
    }

    #[test]
    fn test_base_prefix_and_trailing_slash() {
        assert_eq!(
            users().url("http://localhost:8080/").unwrap().as_str(),
            "http://localhost:8080/api/Users/GetAll"
        );
        assert_eq!(
            users().url("http://localhost:8080/backend/").unwrap().as_str(),
            "http://localhost:8080/backend/api/Users/GetAll"
        );
        assert_eq!(
            users().url("http://localhost:8080/backend").unwrap().as_str(),
            "http://localhost:8080/backend/api/Users/GetAll"
        );
    }

    #[test]
    fn test_invalid_base() {
        assert!(matches!(
            users().url("not a url"),
            Err(ClientError::InvalidUrl { .. })
        ));
        assert!(matches!(
            users().url("mailto:ops@example.com"),
            Err(ClientError::InvalidUrl { .. })
        ));
    }
}
