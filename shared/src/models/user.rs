//! User and Role Models

use serde::{Deserialize, Serialize};

use super::nullable;

/// Role names with access to every customer's orders
pub const STAFF_ROLES: [&str; 3] = ["Admin", "Restaurant", "Branch"];

/// Role required for user administration and sales reports
pub const ADMIN_ROLE: &str = "Admin";

/// User account (`/api/Users/GetAll`, `/api/Account/Profile`)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default, deserialize_with = "nullable::or_default")]
    pub roles: Vec<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl User {
    /// "First Last", skipping missing parts
    pub fn full_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// Holds Admin, Restaurant or Branch
    pub fn is_staff(&self) -> bool {
        STAFF_ROLES.iter().any(|r| self.has_role(r))
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(ADMIN_ROLE)
    }
}

/// Role definition (`/api/Roles/GetAll`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        let user = User {
            first_name: Some("Mona".into()),
            last_name: Some("Adel".into()),
            ..Default::default()
        };
        assert_eq!(user.full_name(), "Mona Adel");

        let user = User {
            last_name: Some("Adel".into()),
            ..Default::default()
        };
        assert_eq!(user.full_name(), "Adel");
    }

    #[test]
    fn test_roles() {
        let user = User {
            roles: vec!["Branch".into()],
            ..Default::default()
        };
        assert!(user.is_staff());
        assert!(!user.is_admin());

        let user = User {
            roles: vec!["User".into()],
            ..Default::default()
        };
        assert!(!user.is_staff());
    }

    #[test]
    fn test_deserialize_user() {
        let json = r#"{"id":"u1","firstName":"Omar","email":"omar@nile.test","phoneNumber":"0100","roles":["Admin"]}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.email.as_deref(), Some("omar@nile.test"));
        assert!(user.is_admin());
        assert!(user.last_name.is_none());
    }

    #[test]
    fn test_null_roles_read_as_none() {
        let user: User = serde_json::from_str(r#"{"id":"u2","roles":null}"#).unwrap();
        assert!(user.roles.is_empty());
        assert!(!user.is_staff());
    }
}
