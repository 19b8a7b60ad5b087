//! User management helpers
//!
//! Searching, ordering and role assignment over the user list returned by
//! the backend, plus the login form gate.

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{ADMIN_ROLE, Role, STAFF_ROLES, User};

/// Whether `roles` contains a staff role (Admin, Restaurant, Branch)
pub fn is_staff<S: AsRef<str>>(roles: &[S]) -> bool {
    roles
        .iter()
        .any(|r| STAFF_ROLES.iter().any(|staff| *staff == r.as_ref()))
}

/// Whether `roles` contains Admin
pub fn is_admin<S: AsRef<str>>(roles: &[S]) -> bool {
    roles.iter().any(|r| r.as_ref() == ADMIN_ROLE)
}

/// User administration gate
pub fn require_admin(current: &User) -> AppResult<()> {
    if current.is_admin() {
        Ok(())
    } else {
        Err(AppError::new(ErrorCode::AdminRequired)
            .with_detail("email", current.email.clone().unwrap_or_default()))
    }
}

/// Users matching `term`
///
/// A blank term keeps everyone. Names and email match case-insensitively;
/// the phone number is a plain substring match.
pub fn filter_users(users: &[User], term: &str) -> Vec<User> {
    let term = term.trim();
    if term.is_empty() {
        return users.to_vec();
    }
    let needle = term.to_lowercase();
    let contains = |field: &Option<String>| {
        field
            .as_deref()
            .is_some_and(|v| v.to_lowercase().contains(&needle))
    };

    users
        .iter()
        .filter(|u| {
            contains(&u.first_name)
                || contains(&u.last_name)
                || contains(&u.email)
                || u.phone_number.as_deref().is_some_and(|p| p.contains(term))
        })
        .cloned()
        .collect()
}

/// Move the signed-in user (matched by email) to the front
pub fn sort_current_first(users: &[User], current_email: Option<&str>) -> Vec<User> {
    let Some(current) = current_email.filter(|e| !e.is_empty()) else {
        return users.to_vec();
    };
    let is_current = |u: &User| {
        u.email
            .as_deref()
            .is_some_and(|e| e.eq_ignore_ascii_case(current))
    };

    let mut sorted: Vec<User> = users.iter().filter(|u| is_current(u)).cloned().collect();
    sorted.extend(users.iter().filter(|u| !is_current(u)).cloned());
    sorted
}

/// Roles from `all_roles` that `user` does not hold yet
pub fn assignable_roles<'a>(all_roles: &'a [Role], user: &User) -> Vec<&'a Role> {
    all_roles
        .iter()
        .filter(|role| !user.has_role(&role.name))
        .collect()
}

/// Check that `role` exists and `user` does not hold it yet
pub fn check_assignment(all_roles: &[Role], user: &User, role: &str) -> AppResult<()> {
    if !all_roles.iter().any(|r| r.name == role) {
        return Err(AppError::not_found(format!("Role {}", role)));
    }
    if !assignable_roles(all_roles, user).iter().any(|r| r.name == role) {
        return Err(AppError::validation(format!(
            "{} already has role {}",
            user.full_name(),
            role
        ))
        .with_detail("role", role));
    }
    Ok(())
}

/// Login form state
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub loading: bool,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            loading: false,
        }
    }

    /// Email and password filled in and no request in flight
    pub fn can_submit(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.is_empty() && !self.loading
    }
}
