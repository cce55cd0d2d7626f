//! Account Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Account role
///
/// Serialized as `"Admin"` / `"User"`, matching the strings in previously
/// persisted documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    User,
}

/// Account entity
///
/// `email` is the unique identity; all comparisons are case-sensitive
/// exact matches. The password is stored in plaintext -- this is a demo
/// portal, not an authentication system.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub verified: bool,
}

impl Account {
    /// Full name as displayed and as snapshotted onto employees
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Create account payload (admin form)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountCreate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub verified: bool,
}

/// Update account payload (admin form)
///
/// `None` fields keep the current value. A `None` or empty password keeps
/// the existing password.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<Role>,
    pub verified: Option<bool>,
}

/// Self-service registration payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterPayload {
    pub first_name: String,
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 6))]
    pub password: String,
}
