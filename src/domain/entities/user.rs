//! User entity and its embedded contact details.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::RoleName;

/// Geographic coordinates of an address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geo {
    pub lat: Option<String>,
    pub lng: Option<String>,
}

/// Postal address of a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: Option<String>,
    pub suite: Option<String>,
    pub city: Option<String>,
    pub zipcode: Option<String>,
    #[serde(default)]
    pub geo: Geo,
}

/// Employer of a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: Option<String>,
    pub catch_phrase: Option<String>,
    pub bs: Option<String>,
}

/// A registered account.
///
/// `password_hash` holds an Argon2id PHC string and never leaves the service layer.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub address: Address,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub company: Company,
    pub roles: Vec<RoleName>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Returns true if the user holds `ROLE_ADMIN`.
    pub fn is_admin(&self) -> bool {
        self.roles.contains(&RoleName::Admin)
    }
}

/// Input data for creating a user.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub address: Address,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub company: Company,
    pub roles: Vec<RoleName>,
}

/// Full profile replacement performed by `PUT /api/users/{username}`.
#[derive(Debug, Clone, PartialEq)]
pub struct UserUpdate {
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub address: Address,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub company: Company,
}

/// Contact details set through `PUT /api/users/setOrUpdateInfo`.
#[derive(Debug, Clone, PartialEq)]
pub struct UserInfo {
    pub address: Address,
    pub phone: String,
    pub website: String,
    pub company: Company,
}
