//! DTOs for user profile and account management endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::dto::not_blank;
use crate::application::services::{UserData, UserProfile};
use crate::domain::entities::{Address, Company, Geo, RoleName, User, UserInfo};
use crate::domain::principal::Principal;

/// Request body for `POST /api/users` and `PUT /api/users/{username}`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    #[validate(custom(function = "not_blank"))]
    pub first_name: String,

    #[validate(custom(function = "not_blank"))]
    pub last_name: String,

    #[validate(custom(function = "not_blank"))]
    pub username: String,

    #[validate(email)]
    pub email: String,

    #[validate(custom(function = "not_blank"))]
    pub password: String,

    #[serde(default)]
    pub address: Option<Address>,
    pub phone: Option<String>,
    pub website: Option<String>,
    #[serde(default)]
    pub company: Option<Company>,
}

impl From<UserRequest> for UserData {
    fn from(r: UserRequest) -> Self {
        UserData {
            first_name: r.first_name,
            last_name: r.last_name,
            username: r.username,
            email: r.email,
            password: r.password,
            address: r.address.unwrap_or_default(),
            phone: r.phone,
            website: r.website,
            company: r.company.unwrap_or_default(),
        }
    }
}

/// Request body for `PUT /api/users/setOrUpdateInfo`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InfoRequest {
    #[validate(custom(function = "not_blank"))]
    pub street: String,
    #[validate(custom(function = "not_blank"))]
    pub suite: String,
    #[validate(custom(function = "not_blank"))]
    pub city: String,
    #[validate(custom(function = "not_blank"))]
    pub zipcode: String,
    #[validate(custom(function = "not_blank"))]
    pub company_name: String,
    #[validate(custom(function = "not_blank"))]
    pub catch_phrase: String,
    #[validate(custom(function = "not_blank"))]
    pub bs: String,
    #[validate(custom(function = "not_blank"))]
    pub website: String,
    #[validate(custom(function = "not_blank"))]
    pub phone: String,
    pub lat: Option<String>,
    pub lng: Option<String>,
}

impl From<InfoRequest> for UserInfo {
    fn from(r: InfoRequest) -> Self {
        UserInfo {
            address: Address {
                street: Some(r.street),
                suite: Some(r.suite),
                city: Some(r.city),
                zipcode: Some(r.zipcode),
                geo: Geo {
                    lat: r.lat,
                    lng: r.lng,
                },
            },
            phone: r.phone,
            website: r.website,
            company: Company {
                name: Some(r.company_name),
                catch_phrase: Some(r.catch_phrase),
                bs: Some(r.bs),
            },
        }
    }
}

/// Query for `GET /api/users/checkUsernameAvailability`.
#[derive(Debug, Deserialize)]
pub struct UsernameQuery {
    pub username: String,
}

/// Query for `GET /api/users/checkEmailAvailability`.
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserIdentityAvailability {
    pub available: bool,
}

/// Identity of the caller returned by `GET /api/users/me`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<&Principal> for UserSummary {
    fn from(p: &Principal) -> Self {
        Self {
            id: p.id,
            username: p.username.clone(),
            first_name: p.first_name.clone(),
            last_name: p.last_name.clone(),
        }
    }
}

/// Public profile returned by `GET /api/users/{username}/profile`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileResponse {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub joined_at: DateTime<Utc>,
    pub email: String,
    pub address: Address,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub company: Company,
    pub post_count: i64,
}

impl From<UserProfile> for UserProfileResponse {
    fn from(p: UserProfile) -> Self {
        let user = p.user;
        Self {
            id: user.id,
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
            joined_at: user.created_at,
            email: user.email,
            address: user.address,
            phone: user.phone,
            website: user.website,
            company: user.company,
            post_count: p.post_count,
        }
    }
}

/// Full account view returned to administrators and profile owners.
///
/// Never carries the password hash.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub address: Address,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub company: Company,
    pub roles: Vec<RoleName>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            first_name: u.first_name,
            last_name: u.last_name,
            username: u.username,
            email: u.email,
            address: u.address,
            phone: u.phone,
            website: u.website,
            company: u.company,
            roles: u.roles,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}
