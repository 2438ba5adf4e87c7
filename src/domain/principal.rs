//! Authenticated identity attached to a request.

use crate::domain::entities::{RoleName, User};

/// The user on whose behalf a request runs.
///
/// Built from the database record on every authenticated request, so role
/// changes take effect without reissuing tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub roles: Vec<RoleName>,
}

impl Principal {
    /// Returns true if the principal holds `ROLE_ADMIN`.
    pub fn is_admin(&self) -> bool {
        self.roles.contains(&RoleName::Admin)
    }

    /// Returns true if the principal owns the resource or is an administrator.
    pub fn can_modify(&self, owner_id: i64) -> bool {
        self.id == owner_id || self.is_admin()
    }

    /// As [`can_modify`](Self::can_modify) for records whose owner may have
    /// been deleted. Ownerless records are left to administrators.
    pub fn can_modify_owned_by(&self, owner_id: Option<i64>) -> bool {
        owner_id.map_or(self.is_admin(), |owner_id| self.can_modify(owner_id))
    }
}

impl From<&User> for Principal {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            roles: user.roles.clone(),
        }
    }
}
