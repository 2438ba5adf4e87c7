//! Role names granted to users.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Authority held by a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleName {
    #[serde(rename = "ROLE_USER")]
    User,
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
}

impl RoleName {
    /// Name as stored in the `roles` table.
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleName::User => "ROLE_USER",
            RoleName::Admin => "ROLE_ADMIN",
        }
    }
}

impl fmt::Display for RoleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoleName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ROLE_USER" => Ok(RoleName::User),
            "ROLE_ADMIN" => Ok(RoleName::Admin),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_name_parsing() {
        assert_eq!("ROLE_USER".parse::<RoleName>().unwrap(), RoleName::User);
        assert_eq!("ROLE_ADMIN".parse::<RoleName>().unwrap(), RoleName::Admin);
        assert!("ROLE_ROOT".parse::<RoleName>().is_err());
    }

    #[test]
    fn test_role_name_serde() {
        assert_eq!(
            serde_json::to_string(&RoleName::Admin).unwrap(),
            "\"ROLE_ADMIN\""
        );
    }
}
