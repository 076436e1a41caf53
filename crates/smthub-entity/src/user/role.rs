//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Roles available in the system.
///
/// Each role maps 1:1 to an authority string checked by the route policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "role_name", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Full access: manage floors, lines, machines, and users.
    Admin,
    /// Read-only access to the factory hierarchy and dashboard.
    Operator,
}

impl UserRole {
    /// Return the authority string for this role.
    pub fn authority(&self) -> &'static str {
        match self {
            Self::Admin => "ROLE_ADMIN",
            Self::Operator => "ROLE_OPERATOR",
        }
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Operator => "operator",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authority_mapping() {
        assert_eq!(UserRole::Admin.authority(), "ROLE_ADMIN");
        assert_eq!(UserRole::Operator.authority(), "ROLE_OPERATOR");
    }
}
