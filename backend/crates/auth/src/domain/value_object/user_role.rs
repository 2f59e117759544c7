use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Closed set of account roles. Stored and serialized as `CUSTOMER` / `ADMIN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    #[default]
    #[display("CUSTOMER")]
    Customer,
    #[display("ADMIN")]
    Admin,
}

impl UserRole {
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            UserRole::Customer => "CUSTOMER",
            UserRole::Admin => "ADMIN",
        }
    }

    #[inline]
    pub const fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    /// Parse a stored role code. Unknown codes are `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "CUSTOMER" => Some(UserRole::Customer),
            "ADMIN" => Some(UserRole::Admin),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_role_from_code() {
        assert_eq!(UserRole::from_code("CUSTOMER"), Some(UserRole::Customer));
        assert_eq!(UserRole::from_code("ADMIN"), Some(UserRole::Admin));
        assert_eq!(UserRole::from_code("admin"), None);
        assert_eq!(UserRole::from_code("SUPERUSER"), None);
    }

    #[test]
    fn test_user_role_display_matches_code() {
        assert_eq!(UserRole::Customer.to_string(), "CUSTOMER");
        assert_eq!(UserRole::Admin.to_string(), UserRole::Admin.code());
    }

    #[test]
    fn test_user_role_serde() {
        assert_eq!(
            serde_json::to_string(&UserRole::Admin).unwrap(),
            "\"ADMIN\""
        );
        let role: UserRole = serde_json::from_str("\"CUSTOMER\"").unwrap();
        assert_eq!(role, UserRole::Customer);
        assert!(serde_json::from_str::<UserRole>("\"OWNER\"").is_err());
    }

    #[test]
    fn test_default_is_customer() {
        assert_eq!(UserRole::default(), UserRole::Customer);
        assert!(!UserRole::default().is_admin());
    }
}
