//! Session Claims
//!
//! The claim set carried by the signed `auth_token` cookie.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_object::{email::Email, user_id::UserId, user_role::UserRole};

/// `{ userId, email, role, iat, exp }`, timestamps in Unix seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionClaims {
    pub user_id: UserId,
    pub email: String,
    pub role: UserRole,
    pub iat: i64,
    pub exp: i64,
}

impl SessionClaims {
    pub fn new(
        user_id: UserId,
        email: &Email,
        role: UserRole,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        Self {
            user_id,
            email: email.as_str().to_string(),
            role,
            iat: issued_at.timestamp(),
            exp: (issued_at + ttl).timestamp(),
        }
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
