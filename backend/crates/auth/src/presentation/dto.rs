//! API DTOs (Data Transfer Objects)
//!
//! Request fields are optional so that missing input reaches the use cases
//! and fails with their validation messages instead of a JSON rejection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::SessionSnapshot;
use crate::domain::entity::{account_summary::OrderSummary, address::Address, user::User};
use crate::domain::value_object::user_role::UserRole;

// ============================================================================
// Sign Up
// ============================================================================

/// Sign up request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignUpRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
    pub phone: Option<String>,
}

// ============================================================================
// Sign In
// ============================================================================

/// Sign in request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignInRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub remember_me: bool,
}

/// `{ user, message }` for sign-up, sign-in and profile updates
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserMessageResponse {
    pub user: PublicUser,
    pub message: &'static str,
}

/// Sign out response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignOutResponse {
    pub success: bool,
    pub message: &'static str,
}

/// `{ message }` only
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

// ============================================================================
// User Views
// ============================================================================

/// User as exposed to clients. No hash, no tokens.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: String,
    pub role: UserRole,
    pub image: Option<String>,
    pub phone: Option<String>,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.user_id.into_uuid(),
            name: user.name.clone(),
            email: user.email.as_str().to_string(),
            role: user.role,
            image: user.image.clone(),
            phone: user.phone.clone(),
            is_verified: user.is_verified,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

// ============================================================================
// Session
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentOrder {
    pub id: Uuid,
    pub is_paid: bool,
    pub is_sent: bool,
}

impl From<&OrderSummary> for RecentOrder {
    fn from(order: &OrderSummary) -> Self {
        Self {
            id: order.order_id,
            is_paid: order.is_paid,
            is_sent: order.is_sent,
        }
    }
}

/// Public user plus account aggregates
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    #[serde(flatten)]
    pub user: PublicUser,
    pub address_count: i64,
    pub favorite_count: i64,
    pub recent_orders: Vec<RecentOrder>,
}

/// `{ user: null }` or `{ user, expires }`
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub user: Option<SessionUser>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires: Option<DateTime<Utc>>,
}

impl SessionResponse {
    pub fn anonymous() -> Self {
        Self {
            user: None,
            expires: None,
        }
    }
}

impl From<&SessionSnapshot> for SessionResponse {
    fn from(snapshot: &SessionSnapshot) -> Self {
        Self {
            user: Some(SessionUser {
                user: PublicUser::from(&snapshot.user),
                address_count: snapshot.summary.address_count,
                favorite_count: snapshot.summary.favorite_count,
                recent_orders: snapshot
                    .summary
                    .recent_orders
                    .iter()
                    .map(RecentOrder::from)
                    .collect(),
            }),
            expires: Some(snapshot.expires),
        }
    }
}

// ============================================================================
// Verification / Password Reset
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TokenRequest {
    pub token: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EmailRequest {
    pub email: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResetPasswordRequest {
    pub password: Option<String>,
    pub confirm_password: Option<String>,
}

// ============================================================================
// Profile
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfileRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub image: Option<String>,
}

// ============================================================================
// Addresses
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddressRequest {
    pub name: Option<String>,
    pub line1: Option<String>,
    pub line2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub is_default: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressResponse {
    pub id: Uuid,
    pub name: String,
    pub line1: String,
    pub line2: Option<String>,
    pub city: String,
    pub state: Option<String>,
    pub postal_code: String,
    pub country: String,
    pub is_default: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Address> for AddressResponse {
    fn from(address: &Address) -> Self {
        Self {
            id: address.address_id.into_uuid(),
            name: address.name.clone(),
            line1: address.line1.clone(),
            line2: address.line2.clone(),
            city: address.city.clone(),
            state: address.state.clone(),
            postal_code: address.postal_code.clone(),
            country: address.country.clone(),
            is_default: address.is_default,
            created_at: address.created_at,
            updated_at: address.updated_at,
        }
    }
}
