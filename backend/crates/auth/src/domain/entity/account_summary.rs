//! Read-only account aggregates shown with the session.
//!
//! Favorites and orders are written elsewhere in the system; this crate
//! only counts and lists them.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Number of recent orders embedded in the session view.
pub const RECENT_ORDER_LIMIT: i64 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSummary {
    pub order_id: Uuid,
    pub is_paid: bool,
    pub is_sent: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountSummary {
    pub address_count: i64,
    pub favorite_count: i64,
    /// Newest first, at most [`RECENT_ORDER_LIMIT`]
    pub recent_orders: Vec<OrderSummary>,
}
