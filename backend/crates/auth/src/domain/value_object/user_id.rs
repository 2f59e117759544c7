//! User identifier.
//!
//! Shared with the catalog crate through the kernel so store ownership can
//! be checked against session claims without conversions.

pub use kernel::id::UserId;
