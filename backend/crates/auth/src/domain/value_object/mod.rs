//! Value Object Module

pub mod email;
pub mod route_policy;
pub mod session_claims;
pub mod user_id;
pub mod user_password;
pub mod user_role;
