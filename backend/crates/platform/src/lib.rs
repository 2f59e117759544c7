//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (random tokens, constant-time comparison)
//! - Password policy and bcrypt hashing
//! - Signed session tokens (HS256 JWT)
//! - Cookie building and parsing

pub mod cookie;
pub mod crypto;
pub mod password;
pub mod token;
