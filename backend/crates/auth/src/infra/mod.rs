//! Infrastructure Layer
//!
//! Database implementations and external service integrations.

pub mod mailer;
pub mod memory;
pub mod postgres;

pub use mailer::{Mailer, SmtpConfig, SmtpMailer};
pub use memory::MemoryAuthRepository;
pub use postgres::PgAuthRepository;
