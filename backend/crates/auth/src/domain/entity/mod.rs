pub mod account_summary;
pub mod address;
pub mod user;
