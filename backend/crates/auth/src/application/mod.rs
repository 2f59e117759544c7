//! Application Layer
//!
//! Use cases and application services.

pub mod addresses;
pub mod config;
pub mod get_session;
pub mod password_reset;
pub mod profile;
pub mod session_token;
pub mod sign_in;
pub mod sign_out;
pub mod sign_up;
pub mod verify_email;

// Re-exports
pub use addresses::{AddressInput, AddressUseCases};
pub use config::AuthConfig;
pub use get_session::{GetSessionUseCase, SessionLookup, SessionSnapshot};
pub use password_reset::{RequestPasswordResetUseCase, ResetPasswordInput, ResetPasswordUseCase};
pub use profile::{ProfileInput, ProfileUseCase};
pub use session_token::{IssuedSession, SessionTokens};
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_out::SignOutUseCase;
pub use sign_up::{SignUpInput, SignUpUseCase};
pub use verify_email::{MarkVerifiedUseCase, ResendVerificationUseCase, VerifyEmailUseCase};

pub(crate) use kernel::text::required;
