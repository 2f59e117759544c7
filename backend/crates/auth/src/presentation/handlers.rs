//! HTTP Handlers

use std::str::FromStr;
use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::application::{
    AddressInput, AddressUseCases, AuthConfig, GetSessionUseCase, MarkVerifiedUseCase,
    ProfileInput, ProfileUseCase, RequestPasswordResetUseCase, ResendVerificationUseCase,
    ResetPasswordInput, ResetPasswordUseCase, SessionLookup, SessionTokens, SignInInput,
    SignInUseCase, SignOutUseCase, SignUpInput, SignUpUseCase, VerifyEmailUseCase,
};
use crate::domain::entity::address::AddressId;
use crate::domain::repository::{AccountSummaryRepository, AddressRepository, UserRepository};
use crate::domain::value_object::user_id::UserId;
use crate::error::{AuthError, AuthResult};
use crate::infra::mailer::Mailer;
use crate::presentation::dto::{
    AddressRequest, AddressResponse, EmailRequest, MessageResponse, ProfileRequest, PublicUser,
    ResetPasswordRequest, SessionResponse, SignInRequest, SignOutResponse, SignUpRequest,
    TokenRequest, UserMessageResponse,
};
use crate::presentation::json::AuthJson;
use crate::presentation::middleware::{AdminUser, CurrentUser};

/// Everything a repository needs to back the auth routes.
pub trait AuthStore:
    UserRepository + AddressRepository + AccountSummaryRepository + Clone + Send + Sync + 'static
{
}

impl<T> AuthStore for T where
    T: UserRepository + AddressRepository + AccountSummaryRepository + Clone + Send + Sync + 'static
{
}

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: AuthStore,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
    pub tokens: Arc<SessionTokens>,
    pub mailer: Arc<Mailer>,
}

impl<R> AuthAppState<R>
where
    R: AuthStore,
{
    pub fn new(repo: R, config: Arc<AuthConfig>, mailer: Mailer) -> Self {
        Self {
            repo: Arc::new(repo),
            tokens: Arc::new(SessionTokens::new(config.clone())),
            config,
            mailer: Arc::new(mailer),
        }
    }

    fn session_cookie(&self, headers: &HeaderMap) -> Option<String> {
        self.config.cookie().read(headers)
    }

    fn clear_cookie(&self) -> Option<HeaderValue> {
        self.config.cookie().clear()
    }
}

const GENERIC_RESEND: &str =
    "If an unverified account exists for that email, a new verification link has been sent.";
const GENERIC_RESET: &str =
    "If an account exists for that email, a password reset link has been sent.";

// ============================================================================
// Sign Up
// ============================================================================

/// POST /api/auth/signup
pub async fn sign_up<R>(
    State(state): State<AuthAppState<R>>,
    AuthJson(req): AuthJson<SignUpRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: AuthStore,
{
    let use_case = SignUpUseCase::new(
        state.repo.clone(),
        state.mailer.clone(),
        state.config.clone(),
    );

    let input = SignUpInput {
        name: req.name,
        email: req.email,
        password: req.password,
        confirm_password: req.confirm_password,
        phone: req.phone,
    };

    let user = use_case
        .execute(input)
        .await
        .map_err(|e| e.context("An error occurred during signup"))?;

    Ok((
        StatusCode::CREATED,
        Json(UserMessageResponse {
            user: PublicUser::from(&user),
            message: "Account created successfully. Please verify your email.",
        }),
    ))
}

// ============================================================================
// Sign In
// ============================================================================

/// POST /api/auth/signin
pub async fn sign_in<R>(
    State(state): State<AuthAppState<R>>,
    AuthJson(req): AuthJson<SignInRequest>,
) -> AuthResult<Response>
where
    R: AuthStore,
{
    let use_case = SignInUseCase::new(state.repo.clone(), state.tokens.clone());

    let input = SignInInput {
        email: req.email,
        password: req.password,
        remember_me: req.remember_me,
    };

    let output = use_case
        .execute(input)
        .await
        .map_err(|e| e.context("An error occurred during authentication"))?;

    // Max-Age must match the token's lifetime
    let cookie = state
        .config
        .cookie()
        .issue(&output.session.token, output.session.max_age)
        .ok_or_else(|| {
            AuthError::Internal("Session cookie is not a valid header value".to_string())
                .context("An error occurred during authentication")
        })?;

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(UserMessageResponse {
            user: PublicUser::from(&output.user),
            message: "Authentication successful",
        }),
    )
        .into_response())
}

// ============================================================================
// Sign Out
// ============================================================================

/// POST|GET /api/auth/signout
///
/// Idempotent. The token is not revoked, only the cookie is cleared.
pub async fn sign_out<R>(State(state): State<AuthAppState<R>>, headers: HeaderMap) -> Response
where
    R: AuthStore,
{
    let token = state.session_cookie(&headers);
    SignOutUseCase::new(state.tokens.clone()).execute(token.as_deref());

    let body = Json(SignOutResponse {
        success: true,
        message: "Signed out successfully",
    });
    with_cookie(body.into_response(), state.clear_cookie())
}

// ============================================================================
// Session
// ============================================================================

/// GET /api/auth/session
pub async fn session<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> AuthResult<Response>
where
    R: AuthStore,
{
    let token = state.session_cookie(&headers);

    let use_case = GetSessionUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.repo.clone(),
        state.tokens.clone(),
    );

    let lookup = use_case
        .execute(token.as_deref())
        .await
        .map_err(|e| e.context("An error occurred while retrieving session"))?;

    Ok(match lookup {
        SessionLookup::Anonymous => Json(SessionResponse::anonymous()).into_response(),
        SessionLookup::Invalid => with_cookie(
            Json(SessionResponse::anonymous()).into_response(),
            state.clear_cookie(),
        ),
        SessionLookup::Active(snapshot) => {
            Json(SessionResponse::from(snapshot.as_ref())).into_response()
        }
    })
}

// ============================================================================
// Email Verification
// ============================================================================

/// POST /api/auth/verify-email
pub async fn verify_email<R>(
    State(state): State<AuthAppState<R>>,
    AuthJson(req): AuthJson<TokenRequest>,
) -> AuthResult<Json<UserMessageResponse>>
where
    R: AuthStore,
{
    let user = VerifyEmailUseCase::new(state.repo.clone())
        .execute(&req.token)
        .await?;

    Ok(Json(UserMessageResponse {
        user: PublicUser::from(&user),
        message: "Email verified successfully",
    }))
}

/// POST /api/auth/resend-verification
pub async fn resend_verification<R>(
    State(state): State<AuthAppState<R>>,
    AuthJson(req): AuthJson<EmailRequest>,
) -> AuthResult<Json<MessageResponse>>
where
    R: AuthStore,
{
    ResendVerificationUseCase::new(
        state.repo.clone(),
        state.mailer.clone(),
        state.config.clone(),
    )
    .execute(&req.email)
    .await?;

    Ok(Json(MessageResponse {
        message: GENERIC_RESEND,
    }))
}

// ============================================================================
// Password Reset
// ============================================================================

/// POST /api/auth/reset-password
pub async fn request_password_reset<R>(
    State(state): State<AuthAppState<R>>,
    AuthJson(req): AuthJson<EmailRequest>,
) -> AuthResult<Json<MessageResponse>>
where
    R: AuthStore,
{
    RequestPasswordResetUseCase::new(
        state.repo.clone(),
        state.mailer.clone(),
        state.config.clone(),
    )
    .execute(&req.email)
    .await?;

    Ok(Json(MessageResponse {
        message: GENERIC_RESET,
    }))
}

/// POST /api/auth/reset-password/{token}
pub async fn reset_password<R>(
    State(state): State<AuthAppState<R>>,
    Path(token): Path<String>,
    AuthJson(req): AuthJson<ResetPasswordRequest>,
) -> AuthResult<Json<MessageResponse>>
where
    R: AuthStore,
{
    ResetPasswordUseCase::new(state.repo.clone(), state.config.clone())
        .execute(ResetPasswordInput {
            token,
            password: req.password,
            confirm_password: req.confirm_password,
        })
        .await?;

    Ok(Json(MessageResponse {
        message: "Password has been reset successfully",
    }))
}

// ============================================================================
// Profile (requires authentication)
// ============================================================================

/// GET /api/auth/profile
pub async fn get_profile<R>(
    State(state): State<AuthAppState<R>>,
    CurrentUser(claims): CurrentUser,
) -> AuthResult<Json<PublicUser>>
where
    R: AuthStore,
{
    let use_case = ProfileUseCase::new(
        state.repo.clone(),
        state.mailer.clone(),
        state.config.clone(),
    );
    let user = use_case.get(&claims.user_id).await?;
    Ok(Json(PublicUser::from(&user)))
}

/// PUT /api/auth/profile
pub async fn update_profile<R>(
    State(state): State<AuthAppState<R>>,
    CurrentUser(claims): CurrentUser,
    AuthJson(req): AuthJson<ProfileRequest>,
) -> AuthResult<Json<UserMessageResponse>>
where
    R: AuthStore,
{
    let use_case = ProfileUseCase::new(
        state.repo.clone(),
        state.mailer.clone(),
        state.config.clone(),
    );

    let input = ProfileInput {
        name: req.name,
        email: req.email,
        phone: req.phone,
        image: req.image,
    };
    let user = use_case.update(&claims.user_id, input).await?;

    let message = if user.is_verified {
        "Profile updated successfully"
    } else {
        "Profile updated. Please verify your email."
    };

    Ok(Json(UserMessageResponse {
        user: PublicUser::from(&user),
        message,
    }))
}

// ============================================================================
// Addresses (requires authentication)
// ============================================================================

/// GET /api/auth/addresses
pub async fn list_addresses<R>(
    State(state): State<AuthAppState<R>>,
    CurrentUser(claims): CurrentUser,
) -> AuthResult<Json<Vec<AddressResponse>>>
where
    R: AuthStore,
{
    let addresses = AddressUseCases::new(state.repo.clone())
        .list(&claims.user_id)
        .await?;
    Ok(Json(addresses.iter().map(AddressResponse::from).collect()))
}

/// POST /api/auth/addresses
pub async fn create_address<R>(
    State(state): State<AuthAppState<R>>,
    CurrentUser(claims): CurrentUser,
    AuthJson(req): AuthJson<AddressRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: AuthStore,
{
    let address = AddressUseCases::new(state.repo.clone())
        .create(&claims.user_id, address_input(req))
        .await?;
    Ok((StatusCode::CREATED, Json(AddressResponse::from(&address))))
}

/// PUT /api/auth/addresses/{id}
pub async fn update_address<R>(
    State(state): State<AuthAppState<R>>,
    CurrentUser(claims): CurrentUser,
    Path(address_id): Path<String>,
    AuthJson(req): AuthJson<AddressRequest>,
) -> AuthResult<Json<AddressResponse>>
where
    R: AuthStore,
{
    let address_id = parse_address_id(&address_id)?;
    let address = AddressUseCases::new(state.repo.clone())
        .update(&claims.user_id, &address_id, address_input(req))
        .await?;
    Ok(Json(AddressResponse::from(&address)))
}

/// DELETE /api/auth/addresses/{id}
pub async fn delete_address<R>(
    State(state): State<AuthAppState<R>>,
    CurrentUser(claims): CurrentUser,
    Path(address_id): Path<String>,
) -> AuthResult<Json<MessageResponse>>
where
    R: AuthStore,
{
    let address_id = parse_address_id(&address_id)?;
    AddressUseCases::new(state.repo.clone())
        .delete(&claims.user_id, &address_id)
        .await?;
    Ok(Json(MessageResponse {
        message: "Address deleted",
    }))
}

// ============================================================================
// Admin
// ============================================================================

/// POST /api/admin/users/{id}/verify
pub async fn mark_verified<R>(
    State(state): State<AuthAppState<R>>,
    AdminUser(admin): AdminUser,
    Path(user_id): Path<String>,
) -> AuthResult<Json<UserMessageResponse>>
where
    R: AuthStore,
{
    let user_id = UserId::from_str(&user_id).map_err(|_| AuthError::NotFound("User"))?;
    let user = MarkVerifiedUseCase::new(state.repo.clone())
        .execute(&user_id, &admin.user_id)
        .await?;

    Ok(Json(UserMessageResponse {
        user: PublicUser::from(&user),
        message: "User marked as verified",
    }))
}

// ============================================================================
// Helper Functions
// ============================================================================

fn with_cookie(mut response: Response, cookie: Option<HeaderValue>) -> Response {
    if let Some(cookie) = cookie {
        response.headers_mut().append(header::SET_COOKIE, cookie);
    }
    response
}

/// Ids that do not parse cannot belong to the caller either.
fn parse_address_id(raw: &str) -> AuthResult<AddressId> {
    AddressId::from_str(raw).map_err(|_| AuthError::NotFound("Address"))
}

fn address_input(req: AddressRequest) -> AddressInput {
    AddressInput {
        name: req.name,
        line1: req.line1,
        line2: req.line2,
        city: req.city,
        state: req.state,
        postal_code: req.postal_code,
        country: req.country,
        is_default: req.is_default,
    }
}
