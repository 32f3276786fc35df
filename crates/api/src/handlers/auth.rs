//! Handlers for account registration and login.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use validator::Validate;

use cinelog_core::error::CoreError;
use cinelog_core::roles::{ROLE_ADMIN, ROLE_USER};
use cinelog_db::models::user::{LoginUser, PublicUser, RegisterUser};
use cinelog_db::repositories::UserRepo;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::response::ApiResponse;
use crate::state::AppState;

/// Payload returned by both register and login.
#[derive(Debug, Serialize)]
pub struct AuthPayload {
    pub token: String,
    pub user: PublicUser,
}

// ---------------------------------------------------------------------------
// POST /auth/register
// ---------------------------------------------------------------------------

/// Register a new account. The very first account on a fresh instance is
/// granted the admin role; every later account is a regular user.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterUser>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let name = input.name.trim().to_string();
    let email = input.email.trim().to_lowercase();

    let role = if UserRepo::count_all(&state.pool).await? == 0 {
        ROLE_ADMIN
    } else {
        ROLE_USER
    };

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;

    // Duplicate emails surface as a 409 via uq_users_email.
    let user = UserRepo::create(&state.pool, &name, &email, &password_hash, role).await?;

    let token = generate_access_token(user.id, &user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation failed: {e}")))?;

    tracing::info!(user_id = user.id, role = %user.role, "User registered");
    Ok(ApiResponse::created(AuthPayload {
        token,
        user: user.into(),
    }))
}

// ---------------------------------------------------------------------------
// POST /auth/login
// ---------------------------------------------------------------------------

/// Authenticate with email and password, returning a fresh access token.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginUser>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let email = input.email.trim().to_lowercase();

    // One generic message for both unknown email and wrong password, so
    // the endpoint does not leak which emails are registered.
    let user = UserRepo::find_by_email(&state.pool, &email)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Invalid email or password".into())))?;

    let matches = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification failed: {e}")))?;
    if !matches {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid email or password".into(),
        )));
    }

    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    let now = chrono::Utc::now();
    UserRepo::set_last_login(&state.pool, user.id, now).await?;

    let token = generate_access_token(user.id, &user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation failed: {e}")))?;

    tracing::info!(user_id = user.id, "User logged in");

    let mut public: PublicUser = user.into();
    public.last_login_at = Some(now);
    Ok(ApiResponse::ok(AuthPayload {
        token,
        user: public,
    }))
}
