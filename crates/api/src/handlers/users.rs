//! Handlers for the authenticated user's own account.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use validator::Validate;

use cinelog_core::error::CoreError;
use cinelog_db::models::user::{ChangePassword, PublicUser, UpdateProfile, User};
use cinelog_db::repositories::UserRepo;

use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::{message_response, ApiResponse};
use crate::state::AppState;

/// Fetch the caller's full user row, 404 if the account vanished between
/// token issuance and now.
async fn current_user(pool: &sqlx::PgPool, user_id: cinelog_core::types::DbId) -> AppResult<User> {
    UserRepo::find_by_id(pool, user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("User", user_id)))
}

// ---------------------------------------------------------------------------
// GET /users/me
// ---------------------------------------------------------------------------

/// The caller's own profile.
pub async fn get_me(auth: AuthUser, State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let user = current_user(&state.pool, auth.user_id).await?;
    Ok(ApiResponse::ok(PublicUser::from(user)))
}

// ---------------------------------------------------------------------------
// PUT /users/me
// ---------------------------------------------------------------------------

/// Update the caller's name and/or email. The new email must not belong to
/// another account.
pub async fn update_me(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(mut input): Json<UpdateProfile>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    if let Some(email) = &input.email {
        let email = email.trim().to_lowercase();
        if let Some(existing) = UserRepo::find_by_email(&state.pool, &email).await? {
            if existing.id != auth.user_id {
                return Err(AppError::Core(CoreError::Conflict(
                    "Email is already in use".into(),
                )));
            }
        }
        input.email = Some(email);
    }
    if let Some(name) = &input.name {
        input.name = Some(name.trim().to_string());
    }

    let updated = UserRepo::update_profile(&state.pool, auth.user_id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("User", auth.user_id)))?;

    tracing::info!(user_id = updated.id, "Profile updated");
    Ok(ApiResponse::ok(PublicUser::from(updated)))
}

// ---------------------------------------------------------------------------
// PUT /users/me/password
// ---------------------------------------------------------------------------

/// Change the caller's password after verifying the current one.
pub async fn change_password(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<ChangePassword>,
) -> AppResult<Response> {
    input.validate()?;

    let user = current_user(&state.pool, auth.user_id).await?;

    let matches = verify_password(&input.current_password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification failed: {e}")))?;
    if !matches {
        return Err(AppError::BadRequest("Current password is incorrect".into()));
    }

    let new_hash = hash_password(&input.new_password)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;
    UserRepo::update_password(&state.pool, auth.user_id, &new_hash)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::not_found("User", auth.user_id)))?;

    tracing::info!(user_id = auth.user_id, "Password changed");
    Ok(message_response(StatusCode::OK, "Password updated"))
}

// ---------------------------------------------------------------------------
// DELETE /users/me
// ---------------------------------------------------------------------------

/// Delete the caller's account. Votes, comments, favorites, and list
/// entries are removed by the FK cascade.
pub async fn delete_me(auth: AuthUser, State(state): State<AppState>) -> AppResult<Response> {
    let deleted = UserRepo::delete(&state.pool, auth.user_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::not_found("User", auth.user_id)));
    }
    tracing::info!(user_id = auth.user_id, "Account deleted");
    Ok(message_response(StatusCode::OK, "Account deleted"))
}
