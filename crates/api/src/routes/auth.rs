//! Authentication routes for register, login, and token refresh.

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use splitbook_core::auth::{hash_password, validate_password, verify_password};
use splitbook_db::{RepositoryError, UserRecord, UserRepository};
use splitbook_shared::auth::{
    AuthResponse, LoginRequest, RefreshRequest, RegisterRequest, UserInfo,
};
use splitbook_shared::types::UserId;
use splitbook_shared::{AppError, TokenKind, TokenPair};
use tracing::info;

use crate::{ApiError, AppState};

/// Creates the auth router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/refresh", post(refresh))
}

fn invalid_credentials() -> ApiError {
    ApiError::new(
        StatusCode::UNAUTHORIZED,
        "invalid_credentials",
        "Invalid email or password",
    )
}

fn auth_response(state: &AppState, user: UserRecord) -> Result<AuthResponse, ApiError> {
    let tokens = state.jwt_service.issue_pair(user.id.into_inner())?;
    Ok(AuthResponse {
        user: UserInfo {
            id: user.id.into_inner(),
            email: user.email,
            full_name: user.full_name,
        },
        tokens,
    })
}

/// POST /auth/register - Register a new user and sign them in.
async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    if payload.email.trim().is_empty() {
        return Err(AppError::Validation("Email is required".into()).into());
    }
    if payload.full_name.trim().is_empty() {
        return Err(AppError::Validation("Full name is required".into()).into());
    }
    validate_password(&payload.password)?;

    let user_repo = UserRepository::new(state.store.clone());
    if user_repo.email_exists(&payload.email) {
        return Err(email_exists());
    }

    let password_hash = hash_password(&payload.password)?;
    let user = user_repo
        .create(&payload.email, &password_hash, &payload.full_name)
        .map_err(|e| match e {
            RepositoryError::Duplicate(_) => email_exists(),
            other => other.into(),
        })?;

    info!(user_id = %user.id, "New user registered");

    Ok((StatusCode::CREATED, Json(auth_response(&state, user)?)))
}

fn email_exists() -> ApiError {
    ApiError::new(
        StatusCode::CONFLICT,
        "email_exists",
        "An account with this email already exists",
    )
}

/// POST /auth/login - Authenticate user and return tokens.
async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let user_repo = UserRepository::new(state.store.clone());

    let Some(user) = user_repo.find_by_email(&payload.email) else {
        info!("Login attempt for non-existent user");
        return Err(invalid_credentials());
    };

    if !verify_password(&payload.password, &user.password_hash)? {
        info!(user_id = %user.id, "Failed login attempt - invalid password");
        return Err(invalid_credentials());
    }

    info!(user_id = %user.id, "User logged in successfully");
    Ok(Json(auth_response(&state, user)?))
}

/// POST /auth/refresh - Exchange a refresh token for a new pair.
async fn refresh(
    State(state): State<AppState>,
    Json(payload): Json<RefreshRequest>,
) -> Result<Json<TokenPair>, ApiError> {
    let claims = state
        .jwt_service
        .validate_kind(&payload.refresh_token, TokenKind::Refresh)?;

    let user_id = UserId::from_uuid(claims.user_id());
    if UserRepository::new(state.store.clone())
        .find_by_id(user_id)
        .is_none()
    {
        return Err(AppError::Unauthorized("User no longer exists".into()).into());
    }

    Ok(Json(state.jwt_service.issue_pair(claims.user_id())?))
}
