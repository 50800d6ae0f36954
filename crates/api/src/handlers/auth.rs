//! Handlers for the `/auth` resource (login, logout, validate).

use axum::extract::State;
use axum::http::header::USER_AGENT;
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;

use bengkel_core::types::{DbId, Timestamp};
use bengkel_db::models::session::CreateSession;
use bengkel_db::repositories::{SessionRepo, UserRepo};

use crate::auth::password::hash_password;
use crate::auth::token::generate_session_token;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::{bearer_token, AuthSession};
use crate::response;
use crate::state::AppState;

/// Sessions live this long after login; expiry is enforced lazily at
/// validation time.
const SESSION_DURATION_DAYS: i64 = 7;

/// `device_info` column width.
const DEVICE_INFO_MAX_CHARS: usize = 255;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Successful login payload. The session token is shown to the caller
/// exactly once, here.
#[derive(Debug, Serialize)]
pub struct LoginData {
    pub username: String,
    pub fullname: String,
    pub role_id: DbId,
    pub session_token: String,
    pub expires_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/login
///
/// Authenticate with username + password, creating a new session.
pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(input): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    if input.username.is_empty() || input.password.is_empty() {
        return Err(AppError::Validation(
            "Username and password are required".into(),
        ));
    }

    // The lookup matches username and digest together, so the failure
    // below cannot distinguish an unknown user from a wrong password.
    let digest = hash_password(&input.password);
    let user = UserRepo::find_by_credentials(&state.pool, &input.username, &digest)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Login credential lookup failed");
            AppError::Internal("Database error".into())
        })?
        .ok_or_else(|| AppError::Unauthorized("Invalid username or password".into()))?;

    let session_token = generate_session_token();
    let expires_at = Utc::now() + chrono::Duration::days(SESSION_DURATION_DAYS);
    let device_info = headers
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("Unknown Device")
        .chars()
        .take(DEVICE_INFO_MAX_CHARS)
        .collect::<String>();

    let session_input = CreateSession {
        username: user.username.clone(),
        session_token,
        expires_at,
        device_info,
    };
    let session = SessionRepo::create(&state.pool, &session_input)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Session creation failed");
            AppError::Internal("Failed to create session".into())
        })?;

    Ok(response::ok_message(
        LoginData {
            username: user.username,
            fullname: user.fullname,
            role_id: user.role_id,
            session_token: session.session_token,
            expires_at: session.expires_at,
        },
        "Login successful",
    ))
}

/// POST /api/auth/logout
///
/// Invalidate the presented session. Logging out an already-inactive
/// session is rejected with 400, not silently accepted.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> AppResult<impl IntoResponse> {
    let token = bearer_token(&headers)
        .ok_or_else(|| AppError::Unauthorized("No session token provided".into()))?;

    let session = SessionRepo::find_active(&state.pool, token)
        .await
        .ok()
        .flatten();
    if session.is_none() {
        return Err(AppError::Validation(
            "Session not found or already invalidated".into(),
        ));
    }

    SessionRepo::invalidate(&state.pool, token)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Session invalidation failed");
            AppError::Internal("Failed to invalidate session".into())
        })?;

    Ok(response::ok_message(
        serde_json::Value::Null,
        "Logout successful",
    ))
}

/// GET /api/auth/validate
///
/// Succeeds iff the presented session token is valid; the extractor
/// does all the work.
pub async fn validate(auth: AuthSession) -> AppResult<impl IntoResponse> {
    Ok(response::ok(json!({
        "valid": true,
        "username": auth.username,
    })))
}
