//! Auth handlers — login, logout, me.

use axum::Json;
use axum::extract::State;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use validator::Validate;

use smthub_core::error::AppError;

use crate::dto::request::LoginRequest;
use crate::dto::response::{ApiResponse, LoginResponse, MessageResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, JsonOrForm};
use crate::state::AppState;

/// POST /api/auth/login
///
/// Accepts JSON or form-encoded credentials. On success the token is
/// returned in the body and also set as an HTTP-only cookie, so both
/// API clients and browsers can authenticate follow-up requests.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    JsonOrForm(req): JsonOrForm<LoginRequest>,
) -> Result<(CookieJar, Json<ApiResponse<LoginResponse>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let outcome = state.auth_service.login(&req.username, &req.password).await?;

    let cookie = auth_cookie(&state.config.auth.cookie_name, outcome.issued.token.clone());

    let body = ApiResponse::ok(LoginResponse {
        token: outcome.issued.token,
        expires_at: outcome.issued.expires_at,
        username: outcome.principal.username,
        authorities: outcome.principal.authorities,
    });

    Ok((jar.add(cookie), Json(body)))
}

/// POST /api/auth/logout
///
/// Clears the auth cookie. Bearer tokens remain valid until expiry;
/// clients discard them.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<ApiResponse<MessageResponse>>) {
    let mut removal = Cookie::from(state.config.auth.cookie_name.clone());
    removal.set_path("/");

    (
        jar.remove(removal),
        Json(ApiResponse::ok(MessageResponse {
            message: "Logged out successfully".to_string(),
        })),
    )
}

/// GET /api/auth/me
pub async fn me(auth: AuthUser) -> Json<ApiResponse<UserResponse>> {
    Json(ApiResponse::ok(UserResponse {
        username: auth.username.clone(),
        authorities: auth.authorities.clone(),
    }))
}

// Session-scoped cookie; the token's own expiry bounds its lifetime.
fn auth_cookie(name: &str, token: String) -> Cookie<'static> {
    let mut cookie = Cookie::new(name.to_string(), token);
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie.set_path("/");
    cookie
}
