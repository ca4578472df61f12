use std::sync::Arc;

use anyhow::anyhow;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{middleware, Extension, Json, Router};
use axum_extra::extract::cookie::{Cookie, SameSite};
use axum_extra::extract::CookieJar;
use gasmon_api::models::*;
use time::Duration;

use crate::errors::{ApiError, AuthError};
use crate::middlewares::{auth, TokenState, SESSION_COOKIE};
use crate::repositories::UserRepository;
use crate::services::{AuthService, TokenClaims, TokenService};

#[derive(Clone)]
pub struct AuthState {
    pub auth_service: Arc<AuthService>,
    pub token_service: Arc<TokenService>,
    pub user_repository: Arc<UserRepository>,
}

pub fn auth_router(auth_state: AuthState, token_state: TokenState) -> Router {
    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
        .route(
            "/api/auth/me",
            get(get_current_user).route_layer(middleware::from_fn_with_state(token_state, auth)),
        )
        .with_state(auth_state)
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful, return session token", body = String),
        (status = 401, description = "Invalid credentials"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn login(
    State(state): State<AuthState>,
    jar: CookieJar,
    Json(body): Json<LoginRequest>,
) -> Result<(CookieJar, String), ApiError> {
    let Some(user) = state.user_repository.find_by_user_name(&body.user_name).await? else {
        tracing::warn!("login rejected for unknown user {}", body.user_name);
        return Err(AuthError::InvalidCredentials.into());
    };

    let result = state
        .auth_service
        .verify(&user, &body.password)
        .map_err(|e| anyhow!("Failed to verify password: {}", e))?;

    if !result {
        tracing::warn!("login rejected for {}: wrong password", user.user_name);
        return Err(AuthError::InvalidCredentials.into());
    }

    let token = state
        .token_service
        .generate_token(&user)
        .map_err(|e| anyhow!("Failed to generate token: {}", e))?;

    tracing::info!("user {} logged in", token.user_name);

    let cookie = Cookie::build((SESSION_COOKIE, token.token.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::seconds(state.token_service.expiration() as i64));

    Ok((jar.add(cookie), token.token))
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    responses(
        (status = 204, description = "Session cookie cleared")
    )
)]
pub async fn logout(jar: CookieJar) -> (CookieJar, StatusCode) {
    // always expire the cookie, even if this request did not carry it
    let cookie = Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .http_only(true)
        .max_age(Duration::ZERO);

    (jar.add(cookie), StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "auth",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Current session user", body = UserResponse),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_current_user(Extension(token_data): Extension<TokenClaims>) -> Json<UserResponse> {
    Json(UserResponse {
        user_name: token_data.sub,
    })
}
