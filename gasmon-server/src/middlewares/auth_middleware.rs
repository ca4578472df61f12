use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::{header, Request};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::CookieJar;
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::{Authorization, Header};
use serde::Deserialize;

use crate::errors::{ApiError, AuthError};
use crate::services::{TokenClaims, TokenService};

/// Name of the cookie carrying the session token for browser clients.
pub const SESSION_COOKIE: &str = "session";

#[derive(Clone)]
pub struct TokenState {
    pub token_service: Arc<TokenService>,
}

/// Outcome of the session gate for one request.
#[derive(Debug, Clone, Default)]
pub struct Session(Option<TokenClaims>);

impl Session {
    /// The authenticated user's name, if any.
    pub fn user_name(&self) -> Option<&str> {
        self.0.as_ref().map(|claims| claims.sub.as_str())
    }
}

#[derive(Deserialize)]
struct TokenQuery {
    token: Option<String>,
}

/// Looks for a token in the `Authorization` header, then the `token` query
/// parameter, then the session cookie.
fn extract_token(req: &Request<Body>) -> Option<String> {
    let mut headers = req.headers().get_all(header::AUTHORIZATION).iter();
    if let Ok(header) = Authorization::<Bearer>::decode(&mut headers) {
        return Some(header.token().to_string());
    }

    if let Ok(Query(TokenQuery { token: Some(token) })) = Query::<TokenQuery>::try_from_uri(req.uri()) {
        return Some(token);
    }

    CookieJar::from_headers(req.headers())
        .get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|token| !token.is_empty())
}

/// Rejects requests without a valid token.
pub async fn auth(
    State(state): State<TokenState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, ApiError> {
    let token = extract_token(&req).ok_or(AuthError::MissingToken)?;

    let token_data = state
        .token_service
        .retrieve_token_claims(&token)
        .map_err(|_| AuthError::InvalidToken)?;

    req.extensions_mut().insert(token_data.claims);

    Ok(next.run(req).await)
}

/// Never rejects: attaches a [`Session`] that is anonymous when the token is
/// missing, malformed or expired, so polling clients get an empty payload
/// instead of an error.
pub async fn session(State(state): State<TokenState>, mut req: Request<Body>, next: Next) -> Response {
    let claims = extract_token(&req).and_then(|token| {
        state
            .token_service
            .retrieve_token_claims(&token)
            .map(|data| data.claims)
            .map_err(|e| tracing::debug!("ignoring session token: {e}"))
            .ok()
    });

    req.extensions_mut().insert(Session(claims));

    next.run(req).await
}
