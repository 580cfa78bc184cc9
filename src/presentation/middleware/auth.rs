//! Authentication Middleware
//!
//! Session-cookie JWT validation for protected routes.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;

use crate::application::services::SessionClaims;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Authenticated user extension
///
/// Only [`auth_middleware`] inserts this; handlers read it.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub email: String,
    pub claims: SessionClaims,
}

impl From<SessionClaims> for AuthUser {
    fn from(claims: SessionClaims) -> Self {
        Self {
            email: claims.email.clone(),
            claims,
        }
    }
}

/// Authentication middleware that validates the session cookie
pub async fn auth_middleware(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = jar
        .get(&state.settings.cookie.name)
        .map(|cookie| cookie.value().to_owned())
        .ok_or_else(|| {
            tracing::debug!(path = %request.uri().path(), "Missing session cookie");
            AppError::unauthorized()
        })?;

    let claims = state.tokens.verify(&token).map_err(|e| {
        tracing::debug!(error = %e, path = %request.uri().path(), "Rejected session token");
        AppError::from(e)
    })?;

    // Insert authenticated user into request extensions
    request.extensions_mut().insert(AuthUser::from(claims));

    // Continue to the next handler
    Ok(next.run(request).await)
}
