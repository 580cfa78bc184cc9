//! Session Handlers
//!
//! Issue and clear the session cookie.

use axum::{extract::State, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use validator::Validate;

use crate::application::dto::{IssueTokenRequest, SuccessResponse};
use crate::config::CookieSettings;
use crate::presentation::http::extractors::JsonBody;
use crate::shared::error::AppError;
use crate::shared::validation::validation_error;
use crate::startup::AppState;

fn session_cookie(settings: &CookieSettings, value: String) -> Cookie<'static> {
    Cookie::build((settings.name.clone(), value))
        .path("/")
        .http_only(true)
        .secure(settings.secure)
        .same_site(SameSite::None)
        .build()
}

/// Sign the posted identity claim and set it as the session cookie
pub async fn issue_token(
    State(state): State<AppState>,
    jar: CookieJar,
    JsonBody(body): JsonBody<IssueTokenRequest>,
) -> Result<(CookieJar, Json<SuccessResponse>), AppError> {
    body.validate().map_err(validation_error)?;

    let token = state.tokens.issue(&body.email, body.extra)?;
    tracing::info!(email = %body.email, "Session token issued");

    let jar = jar.add(session_cookie(&state.settings.cookie, token));

    Ok((jar, Json(SuccessResponse::ok())))
}

/// Expire the session cookie
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<SuccessResponse>) {
    let mut cookie = session_cookie(&state.settings.cookie, String::new());
    cookie.make_removal();

    (jar.add(cookie), Json(SuccessResponse::ok()))
}
