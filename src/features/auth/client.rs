//! Client wrapper for the login endpoint. The login response arrives
//! unwrapped (token, username, role), while failures may carry a
//! `{success:false, message}` body; both shapes are normalized here so the
//! login view only sees a credential or a displayable error.

use crate::{
    app_lib::{AppError, post_json_public},
    features::auth::types::{Credential, LoginRequest, LoginResponse},
};
use serde::Deserialize;

#[derive(Deserialize)]
struct LoginFailure {
    #[serde(default)]
    message: Option<String>,
}

/// Authenticates against `/auth/login` and validates the response into a
/// credential. Bad credentials surface the backend message verbatim.
pub async fn login(request: &LoginRequest) -> Result<Credential, AppError> {
    let response: LoginResponse = post_json_public("/auth/login", request)
        .await
        .map_err(extract_login_message)?;

    Credential::from_parts(&response.token, &response.username, &response.role)
        .ok_or_else(|| AppError::Parse("Login response was incomplete.".to_string()))
}

/// Pulls the human-readable message out of a login error body when the
/// backend sent one; other failures pass through unchanged.
fn extract_login_message(err: AppError) -> AppError {
    if let AppError::Http { status, message } = &err {
        if matches!(status, 400 | 401 | 403) {
            if let Ok(body) = serde_json::from_str::<LoginFailure>(message) {
                if let Some(text) = body.message.filter(|text| !text.trim().is_empty()) {
                    return AppError::Api(text);
                }
            }
            return AppError::Api("Invalid username or password.".to_string());
        }
    }
    err
}
