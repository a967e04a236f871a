use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::INVALID_CREDENTIALS_MESSAGE;
use crate::domain::authn_user::errors::AuthNUserError;
use crate::domain::authn_user::models::Username;
use crate::inbound::http::router::AppState;

/// Check a username/password pair.
///
/// 200 with an empty body on success, 401 with a generic JSON error for a
/// wrong password or an unknown username, 400 for a malformed body or an
/// empty field, 500 for storage or hashing failures.
pub async fn authenticate(
    State(state): State<AppState>,
    body: Result<Json<AuthenticateRequestBody>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(body) = body.map_err(|e| {
        tracing::debug!(error = %e, "Rejected authentication request body");
        ApiError::BadRequest(e.body_text())
    })?;

    if body.username.is_empty() || body.password.is_empty() {
        return Err(ApiError::BadRequest(
            "Username and password are required".to_string(),
        ));
    }

    let username = Username::new(body.username).map_err(|e| {
        tracing::info!(error = %e, "Authentication attempted with an invalid username");
        ApiError::from(AuthNUserError::from(e))
    })?;

    match state.authn_users.verify(&username, &body.password).await {
        Ok(true) => {
            tracing::debug!(username = %username, "Authentication succeeded");
            Ok(StatusCode::OK)
        }
        Ok(false) => {
            tracing::info!(username = %username, "Authentication failed: password mismatch");
            Err(ApiError::Unauthorized(
                INVALID_CREDENTIALS_MESSAGE.to_string(),
            ))
        }
        Err(e @ AuthNUserError::AuthNUserNotFoundForUsername { .. }) => {
            tracing::info!(username = %username, "Authentication failed: unknown username");
            Err(ApiError::from(e))
        }
        Err(e) => {
            tracing::error!(username = %username, error = %e, "Authentication failed");
            Err(ApiError::from(e))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AuthenticateRequestBody {
    #[serde(default, alias = "username")]
    username: String,
    #[serde(default, alias = "password")]
    password: String,
}
