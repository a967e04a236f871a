use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::authn_user::errors::AuthNUserError;

pub mod authenticate;

/// Body returned for every rejected credential check, whatever the cause.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Username or password is incorrect";

/// Errors surfaced by the HTTP layer.
///
/// Only `Unauthorized` carries a body; the internal detail of the others is
/// for server-side logs and never reaches the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST.into_response(),
            ApiError::Unauthorized(message) => (
                StatusCode::UNAUTHORIZED,
                Json(ApiErrorBody { error: message }),
            )
                .into_response(),
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}

impl From<AuthNUserError> for ApiError {
    fn from(err: AuthNUserError) -> Self {
        match err {
            // A username that fails validation or is unknown must look exactly
            // like a wrong password.
            AuthNUserError::AuthNUserNotFoundForUsername { .. }
            | AuthNUserError::InvalidUsername(_) => {
                ApiError::Unauthorized(INVALID_CREDENTIALS_MESSAGE.to_string())
            }
            AuthNUserError::InvalidEmail(_)
            | AuthNUserError::DuplicateAuthNUserForUsername { .. }
            | AuthNUserError::Hashing(_)
            | AuthNUserError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorBody {
    pub error: String,
}
