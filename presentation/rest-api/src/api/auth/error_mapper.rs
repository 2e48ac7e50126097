use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::auth::errors::AuthError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for AuthError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            AuthError::EmailEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "auth.email_empty",
            ),
            AuthError::PasswordEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "auth.password_empty",
            ),
            AuthError::PasswordMismatch => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "auth.password_mismatch",
            ),
            AuthError::WeakPassword => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "auth.weak_password",
            ),
            AuthError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "AuthenticationError",
                "auth.invalid_credentials",
            ),
            AuthError::SessionInvalid => (
                StatusCode::UNAUTHORIZED,
                "AuthenticationError",
                "auth.session_invalid",
            ),
            AuthError::EmailAlreadyInUse => (
                StatusCode::CONFLICT,
                "ConflictError",
                "auth.email_already_in_use",
            ),
            AuthError::ProviderUnavailable => (
                StatusCode::BAD_GATEWAY,
                "ProviderError",
                "auth.provider_unavailable",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
