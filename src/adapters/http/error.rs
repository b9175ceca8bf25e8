//! Error bodies and status mapping shared by every resource.
//!
//! Every failure is rendered as `{ "error": <message>, "code": <CODE> }`,
//! with `field` added for validation failures.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuthError, DomainError, ErrorCode, ValidationError};
use crate::domain::session::SessionError;

/// Standard error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ErrorResponse {
    pub fn new(code: impl ToString, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.to_string(),
            field: None,
        }
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Forbidden, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unauthorized, message)
    }

    pub fn into_response_with(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

/// 400 for an id segment that is not a number.
pub fn invalid_id(resource: &str) -> Response {
    ErrorResponse::bad_request(format!("Invalid {} ID", resource))
        .into_response_with(StatusCode::BAD_REQUEST)
}

/// 403 for a signed-in caller that lacks the admin flag.
pub fn admin_required() -> Response {
    ErrorResponse::forbidden("Administrator access required").into_response_with(StatusCode::FORBIDDEN)
}

pub fn handle_validation_error(error: ValidationError) -> Response {
    let field = error.field().to_string();
    ErrorResponse::new(ErrorCode::ValidationFailed, error.to_string())
        .with_field(field)
        .into_response_with(StatusCode::BAD_REQUEST)
}

pub fn handle_session_error(error: SessionError) -> Response {
    let status = match &error {
        SessionError::NotFound(_) | SessionError::UserNotFound(_) => StatusCode::NOT_FOUND,
        SessionError::ValidationFailed { .. }
        | SessionError::AlreadyParticipating { .. }
        | SessionError::NotParticipating { .. } => StatusCode::BAD_REQUEST,
        SessionError::Forbidden => StatusCode::FORBIDDEN,
        SessionError::Network(_) => StatusCode::BAD_GATEWAY,
        SessionError::Infrastructure(msg) => {
            tracing::error!(error = %msg, "session store failure");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let mut body = ErrorResponse::new(error.code(), error.message());
    if let SessionError::ValidationFailed { field, .. } = &error {
        body = body.with_field(field.clone());
    }
    body.into_response_with(status)
}

pub fn handle_domain_error(error: DomainError) -> Response {
    let status = match error.code {
        ErrorCode::SessionNotFound | ErrorCode::UserNotFound | ErrorCode::TeacherNotFound => {
            StatusCode::NOT_FOUND
        }
        ErrorCode::ValidationFailed
        | ErrorCode::AlreadyParticipating
        | ErrorCode::NotParticipating => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        ErrorCode::NetworkError => StatusCode::BAD_GATEWAY,
        ErrorCode::InternalError => {
            tracing::error!(error = %error.message, "directory failure");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let mut body = ErrorResponse::new(error.code, error.message.clone());
    if let Some(field) = error.details.get("field") {
        body = body.with_field(field.clone());
    }
    body.into_response_with(status)
}

pub fn handle_auth_error(error: AuthError) -> Response {
    let (status, code) = match &error {
        AuthError::InvalidCredentials | AuthError::InvalidToken => {
            (StatusCode::UNAUTHORIZED, ErrorCode::Unauthorized.to_string())
        }
        AuthError::EmailTaken => (StatusCode::BAD_REQUEST, "EMAIL_TAKEN".to_string()),
        AuthError::InvalidRequest(_) => (
            StatusCode::BAD_REQUEST,
            ErrorCode::ValidationFailed.to_string(),
        ),
        AuthError::ServiceUnavailable(msg) => {
            tracing::error!("Auth service unavailable: {}", msg);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                "SERVICE_UNAVAILABLE".to_string(),
            )
        }
    };

    ErrorResponse::new(code, error.to_string()).into_response_with(status)
}
