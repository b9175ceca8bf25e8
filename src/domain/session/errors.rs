//! Session-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, SessionId, UserId, ValidationError};

/// Errors raised by the Session Repository and the Participation Manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Create/update payload is missing a required field or is malformed.
    ValidationFailed { field: String, message: String },
    /// Booking session was not found.
    NotFound(SessionId),
    /// Referenced user was not found.
    UserNotFound(UserId),
    /// User is already in the session's participant set.
    AlreadyParticipating { session_id: SessionId, user_id: UserId },
    /// User is not in the session's participant set.
    NotParticipating { session_id: SessionId, user_id: UserId },
    /// Identity is not allowed to perform the operation.
    Forbidden,
    /// Transport failure talking to the backing store.
    Network(String),
    /// Anything else the backing store reports.
    Infrastructure(String),
}

impl SessionError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        SessionError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn not_found(id: SessionId) -> Self {
        SessionError::NotFound(id)
    }
    pub fn user_not_found(id: UserId) -> Self {
        SessionError::UserNotFound(id)
    }
    pub fn already_participating(session_id: SessionId, user_id: UserId) -> Self {
        SessionError::AlreadyParticipating {
            session_id,
            user_id,
        }
    }
    pub fn not_participating(session_id: SessionId, user_id: UserId) -> Self {
        SessionError::NotParticipating {
            session_id,
            user_id,
        }
    }
    pub fn forbidden() -> Self {
        SessionError::Forbidden
    }
    pub fn network(message: impl Into<String>) -> Self {
        SessionError::Network(message.into())
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        SessionError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            SessionError::NotFound(_) => ErrorCode::SessionNotFound,
            SessionError::UserNotFound(_) => ErrorCode::UserNotFound,
            SessionError::AlreadyParticipating { .. } => ErrorCode::AlreadyParticipating,
            SessionError::NotParticipating { .. } => ErrorCode::NotParticipating,
            SessionError::Forbidden => ErrorCode::Forbidden,
            SessionError::Network(_) => ErrorCode::NetworkError,
            SessionError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            SessionError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            SessionError::NotFound(id) => format!("Session not found: {}", id),
            SessionError::UserNotFound(id) => format!("User not found: {}", id),
            SessionError::AlreadyParticipating {
                session_id,
                user_id,
            } => format!(
                "User {} already participates in session {}",
                user_id, session_id
            ),
            SessionError::NotParticipating {
                session_id,
                user_id,
            } => format!(
                "User {} does not participate in session {}",
                user_id, session_id
            ),
            SessionError::Forbidden => "Permission denied".to_string(),
            SessionError::Network(msg) => format!("Network error: {}", msg),
            SessionError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }

    /// True for the two "addressed something that does not exist" kinds.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SessionError::NotFound(_) | SessionError::UserNotFound(_))
    }
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SessionError {}

impl From<ValidationError> for SessionError {
    fn from(err: ValidationError) -> Self {
        SessionError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for SessionError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => SessionError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            ErrorCode::Unauthorized | ErrorCode::Forbidden => SessionError::Forbidden,
            ErrorCode::NetworkError => SessionError::Network(err.message),
            _ => SessionError::Infrastructure(err.to_string()),
        }
    }
}
