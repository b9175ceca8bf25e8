//! Errors surfaced by the workflows.

use thiserror::Error;

use crate::domain::foundation::{AuthError, DomainError, ErrorCode};
use crate::domain::session::SessionError;

/// Notice shown to the user for every failure kind.
pub const FAILURE_NOTICE: &str = "An error occurred";

#[derive(Debug, Clone, Error)]
pub enum WorkflowError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Directory(#[from] DomainError),

    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl WorkflowError {
    pub fn code(&self) -> ErrorCode {
        match self {
            WorkflowError::Session(err) => err.code(),
            WorkflowError::Directory(err) => err.code,
            WorkflowError::Auth(AuthError::InvalidRequest(_)) => ErrorCode::ValidationFailed,
            WorkflowError::Auth(AuthError::ServiceUnavailable(_)) => ErrorCode::NetworkError,
            WorkflowError::Auth(_) => ErrorCode::Unauthorized,
        }
    }

    /// What the view displays; the same for every kind.
    pub fn user_message(&self) -> &'static str {
        FAILURE_NOTICE
    }

    pub fn is_forbidden(&self) -> bool {
        matches!(self, WorkflowError::Session(SessionError::Forbidden))
    }
}
