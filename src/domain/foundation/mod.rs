//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, authentication types and error types
//! that form the vocabulary of the booking domain.

mod auth;
mod errors;
mod ids;
mod timestamp;

pub use auth::{AuthError, Credentials, Identity, RegisterRequest, SignedIn};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{SessionId, TeacherId, UserId};
pub use timestamp::Timestamp;
