//! Token validation port.
//!
//! HTTP middleware uses this to turn a Bearer token into the caller's
//! `Identity`. Provider-agnostic: the in-memory accounts implement it, a
//! real identity provider could too.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, Identity};

/// Validates access tokens and extracts the caller's identity.
///
/// # Contract
///
/// Implementations must:
/// - Return `AuthError::InvalidToken` for unknown or malformed tokens
/// - Return `AuthError::ServiceUnavailable` for transient errors
#[async_trait]
pub trait TokenValidator: Send + Sync {
    /// Validate a raw token (without the "Bearer " prefix).
    async fn validate(&self, token: &str) -> Result<Identity, AuthError>;
}
