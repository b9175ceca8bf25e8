//! Authentication types for the domain layer.
//!
//! `Identity` is what the rest of the system knows about the signed-in actor:
//! an id and an admin flag. Any auth collaborator (the in-memory accounts, the
//! REST API, a real identity provider) populates it.
//!
//! # Example
//!
//! ```ignore
//! let signed_in = auth_provider.login(&credentials).await?;
//! identity_store.set_identity(signed_in.identity());
//! ```

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{UserId, ValidationError};

/// The authenticated actor for the current browser session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: UserId,
    pub admin: bool,
}

impl Identity {
    pub fn new(id: UserId, admin: bool) -> Self {
        Self { id, admin }
    }

    /// A regular, non-admin user.
    pub fn user(id: UserId) -> Self {
        Self::new(id, false)
    }

    /// An administrator.
    pub fn admin(id: UserId) -> Self {
        Self::new(id, true)
    }

    /// Whether this identity may add or remove `user_id` from a session.
    ///
    /// Administrators may act on anyone; everybody else only on themselves.
    pub fn may_act_for(&self, user_id: UserId) -> bool {
        self.admin || self.id == user_id
    }
}

/// Login form values.
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: SecretString,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: SecretString::new(password.into()),
        }
    }

    /// Both fields are required.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.email.trim().is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        if self.password.expose_secret().is_empty() {
            return Err(ValidationError::empty_field("password"));
        }
        Ok(())
    }
}

/// Registration form values.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: SecretString,
}

impl RegisterRequest {
    pub fn new(
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            password: SecretString::new(password.into()),
        }
    }

    /// Every field is required; the email must at least look like one.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.email.trim().is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        if !self.email.contains('@') {
            return Err(ValidationError::invalid_format("email", "missing @ symbol"));
        }
        if self.first_name.trim().is_empty() {
            return Err(ValidationError::empty_field("firstName"));
        }
        if self.last_name.trim().is_empty() {
            return Err(ValidationError::empty_field("lastName"));
        }
        if self.password.expose_secret().is_empty() {
            return Err(ValidationError::empty_field("password"));
        }
        Ok(())
    }
}

/// Result of a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedIn {
    pub token: String,
    #[serde(rename = "type")]
    pub token_type: String,
    pub id: UserId,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub admin: bool,
}

impl SignedIn {
    /// The identity the Session Store keeps for this login.
    pub fn identity(&self) -> Identity {
        Identity::new(self.id, self.admin)
    }
}

/// Authentication errors raised by the auth collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Email/password pair does not match an account.
    #[error("Bad credentials")]
    InvalidCredentials,

    /// Registration with an email that already has an account.
    #[error("Email is already taken")]
    EmailTaken,

    /// Login or registration form is incomplete.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The bearer token is missing, malformed, or unknown.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The authentication service is unavailable (network, config, etc.).
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Returns true if this is a transient error that may succeed on retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, AuthError::ServiceUnavailable(_))
    }
}

impl From<ValidationError> for AuthError {
    fn from(err: ValidationError) -> Self {
        AuthError::InvalidRequest(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_may_only_act_for_self() {
        let identity = Identity::user(UserId::new(1));
        assert!(identity.may_act_for(UserId::new(1)));
        assert!(!identity.may_act_for(UserId::new(2)));
    }

    #[test]
    fn admin_may_act_for_anyone() {
        let identity = Identity::admin(UserId::new(2));
        assert!(identity.may_act_for(UserId::new(1)));
        assert!(identity.may_act_for(UserId::new(2)));
    }

    #[test]
    fn credentials_require_both_fields() {
        assert!(Credentials::new("yoga@studio.com", "test!1234").validate().is_ok());
        assert_eq!(
            Credentials::new("", "pw").validate(),
            Err(ValidationError::empty_field("email"))
        );
        assert_eq!(
            Credentials::new("a@b.c", "").validate(),
            Err(ValidationError::empty_field("password"))
        );
    }

    #[test]
    fn register_request_rejects_missing_names() {
        let req = RegisterRequest::new("email@email.com", "", "lastName", "password");
        assert_eq!(req.validate(), Err(ValidationError::empty_field("firstName")));
    }

    #[test]
    fn register_request_rejects_malformed_email() {
        let req = RegisterRequest::new("not-an-email", "first", "last", "password");
        assert!(matches!(
            req.validate(),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn signed_in_deserializes_from_login_response() {
        let json = r#"{
            "token": "token",
            "type": "Bearer",
            "id": 1,
            "username": "username",
            "firstName": "firstName",
            "lastName": "lastName",
            "admin": false
        }"#;
        let signed_in: SignedIn = serde_json::from_str(json).unwrap();
        assert_eq!(signed_in.identity(), Identity::user(UserId::new(1)));
        assert_eq!(signed_in.token_type, "Bearer");
    }

    #[test]
    fn auth_error_is_transient_for_service_errors() {
        assert!(AuthError::service_unavailable("timeout").is_transient());
        assert!(!AuthError::InvalidCredentials.is_transient());
    }
}
