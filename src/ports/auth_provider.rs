//! Auth provider port.
//!
//! The external collaborator that turns credentials into a signed-in
//! identity. Token issuance is the provider's concern; the booking domain
//! only keeps the resulting `Identity`.
//!
//! # Example
//!
//! ```ignore
//! let signed_in = auth_provider.login(&Credentials::new(email, password)).await?;
//! identity_store.set_identity(signed_in.identity());
//! ```

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, Credentials, RegisterRequest, SignedIn};

/// Logs users in and registers new accounts.
///
/// # Contract
///
/// Implementations must:
/// - Return `AuthError::InvalidCredentials` when email/password do not match
/// - Return `AuthError::EmailTaken` when registering an existing email
/// - Return `AuthError::ServiceUnavailable` for transient errors
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<SignedIn, AuthError>;

    async fn register(&self, request: &RegisterRequest) -> Result<(), AuthError>;

    /// Forget any credentials held for the current user. No-op by default.
    fn logout(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;
    use secrecy::ExposeSecret;
    use std::sync::Mutex;

    /// Simple mock implementation for testing the trait
    struct TestAuthProvider {
        accounts: Mutex<Vec<(String, String)>>,
    }

    #[async_trait]
    impl AuthProvider for TestAuthProvider {
        async fn login(&self, credentials: &Credentials) -> Result<SignedIn, AuthError> {
            let accounts = self.accounts.lock().unwrap();
            let index = accounts
                .iter()
                .position(|(email, password)| {
                    *email == credentials.email && password == credentials.password.expose_secret()
                })
                .ok_or(AuthError::InvalidCredentials)?;
            Ok(SignedIn {
                token: "token".to_string(),
                token_type: "Bearer".to_string(),
                id: UserId::new(index as i64 + 1),
                username: credentials.email.clone(),
                first_name: "first".to_string(),
                last_name: "last".to_string(),
                admin: false,
            })
        }

        async fn register(&self, request: &RegisterRequest) -> Result<(), AuthError> {
            let mut accounts = self.accounts.lock().unwrap();
            if accounts.iter().any(|(email, _)| *email == request.email) {
                return Err(AuthError::EmailTaken);
            }
            accounts.push((
                request.email.clone(),
                request.password.expose_secret().clone(),
            ));
            Ok(())
        }
    }

    #[tokio::test]
    async fn registered_user_can_login() {
        let provider = TestAuthProvider {
            accounts: Mutex::new(Vec::new()),
        };
        provider
            .register(&RegisterRequest::new("a@b.c", "Ada", "Lovelace", "pw"))
            .await
            .unwrap();

        let signed_in = provider.login(&Credentials::new("a@b.c", "pw")).await.unwrap();
        assert_eq!(signed_in.id, UserId::new(1));
    }

    #[tokio::test]
    async fn wrong_password_is_rejected() {
        let provider = TestAuthProvider {
            accounts: Mutex::new(vec![("a@b.c".to_string(), "pw".to_string())]),
        };
        let result = provider.login(&Credentials::new("a@b.c", "nope")).await;
        assert_eq!(result, Err(AuthError::InvalidCredentials));
    }

    #[test]
    fn auth_provider_trait_is_object_safe_and_send_sync() {
        fn _assert_trait_object(_: &dyn AuthProvider) {}
        fn _assert_arc_send_sync<T: Send + Sync + ?Sized>() {}
        _assert_arc_send_sync::<std::sync::Arc<dyn AuthProvider>>();
    }
}
