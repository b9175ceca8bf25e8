//! In-memory user accounts.
//!
//! Implements the `AuthProvider`, `TokenValidator` and `UserDirectory` ports
//! for local runs and tests. Tokens are opaque random UUIDs held in memory;
//! issuing signed tokens is left to a real identity provider.
//!
//! # Example
//!
//! ```ignore
//! let accounts = InMemoryAccounts::new()
//!     .with_admin("yoga@studio.com", "Admin", "Admin", "test!1234");
//!
//! let signed_in = accounts.login(&Credentials::new("yoga@studio.com", "test!1234")).await?;
//! let identity = accounts.validate(&signed_in.token).await?;
//! ```

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use subtle::ConstantTimeEq;
use uuid::Uuid;

use crate::domain::foundation::{
    AuthError, Credentials, DomainError, ErrorCode, Identity, RegisterRequest, SignedIn, UserId,
};
use crate::domain::user::User;
use crate::ports::{AuthProvider, TokenValidator, UserDirectory};

const TOKEN_TYPE: &str = "Bearer";

struct Account {
    user: User,
    password: SecretString,
}

#[derive(Default)]
struct AccountsState {
    accounts: BTreeMap<UserId, Account>,
    tokens: HashMap<String, UserId>,
    next_id: i64,
}

impl AccountsState {
    fn find_by_email(&self, email: &str) -> Option<&Account> {
        self.accounts
            .values()
            .find(|a| a.user.email.eq_ignore_ascii_case(email))
    }

    fn insert(
        &mut self,
        email: &str,
        first_name: &str,
        last_name: &str,
        password: SecretString,
        admin: bool,
    ) -> UserId {
        self.next_id += 1;
        let id = UserId::new(self.next_id);
        let user = User::new(id, email.trim(), first_name, last_name, admin);
        self.accounts.insert(id, Account { user, password });
        id
    }
}

/// Shared in-memory account store. Clones share the same data.
#[derive(Clone, Default)]
pub struct InMemoryAccounts {
    state: Arc<RwLock<AccountsState>>,
}

impl InMemoryAccounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an administrator account.
    pub fn with_admin(
        self,
        email: &str,
        first_name: &str,
        last_name: &str,
        password: impl Into<String>,
    ) -> Self {
        self.add_account(email, first_name, last_name, password, true);
        self
    }

    /// Adds a regular user account.
    pub fn with_user(
        self,
        email: &str,
        first_name: &str,
        last_name: &str,
        password: impl Into<String>,
    ) -> Self {
        self.add_account(email, first_name, last_name, password, false);
        self
    }

    /// Adds an account and returns its id.
    pub fn add_account(
        &self,
        email: &str,
        first_name: &str,
        last_name: &str,
        password: impl Into<String>,
        admin: bool,
    ) -> UserId {
        self.write().insert(
            email,
            first_name,
            last_name,
            SecretString::new(password.into()),
            admin,
        )
    }

    pub fn account_count(&self) -> usize {
        self.read().accounts.len()
    }

    fn read(&self) -> RwLockReadGuard<'_, AccountsState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, AccountsState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn passwords_match(stored: &SecretString, given: &SecretString) -> bool {
    stored
        .expose_secret()
        .as_bytes()
        .ct_eq(given.expose_secret().as_bytes())
        .into()
}

fn user_not_found(id: UserId) -> DomainError {
    DomainError::new(ErrorCode::UserNotFound, format!("User not found: {}", id))
}

#[async_trait]
impl AuthProvider for InMemoryAccounts {
    async fn login(&self, credentials: &Credentials) -> Result<SignedIn, AuthError> {
        credentials.validate()?;

        let mut state = self.write();
        let user = match state.find_by_email(credentials.email.trim()) {
            Some(account) if passwords_match(&account.password, &credentials.password) => {
                account.user.clone()
            }
            _ => {
                tracing::warn!("Login rejected: bad credentials");
                return Err(AuthError::InvalidCredentials);
            }
        };

        let token = Uuid::new_v4().to_string();
        state.tokens.insert(token.clone(), user.id);
        tracing::debug!(user_id = %user.id, "Issued access token");

        Ok(SignedIn {
            token,
            token_type: TOKEN_TYPE.to_string(),
            id: user.id,
            username: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            admin: user.admin,
        })
    }

    async fn register(&self, request: &RegisterRequest) -> Result<(), AuthError> {
        request.validate()?;

        let mut state = self.write();
        if state.find_by_email(request.email.trim()).is_some() {
            return Err(AuthError::EmailTaken);
        }
        let id = state.insert(
            &request.email,
            &request.first_name,
            &request.last_name,
            request.password.clone(),
            false,
        );
        tracing::info!(user_id = %id, "Registered account");
        Ok(())
    }
}

#[async_trait]
impl TokenValidator for InMemoryAccounts {
    async fn validate(&self, token: &str) -> Result<Identity, AuthError> {
        let state = self.read();
        state
            .tokens
            .get(token)
            .and_then(|id| state.accounts.get(id))
            .map(|account| account.user.identity())
            .ok_or(AuthError::InvalidToken)
    }
}

#[async_trait]
impl UserDirectory for InMemoryAccounts {
    async fn get(&self, id: UserId) -> Result<User, DomainError> {
        self.read()
            .accounts
            .get(&id)
            .map(|account| account.user.clone())
            .ok_or_else(|| user_not_found(id))
    }

    async fn exists(&self, id: UserId) -> Result<bool, DomainError> {
        Ok(self.read().accounts.contains_key(&id))
    }

    async fn delete(&self, id: UserId) -> Result<(), DomainError> {
        let mut state = self.write();
        state.accounts.remove(&id).ok_or_else(|| user_not_found(id))?;
        state.tokens.retain(|_, owner| *owner != id);
        tracing::info!(user_id = %id, "Deleted account");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accounts() -> InMemoryAccounts {
        InMemoryAccounts::new()
            .with_admin("yoga@studio.com", "Admin", "Admin", "test!1234")
            .with_user("toto3@toto.com", "toto", "toto", "test!1234")
    }

    #[tokio::test]
    async fn login_issues_token_that_validates() {
        let accounts = accounts();

        let signed_in = accounts
            .login(&Credentials::new("yoga@studio.com", "test!1234"))
            .await
            .unwrap();

        assert_eq!(signed_in.token_type, "Bearer");
        assert!(signed_in.admin);
        let identity = accounts.validate(&signed_in.token).await.unwrap();
        assert_eq!(identity, Identity::admin(signed_in.id));
    }

    #[tokio::test]
    async fn wrong_password_is_rejected() {
        let result = accounts()
            .login(&Credentials::new("yoga@studio.com", "nope"))
            .await;
        assert_eq!(result, Err(AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn unknown_email_is_rejected() {
        let result = accounts()
            .login(&Credentials::new("ghost@studio.com", "test!1234"))
            .await;
        assert_eq!(result, Err(AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn register_rejects_taken_email() {
        let accounts = accounts();
        let request = RegisterRequest::new("toto3@toto.com", "toto", "toto", "pw");
        assert_eq!(accounts.register(&request).await, Err(AuthError::EmailTaken));
    }

    #[tokio::test]
    async fn registered_account_is_a_regular_user() {
        let accounts = accounts();
        accounts
            .register(&RegisterRequest::new("new@studio.com", "New", "User", "secret"))
            .await
            .unwrap();

        let signed_in = accounts
            .login(&Credentials::new("new@studio.com", "secret"))
            .await
            .unwrap();
        assert!(!signed_in.admin);
        assert_eq!(accounts.account_count(), 3);
    }

    #[tokio::test]
    async fn unknown_token_is_invalid() {
        let result = accounts().validate("not-a-token").await;
        assert_eq!(result, Err(AuthError::InvalidToken));
    }

    #[tokio::test]
    async fn deleted_account_loses_tokens() {
        let accounts = accounts();
        let signed_in = accounts
            .login(&Credentials::new("toto3@toto.com", "test!1234"))
            .await
            .unwrap();

        accounts.delete(signed_in.id).await.unwrap();

        assert!(!accounts.exists(signed_in.id).await.unwrap());
        assert_eq!(
            accounts.validate(&signed_in.token).await,
            Err(AuthError::InvalidToken)
        );
        assert!(accounts.delete(signed_in.id).await.is_err());
    }

    #[tokio::test]
    async fn get_returns_profile() {
        let accounts = accounts();
        let user = accounts.get(UserId::new(1)).await.unwrap();
        assert_eq!(user.email, "yoga@studio.com");
        assert!(user.admin);

        let missing = accounts.get(UserId::new(9)).await.unwrap_err();
        assert_eq!(missing.code, ErrorCode::UserNotFound);
    }
}
