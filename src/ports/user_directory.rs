//! User directory port.
//!
//! Looks up and removes registered accounts. The participation manager uses
//! `exists` to reject unknown user ids.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::User;

#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// # Errors
    ///
    /// - `UserNotFound` if absent
    async fn get(&self, id: UserId) -> Result<User, DomainError>;

    async fn exists(&self, id: UserId) -> Result<bool, DomainError>;

    /// # Errors
    ///
    /// - `UserNotFound` if absent
    async fn delete(&self, id: UserId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_directory_is_object_safe_and_send_sync() {
        fn _accepts_dyn(_directory: &dyn UserDirectory) {}
        fn _assert_send_sync<T: Send + Sync + ?Sized>() {}
        _assert_send_sync::<std::sync::Arc<dyn UserDirectory>>();
    }
}
