//! Participation manager port.
//!
//! A set-mutation primitive over a session's participants. Uniqueness is
//! enforced here; deciding *who* may toggle whom is the caller's job.

use async_trait::async_trait;

use crate::domain::foundation::{SessionId, UserId};
use crate::domain::session::SessionError;

#[async_trait]
pub trait ParticipationManager: Send + Sync {
    /// Add `user_id` to the session and bump `updatedAt`.
    ///
    /// # Errors
    ///
    /// - `AlreadyParticipating` if the user is already present
    /// - `NotFound` / `UserNotFound` if the session or user does not exist
    async fn participate(&self, session_id: SessionId, user_id: UserId)
        -> Result<(), SessionError>;

    /// Remove `user_id` from the session.
    ///
    /// # Errors
    ///
    /// - `NotParticipating` if the user is absent
    /// - `NotFound` / `UserNotFound` if the session or user does not exist
    async fn un_participate(
        &self,
        session_id: SessionId,
        user_id: UserId,
    ) -> Result<(), SessionError>;
}
