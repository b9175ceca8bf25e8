//! Session repository port.
//!
//! CRUD against the remote booking-session collection. Pure data access: it
//! owns no business rules, authorization included.
//!
//! # Errors
//!
//! Every operation fails with `SessionError::Network` on transport failure
//! and `SessionError::NotFound` when addressing a nonexistent id.

use async_trait::async_trait;

use crate::domain::foundation::SessionId;
use crate::domain::session::{BookingSession, SessionError, SessionInput};

/// Repository port for booking sessions.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// All sessions, in the order the backing store returns them.
    async fn list(&self) -> Result<Vec<BookingSession>, SessionError>;

    /// One session.
    ///
    /// # Errors
    ///
    /// - `NotFound` if absent
    async fn get(&self, id: SessionId) -> Result<BookingSession, SessionError>;

    /// Create a session. The repository assigns id and timestamps.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if a required field is missing
    async fn create(&self, input: &SessionInput) -> Result<BookingSession, SessionError>;

    /// Full replace of the mutable fields.
    ///
    /// # Errors
    ///
    /// - `NotFound` if absent
    async fn update(
        &self,
        id: SessionId,
        input: &SessionInput,
    ) -> Result<BookingSession, SessionError>;

    /// Hard removal. Not idempotent: a missing id fails `NotFound`.
    async fn delete(&self, id: SessionId) -> Result<(), SessionError>;
}
