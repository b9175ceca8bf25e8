//! In-memory booking-session collection.
//!
//! Implements both `SessionRepository` and `ParticipationManager` over the
//! same map, the way a REST backend would over one table. Ids come from a
//! counter starting at 1 and sessions list in ascending id order.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{SessionId, UserId};
use crate::domain::session::{BookingSession, SessionError, SessionInput};
use crate::ports::{ParticipationManager, SessionRepository, UserDirectory};

/// In-memory session store. Clones share the same data.
#[derive(Clone)]
pub struct InMemorySessionRepository {
    sessions: Arc<RwLock<BTreeMap<SessionId, BookingSession>>>,
    next_id: Arc<AtomicI64>,
    users: Arc<dyn UserDirectory>,
}

impl InMemorySessionRepository {
    /// `users` is consulted to reject participation of unknown user ids.
    pub fn new(users: Arc<dyn UserDirectory>) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
            users,
        }
    }

    /// Number of stored sessions
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    async fn ensure_session(&self, id: SessionId) -> Result<(), SessionError> {
        if self.sessions.read().await.contains_key(&id) {
            Ok(())
        } else {
            Err(SessionError::not_found(id))
        }
    }

    async fn ensure_user(&self, id: UserId) -> Result<(), SessionError> {
        if self.users.exists(id).await? {
            Ok(())
        } else {
            Err(SessionError::user_not_found(id))
        }
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn list(&self) -> Result<Vec<BookingSession>, SessionError> {
        Ok(self.sessions.read().await.values().cloned().collect())
    }

    async fn get(&self, id: SessionId) -> Result<BookingSession, SessionError> {
        self.sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(SessionError::not_found(id))
    }

    async fn create(&self, input: &SessionInput) -> Result<BookingSession, SessionError> {
        let id = SessionId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        let session = BookingSession::new(id, input.clone());
        self.sessions.write().await.insert(id, session.clone());
        Ok(session)
    }

    async fn update(
        &self,
        id: SessionId,
        input: &SessionInput,
    ) -> Result<BookingSession, SessionError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id).ok_or(SessionError::not_found(id))?;
        session.apply(input.clone());
        Ok(session.clone())
    }

    async fn delete(&self, id: SessionId) -> Result<(), SessionError> {
        self.sessions
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(SessionError::not_found(id))
    }
}

#[async_trait]
impl ParticipationManager for InMemorySessionRepository {
    async fn participate(
        &self,
        session_id: SessionId,
        user_id: UserId,
    ) -> Result<(), SessionError> {
        self.ensure_session(session_id).await?;
        self.ensure_user(user_id).await?;

        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(&session_id)
            .ok_or(SessionError::not_found(session_id))?;
        session.add_participant(user_id)
    }

    async fn un_participate(
        &self,
        session_id: SessionId,
        user_id: UserId,
    ) -> Result<(), SessionError> {
        self.ensure_session(session_id).await?;
        // A participant whose account was deleted must still be removable.
        let is_member = self
            .sessions
            .read()
            .await
            .get(&session_id)
            .is_some_and(|s| s.is_participant(user_id));
        if !is_member {
            self.ensure_user(user_id).await?;
        }

        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(&session_id)
            .ok_or(SessionError::not_found(session_id))?;
        session.remove_participant(user_id)
    }
}
