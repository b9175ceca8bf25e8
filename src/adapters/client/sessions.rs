//! Session Repository and Participation Manager over the REST API.

use async_trait::async_trait;
use reqwest::Method;

use crate::domain::foundation::{SessionId, UserId};
use crate::domain::session::{BookingSession, SessionError, SessionInput};
use crate::ports::{ParticipationManager, SessionRepository};

use super::ApiClient;

#[derive(Clone)]
pub struct HttpSessionRepository {
    client: ApiClient,
}

impl HttpSessionRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SessionRepository for HttpSessionRepository {
    async fn list(&self) -> Result<Vec<BookingSession>, SessionError> {
        self.client
            .get_json("session")
            .await
            .map_err(|e| e.into_session_error(None, None))
    }

    async fn get(&self, id: SessionId) -> Result<BookingSession, SessionError> {
        self.client
            .get_json(&format!("session/{}", id))
            .await
            .map_err(|e| e.into_session_error(Some(id), None))
    }

    async fn create(&self, input: &SessionInput) -> Result<BookingSession, SessionError> {
        self.client
            .send_json(Method::POST, "session", input)
            .await
            .map_err(|e| e.into_session_error(None, None))
    }

    async fn update(
        &self,
        id: SessionId,
        input: &SessionInput,
    ) -> Result<BookingSession, SessionError> {
        self.client
            .send_json(Method::PUT, &format!("session/{}", id), input)
            .await
            .map_err(|e| e.into_session_error(Some(id), None))
    }

    async fn delete(&self, id: SessionId) -> Result<(), SessionError> {
        self.client
            .send_empty::<()>(Method::DELETE, &format!("session/{}", id), None)
            .await
            .map_err(|e| e.into_session_error(Some(id), None))
    }
}

#[async_trait]
impl ParticipationManager for HttpSessionRepository {
    async fn participate(&self, session_id: SessionId, user_id: UserId) -> Result<(), SessionError> {
        self.client
            .send_empty::<()>(Method::POST, &participation_path(session_id, user_id), None)
            .await
            .map_err(|e| e.into_session_error(Some(session_id), Some(user_id)))
    }

    async fn un_participate(
        &self,
        session_id: SessionId,
        user_id: UserId,
    ) -> Result<(), SessionError> {
        self.client
            .send_empty::<()>(Method::DELETE, &participation_path(session_id, user_id), None)
            .await
            .map_err(|e| e.into_session_error(Some(session_id), Some(user_id)))
    }
}

fn participation_path(session_id: SessionId, user_id: UserId) -> String {
    format!("session/{}/participate/{}", session_id, user_id)
}
