//! Admin-only mutations: create, update, delete.

use tracing::{info, warn};

use super::{BookingWorkflow, SESSION_CREATED, SESSION_DELETED, SESSION_UPDATED};
use crate::application::access::{require_admin, FlowOutcome};
use crate::application::errors::WorkflowError;
use crate::domain::foundation::SessionId;
use crate::domain::session::{BookingSession, SessionError, SessionForm};
use crate::ports::Route;

impl BookingWorkflow {
    /// Submits the create form.
    ///
    /// An invalid form fails before the repository is called.
    pub async fn create_session(
        &self,
        form: &SessionForm,
    ) -> Result<FlowOutcome<BookingSession>, WorkflowError> {
        let identity = match self.enter(require_admin(self.current_identity())) {
            Ok(identity) => identity,
            Err(route) => return Ok(FlowOutcome::Redirected(route)),
        };

        let input = form.validate().map_err(SessionError::from)?;
        let session = self.sessions.create(&input).await.map_err(|err| {
            warn!(error = %err, "Session creation failed");
            err
        })?;

        info!(session_id = %session.id(), admin_id = %identity.id, "Session created");
        self.notifier.notify(SESSION_CREATED);
        self.go(Route::Sessions);
        Ok(FlowOutcome::Completed(session))
    }

    /// Submits the update form. Full replace of the mutable fields.
    pub async fn update_session(
        &self,
        id: SessionId,
        form: &SessionForm,
    ) -> Result<FlowOutcome<BookingSession>, WorkflowError> {
        let identity = match self.enter(require_admin(self.current_identity())) {
            Ok(identity) => identity,
            Err(route) => return Ok(FlowOutcome::Redirected(route)),
        };

        let input = form.validate().map_err(SessionError::from)?;
        let session = self.sessions.update(id, &input).await.map_err(|err| {
            warn!(session_id = %id, error = %err, "Session update failed");
            err
        })?;

        info!(session_id = %id, admin_id = %identity.id, "Session updated");
        self.notifier.notify(SESSION_UPDATED);
        self.go(Route::Sessions);
        Ok(FlowOutcome::Completed(session))
    }

    pub async fn delete_session(&self, id: SessionId) -> Result<FlowOutcome<()>, WorkflowError> {
        let identity = match self.enter(require_admin(self.current_identity())) {
            Ok(identity) => identity,
            Err(route) => return Ok(FlowOutcome::Redirected(route)),
        };

        self.sessions.delete(id).await.map_err(|err| {
            warn!(session_id = %id, error = %err, "Session deletion failed");
            err
        })?;

        info!(session_id = %id, admin_id = %identity.id, "Session deleted");
        self.notifier.notify(SESSION_DELETED);
        self.go(Route::Sessions);
        Ok(FlowOutcome::Completed(()))
    }
}
