//! Read flows: list, detail, and opening the create/update forms.

use tracing::debug;

use super::{BookingWorkflow, SessionDetail, SessionFormView};
use crate::application::access::{require_admin, require_login, FlowOutcome};
use crate::application::errors::WorkflowError;
use crate::domain::foundation::SessionId;
use crate::domain::session::{BookingSession, SessionForm};

impl BookingWorkflow {
    /// All sessions, in backing-store order.
    pub async fn list_sessions(&self) -> Result<FlowOutcome<Vec<BookingSession>>, WorkflowError> {
        if let Err(route) = self.enter(require_login(self.current_identity())) {
            return Ok(FlowOutcome::Redirected(route));
        }

        let sessions = self.sessions.list().await?;
        debug!(count = sessions.len(), "Listed sessions");
        Ok(FlowOutcome::Completed(sessions))
    }

    /// Opens the detail view of one session.
    ///
    /// Opening (or re-opening) the view makes results of toggles started
    /// under a previous view stale.
    pub async fn get_session_detail(
        &self,
        id: SessionId,
    ) -> Result<FlowOutcome<SessionDetail>, WorkflowError> {
        let viewer = match self.enter(require_login(self.current_identity())) {
            Ok(identity) => identity,
            Err(route) => return Ok(FlowOutcome::Redirected(route)),
        };

        self.views().open(id);
        let session = self.sessions.get(id).await?;
        let detail = self.build_detail(viewer, session).await;
        debug!(session_id = %id, participation = ?detail.participation, "Loaded session detail");
        Ok(FlowOutcome::Completed(detail))
    }

    /// Empty create form plus the teacher list. Admins only.
    pub async fn open_create_form(&self) -> Result<FlowOutcome<SessionFormView>, WorkflowError> {
        if let Err(route) = self.enter(require_admin(self.current_identity())) {
            return Ok(FlowOutcome::Redirected(route));
        }

        let teachers = self.teachers.list().await?;
        Ok(FlowOutcome::Completed(SessionFormView {
            form: SessionForm::empty(),
            teachers,
            editing: None,
        }))
    }

    /// Update form prefilled from the current session. Admins only.
    pub async fn open_update_form(
        &self,
        id: SessionId,
    ) -> Result<FlowOutcome<SessionFormView>, WorkflowError> {
        if let Err(route) = self.enter(require_admin(self.current_identity())) {
            return Ok(FlowOutcome::Redirected(route));
        }

        let session = self.sessions.get(id).await?;
        let input = session.to_input()?;
        let teachers = self.teachers.list().await?;
        Ok(FlowOutcome::Completed(SessionFormView {
            form: SessionForm::from(&input),
            teachers,
            editing: Some(id),
        }))
    }
}
