//! Participation toggle for the detail view.
//!
//! Toggles on one session are strictly serialized: while one is in flight,
//! further toggles on the same session are ignored. Once the call settles the
//! session is re-fetched so the next toggle starts from server state. If the
//! view was left or re-opened meanwhile, the result is dropped as `Stale`.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use tracing::{debug, info, warn};

use super::{BookingWorkflow, SessionDetail};
use crate::application::access::{require_login, FlowOutcome};
use crate::application::errors::WorkflowError;
use crate::domain::foundation::{SessionId, UserId};
use crate::domain::session::{participation_state, BookingSession, ParticipationState, SessionError};

/// How a toggle request settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The toggle went through; the refreshed detail to display.
    Applied(SessionDetail),
    /// Another toggle on this session was still in flight.
    Ignored,
    /// The server call happened but the view it belonged to is gone.
    Stale,
}

/// Marks a session as having a toggle in flight until dropped.
struct InFlight<'a> {
    sessions: &'a Mutex<HashSet<SessionId>>,
    session_id: SessionId,
}

impl<'a> InFlight<'a> {
    fn acquire(sessions: &'a Mutex<HashSet<SessionId>>, session_id: SessionId) -> Option<Self> {
        let inserted = sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(session_id);
        inserted.then_some(Self {
            sessions,
            session_id,
        })
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.session_id);
    }
}

impl BookingWorkflow {
    /// Adds `user_id` to the session if absent, removes it otherwise.
    ///
    /// # Errors
    ///
    /// - `Forbidden` when a non-admin targets someone else; nothing is called
    /// - whatever the repository or participation manager reports, unless the
    ///   view was left meanwhile, which settles as `Stale`
    pub async fn toggle_participation(
        &self,
        session_id: SessionId,
        user_id: UserId,
    ) -> Result<FlowOutcome<ToggleOutcome>, WorkflowError> {
        let identity = match self.enter(require_login(self.current_identity())) {
            Ok(identity) => identity,
            Err(route) => return Ok(FlowOutcome::Redirected(route)),
        };

        if !identity.may_act_for(user_id) {
            warn!(
                session_id = %session_id,
                user_id = %user_id,
                actor_id = %identity.id,
                "Participation toggle for another user rejected"
            );
            return Err(SessionError::forbidden().into());
        }

        let Some(_in_flight) = InFlight::acquire(&self.in_flight, session_id) else {
            debug!(session_id = %session_id, "Toggle already in flight, ignoring");
            return Ok(FlowOutcome::Completed(ToggleOutcome::Ignored));
        };
        let generation = self.views().attach(session_id);

        let result = self.apply_toggle(session_id, user_id).await;
        if !self.views().is_current(session_id, generation) {
            match &result {
                Ok(_) => debug!(
                    session_id = %session_id,
                    "View changed during toggle, dropping result"
                ),
                Err(err) => warn!(
                    session_id = %session_id,
                    error = %err,
                    "Toggle failed after its view changed, dropping error"
                ),
            }
            return Ok(FlowOutcome::Completed(ToggleOutcome::Stale));
        }

        let detail = self.build_detail(identity, result?).await;
        Ok(FlowOutcome::Completed(ToggleOutcome::Applied(detail)))
    }

    /// Flips membership from server state, then re-fetches the session.
    async fn apply_toggle(
        &self,
        session_id: SessionId,
        user_id: UserId,
    ) -> Result<BookingSession, SessionError> {
        let session = self.sessions.get(session_id).await?;
        match participation_state(&session, user_id) {
            ParticipationState::NotParticipating => {
                self.participation.participate(session_id, user_id).await?;
                info!(session_id = %session_id, user_id = %user_id, "User joined session");
            }
            ParticipationState::Participating => {
                self.participation.un_participate(session_id, user_id).await?;
                info!(session_id = %session_id, user_id = %user_id, "User left session");
            }
        }
        self.sessions.get(session_id).await
    }
}
