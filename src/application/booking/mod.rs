//! Booking Workflow - list, detail, create, update, delete and participation.
//!
//! Combines the Session Store (who is asking) with the Session Repository
//! (what exists) and the Participation Manager (who attends).
//!
//! # Rules
//!
//! - list and detail need a signed-in identity, otherwise redirect to login
//! - create/update/delete need an admin; the gate runs when the form opens
//!   and again at submit, and a redirect never reaches the repository
//! - a successful mutation shows a confirmation then goes to the list
//! - a failed call returns the error: no notice, no navigation, no retry

mod mutations;
mod participation;
mod views;

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use tracing::warn;

use super::access::AccessDecision;
use super::identity_store::IdentityStore;
use crate::domain::foundation::{Identity, SessionId};
use crate::domain::session::{participation_state, BookingSession, ParticipationState, SessionForm};
use crate::domain::teacher::Teacher;
use crate::ports::{
    Navigator, Notifier, ParticipationManager, Route, SessionRepository, TeacherDirectory,
};

pub use participation::ToggleOutcome;

pub const SESSION_CREATED: &str = "Session created !";
pub const SESSION_UPDATED: &str = "Session updated !";
pub const SESSION_DELETED: &str = "Session deleted !";

/// Everything the detail view shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionDetail {
    pub session: BookingSession,
    /// `None` when the teacher lookup failed; the teacher is display only.
    pub teacher: Option<Teacher>,
    pub participation: ParticipationState,
    /// Admins see the delete affordance.
    pub is_admin: bool,
}

impl SessionDetail {
    pub fn affordance_label(&self) -> &'static str {
        self.participation.affordance_label()
    }
}

/// Create/update form contents plus the teacher choices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionFormView {
    pub form: SessionForm,
    pub teachers: Vec<Teacher>,
    /// `Some` when editing an existing session.
    pub editing: Option<SessionId>,
}

/// The detail view currently on screen, if any.
///
/// Every (re)open gets a fresh generation so that results of calls started
/// under an older view can be told apart.
#[derive(Debug, Default)]
struct ViewTracker {
    active: Option<(SessionId, u64)>,
    next_generation: u64,
}

impl ViewTracker {
    fn open(&mut self, session_id: SessionId) -> u64 {
        self.next_generation += 1;
        self.active = Some((session_id, self.next_generation));
        self.next_generation
    }

    /// Generation of the view for `session_id`, opening one if needed.
    fn attach(&mut self, session_id: SessionId) -> u64 {
        match self.active {
            Some((active, generation)) if active == session_id => generation,
            _ => self.open(session_id),
        }
    }

    fn is_current(&self, session_id: SessionId, generation: u64) -> bool {
        self.active == Some((session_id, generation))
    }

    fn close(&mut self) {
        self.active = None;
    }
}

pub struct BookingWorkflow {
    identity: IdentityStore,
    sessions: Arc<dyn SessionRepository>,
    participation: Arc<dyn ParticipationManager>,
    teachers: Arc<dyn TeacherDirectory>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    views: Mutex<ViewTracker>,
    in_flight: Mutex<HashSet<SessionId>>,
}

impl BookingWorkflow {
    pub fn new(
        identity: IdentityStore,
        sessions: Arc<dyn SessionRepository>,
        participation: Arc<dyn ParticipationManager>,
        teachers: Arc<dyn TeacherDirectory>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            identity,
            sessions,
            participation,
            teachers,
            notifier,
            navigator,
            views: Mutex::new(ViewTracker::default()),
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    /// Leave the detail view. Toggles still in flight settle as `Stale`.
    pub fn close_detail(&self) {
        self.views().close();
    }

    fn current_identity(&self) -> Option<Identity> {
        self.identity.get_identity()
    }

    /// Applies an access decision, navigating away on redirect.
    fn enter(&self, decision: AccessDecision) -> Result<Identity, Route> {
        match decision {
            AccessDecision::Allowed(identity) => Ok(identity),
            AccessDecision::Redirect(route) => {
                warn!(route = %route, "Access denied, redirecting");
                self.go(route);
                Err(route)
            }
        }
    }

    fn go(&self, route: Route) {
        self.views().close();
        self.navigator.navigate(route);
    }

    fn views(&self) -> MutexGuard<'_, ViewTracker> {
        self.views.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn build_detail(&self, viewer: Identity, session: BookingSession) -> SessionDetail {
        let teacher = match self.teachers.get(session.teacher_id()).await {
            Ok(teacher) => Some(teacher),
            Err(err) => {
                warn!(
                    session_id = %session.id(),
                    teacher_id = %session.teacher_id(),
                    error = %err,
                    "Teacher lookup failed, showing session without teacher"
                );
                None
            }
        };
        SessionDetail {
            participation: participation_state(&session, viewer.id),
            session,
            teacher,
            is_admin: viewer.admin,
        }
    }
}
