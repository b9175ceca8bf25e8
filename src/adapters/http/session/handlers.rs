//! HTTP handlers for booking session endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{
    admin_required, handle_session_error, handle_validation_error, invalid_id, ErrorResponse,
};
use crate::adapters::http::middleware::RequireAuth;
use crate::domain::foundation::{Identity, SessionId, UserId};
use crate::domain::session::SessionForm;
use crate::ports::{ParticipationManager, SessionRepository};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct SessionHandlers {
    sessions: Arc<dyn SessionRepository>,
    participation: Arc<dyn ParticipationManager>,
}

impl SessionHandlers {
    pub fn new(
        sessions: Arc<dyn SessionRepository>,
        participation: Arc<dyn ParticipationManager>,
    ) -> Self {
        Self {
            sessions,
            participation,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/session - List every session
pub async fn list_sessions(
    State(handlers): State<SessionHandlers>,
    RequireAuth(_identity): RequireAuth,
) -> Response {
    match handlers.sessions.list().await {
        Ok(sessions) => (StatusCode::OK, Json(sessions)).into_response(),
        Err(e) => handle_session_error(e),
    }
}

/// GET /api/session/:id - Get session details
pub async fn get_session(
    State(handlers): State<SessionHandlers>,
    RequireAuth(_identity): RequireAuth,
    Path(session_id): Path<String>,
) -> Response {
    let Ok(session_id) = session_id.parse::<SessionId>() else {
        return invalid_id("session");
    };

    match handlers.sessions.get(session_id).await {
        Ok(session) => (StatusCode::OK, Json(session)).into_response(),
        Err(e) => handle_session_error(e),
    }
}

/// POST /api/session - Create a session
pub async fn create_session(
    State(handlers): State<SessionHandlers>,
    RequireAuth(identity): RequireAuth,
    Json(form): Json<SessionForm>,
) -> Response {
    if !identity.admin {
        return admin_required();
    }
    let input = match form.validate() {
        Ok(input) => input,
        Err(e) => return handle_validation_error(e),
    };

    match handlers.sessions.create(&input).await {
        Ok(session) => {
            tracing::info!(session_id = %session.id(), "session created");
            (StatusCode::OK, Json(session)).into_response()
        }
        Err(e) => handle_session_error(e),
    }
}

/// PUT /api/session/:id - Replace a session's editable fields
pub async fn update_session(
    State(handlers): State<SessionHandlers>,
    RequireAuth(identity): RequireAuth,
    Path(session_id): Path<String>,
    Json(form): Json<SessionForm>,
) -> Response {
    let Ok(session_id) = session_id.parse::<SessionId>() else {
        return invalid_id("session");
    };
    if !identity.admin {
        return admin_required();
    }
    let input = match form.validate() {
        Ok(input) => input,
        Err(e) => return handle_validation_error(e),
    };

    match handlers.sessions.update(session_id, &input).await {
        Ok(session) => {
            tracing::info!(session_id = %session_id, "session updated");
            (StatusCode::OK, Json(session)).into_response()
        }
        Err(e) => handle_session_error(e),
    }
}

/// DELETE /api/session/:id - Delete a session
pub async fn delete_session(
    State(handlers): State<SessionHandlers>,
    RequireAuth(identity): RequireAuth,
    Path(session_id): Path<String>,
) -> Response {
    let Ok(session_id) = session_id.parse::<SessionId>() else {
        return invalid_id("session");
    };
    if !identity.admin {
        return admin_required();
    }

    match handlers.sessions.delete(session_id).await {
        Ok(()) => {
            tracing::info!(session_id = %session_id, "session deleted");
            StatusCode::OK.into_response()
        }
        Err(e) => handle_session_error(e),
    }
}

/// POST /api/session/:id/participate/:userId - Add a participant
pub async fn participate(
    State(handlers): State<SessionHandlers>,
    RequireAuth(identity): RequireAuth,
    Path((session_id, user_id)): Path<(String, String)>,
) -> Response {
    let (session_id, user_id) = match parse_participation_path(&session_id, &user_id) {
        Ok(ids) => ids,
        Err(response) => return response,
    };
    if let Err(response) = ensure_may_act_for(identity, user_id) {
        return response;
    }

    match handlers.participation.participate(session_id, user_id).await {
        Ok(()) => {
            tracing::info!(session_id = %session_id, user_id = %user_id, "participant added");
            StatusCode::OK.into_response()
        }
        Err(e) => handle_session_error(e),
    }
}

/// DELETE /api/session/:id/participate/:userId - Remove a participant
pub async fn un_participate(
    State(handlers): State<SessionHandlers>,
    RequireAuth(identity): RequireAuth,
    Path((session_id, user_id)): Path<(String, String)>,
) -> Response {
    let (session_id, user_id) = match parse_participation_path(&session_id, &user_id) {
        Ok(ids) => ids,
        Err(response) => return response,
    };
    if let Err(response) = ensure_may_act_for(identity, user_id) {
        return response;
    }

    match handlers
        .participation
        .un_participate(session_id, user_id)
        .await
    {
        Ok(()) => {
            tracing::info!(session_id = %session_id, user_id = %user_id, "participant removed");
            StatusCode::OK.into_response()
        }
        Err(e) => handle_session_error(e),
    }
}

fn parse_participation_path(
    session_id: &str,
    user_id: &str,
) -> Result<(SessionId, UserId), Response> {
    let session_id = session_id
        .parse::<SessionId>()
        .map_err(|_| invalid_id("session"))?;
    let user_id = user_id.parse::<UserId>().map_err(|_| invalid_id("user"))?;
    Ok((session_id, user_id))
}

fn ensure_may_act_for(identity: Identity, user_id: UserId) -> Result<(), Response> {
    if identity.may_act_for(user_id) {
        return Ok(());
    }
    tracing::warn!(
        actor = %identity.id,
        target = %user_id,
        "participation change for another user refused"
    );
    Err(
        ErrorResponse::forbidden("Only administrators may change another user's participation")
            .into_response_with(StatusCode::FORBIDDEN),
    )
}
