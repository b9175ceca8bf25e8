//! HTTP handlers for user account endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{handle_domain_error, invalid_id, ErrorResponse};
use crate::adapters::http::middleware::RequireAuth;
use crate::domain::foundation::UserId;
use crate::ports::UserDirectory;

#[derive(Clone)]
pub struct UserHandlers {
    users: Arc<dyn UserDirectory>,
}

impl UserHandlers {
    pub fn new(users: Arc<dyn UserDirectory>) -> Self {
        Self { users }
    }
}

/// GET /api/user/:id
pub async fn get_user(
    State(handlers): State<UserHandlers>,
    RequireAuth(_identity): RequireAuth,
    Path(user_id): Path<String>,
) -> Response {
    let Ok(user_id) = user_id.parse::<UserId>() else {
        return invalid_id("user");
    };

    match handlers.users.get(user_id).await {
        Ok(user) => (StatusCode::OK, Json(user)).into_response(),
        Err(e) => handle_domain_error(e),
    }
}

/// DELETE /api/user/:id - Only the account owner may delete it
pub async fn delete_user(
    State(handlers): State<UserHandlers>,
    RequireAuth(identity): RequireAuth,
    Path(user_id): Path<String>,
) -> Response {
    let Ok(user_id) = user_id.parse::<UserId>() else {
        return invalid_id("user");
    };
    if identity.id != user_id {
        tracing::warn!(actor = %identity.id, target = %user_id, "account deletion refused");
        return ErrorResponse::unauthorized("You may only delete your own account")
            .into_response_with(StatusCode::UNAUTHORIZED);
    }

    match handlers.users.delete(user_id).await {
        Ok(()) => {
            tracing::info!(user_id = %user_id, "account deleted");
            StatusCode::OK.into_response()
        }
        Err(e) => handle_domain_error(e),
    }
}
