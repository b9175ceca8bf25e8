//! HTTP handlers for authentication endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{handle_auth_error, handle_validation_error};
use crate::domain::foundation::{Credentials, RegisterRequest};
use crate::ports::AuthProvider;

use super::dto::MessageResponse;

#[derive(Clone)]
pub struct AuthHandlers {
    auth: Arc<dyn AuthProvider>,
}

impl AuthHandlers {
    pub fn new(auth: Arc<dyn AuthProvider>) -> Self {
        Self { auth }
    }
}

/// POST /api/auth/login
pub async fn login(
    State(handlers): State<AuthHandlers>,
    Json(credentials): Json<Credentials>,
) -> Response {
    if let Err(e) = credentials.validate() {
        return handle_validation_error(e);
    }

    match handlers.auth.login(&credentials).await {
        Ok(signed_in) => {
            tracing::info!(user_id = %signed_in.id, "signed in");
            (StatusCode::OK, Json(signed_in)).into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "sign-in rejected");
            handle_auth_error(e)
        }
    }
}

/// POST /api/auth/register
pub async fn register(
    State(handlers): State<AuthHandlers>,
    Json(request): Json<RegisterRequest>,
) -> Response {
    if let Err(e) = request.validate() {
        return handle_validation_error(e);
    }

    match handlers.auth.register(&request).await {
        Ok(()) => {
            tracing::info!("account registered");
            (
                StatusCode::OK,
                Json(MessageResponse::new("User registered successfully!")),
            )
                .into_response()
        }
        Err(e) => handle_auth_error(e),
    }
}
