//! HTTP routes for authentication endpoints.

use axum::{routing::post, Router};

use super::handlers::{login, register, AuthHandlers};

pub fn auth_routes(handlers: AuthHandlers) -> Router {
    Router::new()
        .route("/login", post(login))
        .route("/register", post(register))
        .with_state(handlers)
}
