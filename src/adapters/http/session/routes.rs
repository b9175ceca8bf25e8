//! HTTP routes for booking session endpoints.

use axum::{routing::get, routing::post, Router};

use super::handlers::{
    create_session, delete_session, get_session, list_sessions, participate, un_participate,
    update_session, SessionHandlers,
};

/// Creates the session router with all endpoints.
pub fn session_routes(handlers: SessionHandlers) -> Router {
    Router::new()
        .route("/", get(list_sessions).post(create_session))
        .route(
            "/:id",
            get(get_session).put(update_session).delete(delete_session),
        )
        .route(
            "/:id/participate/:user_id",
            post(participate).delete(un_participate),
        )
        .with_state(handlers)
}
