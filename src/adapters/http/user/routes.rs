//! HTTP routes for user account endpoints.

use axum::{routing::get, Router};

use super::handlers::{delete_user, get_user, UserHandlers};

pub fn user_routes(handlers: UserHandlers) -> Router {
    Router::new()
        .route("/:id", get(get_user).delete(delete_user))
        .with_state(handlers)
}
