//! HTTP routes for teacher endpoints.

use axum::{routing::get, Router};

use super::handlers::{get_teacher, list_teachers, TeacherHandlers};

pub fn teacher_routes(handlers: TeacherHandlers) -> Router {
    Router::new()
        .route("/", get(list_teachers))
        .route("/:id", get(get_teacher))
        .with_state(handlers)
}
