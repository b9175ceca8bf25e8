//! HTTP handlers for teacher endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{handle_domain_error, invalid_id};
use crate::adapters::http::middleware::RequireAuth;
use crate::domain::foundation::TeacherId;
use crate::ports::TeacherDirectory;

#[derive(Clone)]
pub struct TeacherHandlers {
    teachers: Arc<dyn TeacherDirectory>,
}

impl TeacherHandlers {
    pub fn new(teachers: Arc<dyn TeacherDirectory>) -> Self {
        Self { teachers }
    }
}

/// GET /api/teacher
pub async fn list_teachers(
    State(handlers): State<TeacherHandlers>,
    RequireAuth(_identity): RequireAuth,
) -> Response {
    match handlers.teachers.list().await {
        Ok(teachers) => (StatusCode::OK, Json(teachers)).into_response(),
        Err(e) => handle_domain_error(e),
    }
}

/// GET /api/teacher/:id
pub async fn get_teacher(
    State(handlers): State<TeacherHandlers>,
    RequireAuth(_identity): RequireAuth,
    Path(teacher_id): Path<String>,
) -> Response {
    let Ok(teacher_id) = teacher_id.parse::<TeacherId>() else {
        return invalid_id("teacher");
    };

    match handlers.teachers.get(teacher_id).await {
        Ok(teacher) => (StatusCode::OK, Json(teacher)).into_response(),
        Err(e) => handle_domain_error(e),
    }
}
