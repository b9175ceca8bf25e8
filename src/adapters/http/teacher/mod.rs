//! HTTP adapter for teacher endpoints.
//!
//! - `GET /api/teacher` - List teachers
//! - `GET /api/teacher/:id` - Get one teacher

mod handlers;
mod routes;

pub use handlers::TeacherHandlers;
pub use routes::teacher_routes;
