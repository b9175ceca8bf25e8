//! HTTP adapter for booking session endpoints.
//!
//! - `GET /api/session` - List sessions
//! - `GET /api/session/:id` - Get one session
//! - `POST /api/session` - Create (admin)
//! - `PUT /api/session/:id` - Full replace (admin)
//! - `DELETE /api/session/:id` - Delete (admin)
//! - `POST /api/session/:id/participate/:userId` - Join (admin or self)
//! - `DELETE /api/session/:id/participate/:userId` - Leave (admin or self)

mod handlers;
mod routes;

pub use handlers::SessionHandlers;
pub use routes::session_routes;
