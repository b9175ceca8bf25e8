//! HTTP adapter for user account endpoints.
//!
//! - `GET /api/user/:id` - Get a user's profile
//! - `DELETE /api/user/:id` - Delete one's own account

mod handlers;
mod routes;

pub use handlers::UserHandlers;
pub use routes::user_routes;
