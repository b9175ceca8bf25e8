//! HTTP adapter for authentication endpoints.
//!
//! - `POST /api/auth/login` - Exchange credentials for a bearer token
//! - `POST /api/auth/register` - Create an account

mod dto;
mod handlers;
mod routes;

pub use dto::MessageResponse;
pub use handlers::AuthHandlers;
pub use routes::auth_routes;
