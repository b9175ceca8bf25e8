//! HTTP adapters - REST API implementations.
//!
//! Each resource has its own module with handlers and routes; `router`
//! mounts them under `/api` behind the bearer-token middleware.

pub mod auth;
pub mod error;
pub mod middleware;
mod router;
pub mod session;
pub mod teacher;
pub mod user;

pub use error::ErrorResponse;
pub use router::{api_router, ApiDependencies};
