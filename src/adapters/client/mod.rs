//! REST client adapters.
//!
//! Implement the collaborator ports against the booking API over HTTP, so the
//! workflows can run against a remote server instead of the in-memory store.
//! All adapters share one `ApiClient`, which carries the bearer token handed
//! out at login.

mod api_client;
mod auth;
mod directories;
mod sessions;

pub use api_client::{ApiClient, ClientError};
pub use auth::HttpAuthProvider;
pub use directories::{HttpTeacherDirectory, HttpUserDirectory};
pub use sessions::HttpSessionRepository;
