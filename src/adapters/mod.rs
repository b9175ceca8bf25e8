//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the workflows to concrete collaborators:
//! - `auth` - in-memory accounts (login, tokens, user directory)
//! - `client` - REST client implementing every collaborator port over HTTP
//! - `http` - axum REST API serving the booking collection
//! - `memory` - in-memory session store and teacher directory
//! - `navigation` / `notification` - recording and tracing UI collaborators

pub mod auth;
pub mod client;
pub mod http;
pub mod memory;
pub mod navigation;
pub mod notification;

pub use auth::InMemoryAccounts;
pub use client::{
    ApiClient, ClientError, HttpAuthProvider, HttpSessionRepository, HttpTeacherDirectory,
    HttpUserDirectory,
};
pub use http::{api_router, ApiDependencies};
pub use memory::{InMemorySessionRepository, InMemoryTeacherDirectory};
pub use navigation::InMemoryNavigator;
pub use notification::{InMemoryNotifier, TracingNotifier};
