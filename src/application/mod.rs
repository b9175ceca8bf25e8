//! Application layer - workflows orchestrating domain operations over ports.
//!
//! - `IdentityStore` - the Session Store holding the signed-in identity
//! - `access` - role-based gate evaluated at flow entry
//! - `BookingWorkflow` - session list/detail/create/update/delete/participation
//! - `AccountWorkflow` - login, registration, logout, own account

pub mod access;
mod account;
pub mod booking;
mod errors;
mod identity_store;

pub use access::{require_admin, require_login, AccessDecision, FlowOutcome};
pub use account::{AccountWorkflow, ACCOUNT_DELETED};
pub use booking::{
    BookingWorkflow, SessionDetail, SessionFormView, ToggleOutcome, SESSION_CREATED,
    SESSION_DELETED, SESSION_UPDATED,
};
pub use errors::{WorkflowError, FAILURE_NOTICE};
pub use identity_store::IdentityStore;
