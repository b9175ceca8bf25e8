//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, identity, errors)
//! - `session` - Booking session aggregate, payloads and participation state
//! - `teacher` - Teachers, display only
//! - `user` - Registered user accounts

pub mod foundation;
pub mod session;
pub mod teacher;
pub mod user;
