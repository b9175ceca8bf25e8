//! Yoga Booking - yoga studio session booking
//!
//! Signed-in users browse teacher-led booking sessions and join or leave
//! them; administrators create, edit and delete sessions. The crate holds the
//! domain model, the client-side booking and account workflows, and a REST
//! API with an in-memory store that those workflows can run against.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
