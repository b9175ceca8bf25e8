//! Booking session domain module.
//!
//! Handles the booking session lifecycle (create, update, delete) and the
//! participant set that users join and leave.

mod aggregate;
mod errors;
mod input;
mod participation;

pub use aggregate::BookingSession;
pub use errors::SessionError;
pub use input::{SessionForm, SessionInput, DATE_FORMAT, MAX_DESCRIPTION_LENGTH};
pub use participation::{participation_state, ParticipationState};
