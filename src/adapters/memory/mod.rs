//! In-memory backing store for booking sessions and teachers.
//!
//! Used by the binary and by tests; nothing survives a restart.

mod session_store;
mod teacher_directory;

pub use session_store::InMemorySessionRepository;
pub use teacher_directory::InMemoryTeacherDirectory;
