//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Booking Ports
//!
//! - `SessionRepository` - CRUD against the booking-session collection
//! - `ParticipationManager` - Add/remove users from a session
//! - `TeacherDirectory` - Teacher lookup, display only
//!
//! ## Account Ports
//!
//! - `AuthProvider` - Login and registration
//! - `TokenValidator` - Bearer token to `Identity`
//! - `UserDirectory` - Account lookup and removal
//!
//! ## Presentation Ports
//!
//! - `Notifier` - Transient confirmation notices
//! - `Navigator` - View changes

mod auth_provider;
mod navigator;
mod notifier;
mod participation_manager;
mod session_repository;
mod teacher_directory;
mod token_validator;
mod user_directory;

pub use auth_provider::AuthProvider;
pub use navigator::{Navigator, Route};
pub use notifier::Notifier;
pub use participation_manager::ParticipationManager;
pub use session_repository::SessionRepository;
pub use teacher_directory::TeacherDirectory;
pub use token_validator::TokenValidator;
pub use user_directory::UserDirectory;
