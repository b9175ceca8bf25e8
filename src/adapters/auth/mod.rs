//! Authentication adapters.
//!
//! - `InMemoryAccounts` - account store implementing `AuthProvider`,
//!   `TokenValidator` and `UserDirectory`

mod accounts;

pub use accounts::InMemoryAccounts;
