//! Seed data for the in-memory store

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

#[derive(Debug, Clone, Deserialize)]
pub struct SeedConfig {
    /// Email of the administrator created at startup
    #[serde(default = "default_admin_email")]
    pub admin_email: String,

    /// Password of the administrator created at startup
    #[serde(default = "default_admin_password")]
    pub admin_password: SecretString,

    /// Whether to seed the default teachers
    #[serde(default = "default_teachers")]
    pub teachers: bool,
}

impl SeedConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.admin_email.contains('@') {
            return Err(ValidationError::InvalidSeedEmail);
        }
        if self.admin_password.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("seed.admin_password"));
        }
        Ok(())
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            admin_email: default_admin_email(),
            admin_password: default_admin_password(),
            teachers: default_teachers(),
        }
    }
}

fn default_admin_email() -> String {
    "yoga@studio.com".to_string()
}

fn default_admin_password() -> SecretString {
    SecretString::new("test!1234".to_string())
}

fn default_teachers() -> bool {
    true
}
