//! Teachers leading booking sessions.
//!
//! Teachers are read-only reference data: the booking domain only displays
//! them and stores their id on a session.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{TeacherId, Timestamp};

/// A teacher as listed by the Teacher collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: TeacherId,
    pub first_name: String,
    pub last_name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Teacher {
    pub fn new(id: TeacherId, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// "Margot DELAHAYE" style display name.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name.to_uppercase())
    }
}
