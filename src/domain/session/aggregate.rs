//! Booking session aggregate entity.
//!
//! A booking session is a teacher-led event that registered users attend.
//! It references its teacher by id but does NOT own it.
//!
//! # Ownership
//!
//! The repository assigns `id`, `created_at` and `updated_at`; clients only
//! ever send a `SessionInput`.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use super::{SessionError, SessionInput};
use crate::domain::foundation::{SessionId, TeacherId, Timestamp, UserId};

/// Booking session aggregate.
///
/// # Invariants
///
/// - `id` and `created_at` never change after creation
/// - `users` contains no duplicates
/// - `updated_at` moves forward on every mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingSession {
    id: SessionId,
    name: String,
    description: String,
    date: NaiveDate,
    teacher_id: TeacherId,
    #[serde(deserialize_with = "deserialize_unique_users")]
    users: Vec<UserId>,
    #[serde(rename = "createdAt")]
    created_at: Timestamp,
    #[serde(rename = "updatedAt")]
    updated_at: Timestamp,
}

impl BookingSession {
    /// Create a new booking session with no participants.
    pub fn new(id: SessionId, input: SessionInput) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            name: input.name().to_string(),
            description: input.description().to_string(),
            date: input.date(),
            teacher_id: input.teacher_id(),
            users: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstitute a session from persistence or the wire.
    ///
    /// Duplicate participant ids are collapsed, keeping first occurrence.
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: SessionId,
        name: String,
        description: String,
        date: NaiveDate,
        teacher_id: TeacherId,
        users: Vec<UserId>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            name,
            description,
            date,
            teacher_id,
            users: dedup_preserving_order(users),
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn teacher_id(&self) -> TeacherId {
        self.teacher_id
    }

    /// Participant ids in the order they joined.
    pub fn users(&self) -> &[UserId] {
        &self.users
    }

    pub fn participant_count(&self) -> usize {
        self.users.len()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Whether `user_id` is in the participant set.
    pub fn is_participant(&self, user_id: UserId) -> bool {
        self.users.contains(&user_id)
    }

    /// The mutable fields as a payload, e.g. to prefill the update form.
    pub fn to_input(&self) -> Result<SessionInput, SessionError> {
        SessionInput::new(
            self.name.clone(),
            self.description.clone(),
            self.date,
            self.teacher_id,
        )
        .map_err(SessionError::from)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Full replace of the mutable fields. Participants are untouched.
    pub fn apply(&mut self, input: SessionInput) {
        self.name = input.name().to_string();
        self.description = input.description().to_string();
        self.date = input.date();
        self.teacher_id = input.teacher_id();
        self.touch();
    }

    /// Add a participant.
    ///
    /// # Errors
    ///
    /// - `AlreadyParticipating` if the user is already in the set
    pub fn add_participant(&mut self, user_id: UserId) -> Result<(), SessionError> {
        if self.is_participant(user_id) {
            return Err(SessionError::already_participating(self.id, user_id));
        }
        self.users.push(user_id);
        self.touch();
        Ok(())
    }

    /// Remove a participant, leaving every other id in place.
    ///
    /// # Errors
    ///
    /// - `NotParticipating` if the user is not in the set
    pub fn remove_participant(&mut self, user_id: UserId) -> Result<(), SessionError> {
        let Some(position) = self.users.iter().position(|u| *u == user_id) else {
            return Err(SessionError::not_participating(self.id, user_id));
        };
        self.users.remove(position);
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = self.updated_at.next_after();
    }
}

fn dedup_preserving_order(users: Vec<UserId>) -> Vec<UserId> {
    let mut unique = Vec::with_capacity(users.len());
    for user in users {
        if !unique.contains(&user) {
            unique.push(user);
        }
    }
    unique
}

fn deserialize_unique_users<'de, D>(deserializer: D) -> Result<Vec<UserId>, D::Error>
where
    D: Deserializer<'de>,
{
    let users = Vec::<UserId>::deserialize(deserializer)?;
    Ok(dedup_preserving_order(users))
}
