//! Create/update payloads for booking sessions.
//!
//! `SessionForm` holds whatever the create/update screen currently contains;
//! every field may be missing. `SessionInput` is the validated payload that
//! the Session Repository accepts. It never carries an id, participants or
//! timestamps: those belong to the repository.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{TeacherId, ValidationError};

/// Maximum length for a session description.
pub const MAX_DESCRIPTION_LENGTH: usize = 2000;

/// Date format used on the wire and in forms.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw create/update form values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionForm {
    pub name: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub teacher_id: Option<TeacherId>,
}

impl SessionForm {
    /// An empty form, as shown when opening the create screen.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_teacher(mut self, teacher_id: TeacherId) -> Self {
        self.teacher_id = Some(teacher_id);
        self
    }

    /// Validates the form, returning the first offending field.
    pub fn validate(&self) -> Result<SessionInput, ValidationError> {
        let name = required_text(&self.name, "name")?;
        let date = required_text(&self.date, "date")?;
        let date = NaiveDate::parse_from_str(date, DATE_FORMAT)
            .map_err(|_| ValidationError::invalid_format("date", "expected YYYY-MM-DD"))?;
        let teacher_id = self
            .teacher_id
            .ok_or_else(|| ValidationError::empty_field("teacher_id"))?;
        let description = required_text(&self.description, "description")?;

        SessionInput::new(name, description, date, teacher_id)
    }
}

impl From<&SessionInput> for SessionForm {
    fn from(input: &SessionInput) -> Self {
        Self {
            name: Some(input.name.clone()),
            description: Some(input.description.clone()),
            date: Some(input.date.format(DATE_FORMAT).to_string()),
            teacher_id: Some(input.teacher_id),
        }
    }
}

fn required_text<'a>(value: &'a Option<String>, field: &str) -> Result<&'a str, ValidationError> {
    match value.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(ValidationError::empty_field(field)),
    }
}

/// Validated create/update payload.
///
/// # Invariants
///
/// - `name` is non-empty after trimming
/// - `description` is non-empty and at most `MAX_DESCRIPTION_LENGTH` characters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SessionForm")]
pub struct SessionInput {
    name: String,
    description: String,
    date: NaiveDate,
    teacher_id: TeacherId,
}

impl SessionInput {
    /// Builds a payload, checking every field.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDate,
        teacher_id: TeacherId,
    ) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }

        let description = description.into();
        if description.trim().is_empty() {
            return Err(ValidationError::empty_field("description"));
        }
        let length = description.chars().count();
        if length > MAX_DESCRIPTION_LENGTH {
            return Err(ValidationError::too_long(
                "description",
                MAX_DESCRIPTION_LENGTH,
                length,
            ));
        }

        Ok(Self {
            name,
            description,
            date,
            teacher_id,
        })
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
}

impl TryFrom<SessionForm> for SessionInput {
    type Error = ValidationError;

    fn try_from(form: SessionForm) -> Result<Self, Self::Error> {
        form.validate()
    }
}
