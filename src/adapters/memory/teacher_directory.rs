//! In-memory teacher directory.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, TeacherId};
use crate::domain::teacher::Teacher;
use crate::ports::TeacherDirectory;

#[derive(Debug, Clone, Default)]
pub struct InMemoryTeacherDirectory {
    teachers: Arc<BTreeMap<TeacherId, Teacher>>,
}

impl InMemoryTeacherDirectory {
    pub fn new(teachers: impl IntoIterator<Item = Teacher>) -> Self {
        let teachers = teachers.into_iter().map(|t| (t.id, t)).collect();
        Self {
            teachers: Arc::new(teachers),
        }
    }

    /// The studio's two default teachers.
    pub fn seeded() -> Self {
        Self::new([
            Teacher::new(TeacherId::new(1), "Margot", "Delahaye"),
            Teacher::new(TeacherId::new(2), "Hélène", "Thiercelin"),
        ])
    }
}

#[async_trait]
impl TeacherDirectory for InMemoryTeacherDirectory {
    async fn list(&self) -> Result<Vec<Teacher>, DomainError> {
        Ok(self.teachers.values().cloned().collect())
    }

    async fn get(&self, id: TeacherId) -> Result<Teacher, DomainError> {
        self.teachers.get(&id).cloned().ok_or_else(|| {
            DomainError::new(ErrorCode::TeacherNotFound, format!("Teacher not found: {}", id))
        })
    }
}
