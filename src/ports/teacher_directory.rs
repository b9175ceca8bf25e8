//! Teacher directory port. Display only.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, TeacherId};
use crate::domain::teacher::Teacher;

#[async_trait]
pub trait TeacherDirectory: Send + Sync {
    async fn list(&self) -> Result<Vec<Teacher>, DomainError>;

    /// # Errors
    ///
    /// - `TeacherNotFound` if absent
    async fn get(&self, id: TeacherId) -> Result<Teacher, DomainError>;
}
