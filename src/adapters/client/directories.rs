//! Teacher and User directories over the REST API.

use async_trait::async_trait;
use reqwest::Method;

use crate::domain::foundation::{DomainError, TeacherId, UserId};
use crate::domain::teacher::Teacher;
use crate::domain::user::User;
use crate::ports::{TeacherDirectory, UserDirectory};

use super::ApiClient;

#[derive(Clone)]
pub struct HttpTeacherDirectory {
    client: ApiClient,
}

impl HttpTeacherDirectory {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TeacherDirectory for HttpTeacherDirectory {
    async fn list(&self) -> Result<Vec<Teacher>, DomainError> {
        self.client
            .get_json("teacher")
            .await
            .map_err(|e| e.into_domain_error())
    }

    async fn get(&self, id: TeacherId) -> Result<Teacher, DomainError> {
        self.client
            .get_json(&format!("teacher/{}", id))
            .await
            .map_err(|e| e.into_domain_error())
    }
}

#[derive(Clone)]
pub struct HttpUserDirectory {
    client: ApiClient,
}

impl HttpUserDirectory {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UserDirectory for HttpUserDirectory {
    async fn get(&self, id: UserId) -> Result<User, DomainError> {
        self.client
            .get_json(&format!("user/{}", id))
            .await
            .map_err(|e| e.into_domain_error())
    }

    async fn exists(&self, id: UserId) -> Result<bool, DomainError> {
        match self.get(id).await {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e),
        }
    }

    async fn delete(&self, id: UserId) -> Result<(), DomainError> {
        self.client
            .send_empty::<()>(Method::DELETE, &format!("user/{}", id), None)
            .await
            .map_err(|e| e.into_domain_error())
    }
}
