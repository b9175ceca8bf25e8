//! Auth collaborator over the REST API.
//!
//! A successful login stores the returned bearer token in the shared
//! `ApiClient`, so every adapter built from it is authenticated from then on.

use async_trait::async_trait;
use reqwest::Method;
use secrecy::ExposeSecret;
use serde_json::json;

use crate::domain::foundation::{AuthError, Credentials, RegisterRequest, SignedIn};
use crate::ports::AuthProvider;

use super::ApiClient;

#[derive(Clone)]
pub struct HttpAuthProvider {
    client: ApiClient,
}

impl HttpAuthProvider {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthProvider for HttpAuthProvider {
    async fn login(&self, credentials: &Credentials) -> Result<SignedIn, AuthError> {
        let body = json!({
            "email": credentials.email,
            "password": credentials.password.expose_secret(),
        });
        let signed_in: SignedIn = self
            .client
            .send_json(Method::POST, "auth/login", &body)
            .await
            .map_err(|e| e.into_auth_error())?;

        self.client.set_token(Some(signed_in.token.clone()));
        Ok(signed_in)
    }

    async fn register(&self, request: &RegisterRequest) -> Result<(), AuthError> {
        let body = json!({
            "email": request.email,
            "firstName": request.first_name,
            "lastName": request.last_name,
            "password": request.password.expose_secret(),
        });
        self.client
            .send_empty(Method::POST, "auth/register", Some(&body))
            .await
            .map_err(|e| e.into_auth_error())
    }

    fn logout(&self) {
        self.client.set_token(None);
    }
}
