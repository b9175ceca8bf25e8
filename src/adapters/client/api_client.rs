//! Shared HTTP plumbing for the REST client adapters.

use std::sync::{Arc, PoisonError, RwLock};

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::adapters::http::ErrorResponse;
use crate::config::ClientConfig;
use crate::domain::foundation::{AuthError, DomainError, ErrorCode, SessionId, UserId};
use crate::domain::session::SessionError;

/// Failure talking to the booking API.
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    /// The request never produced a response (connect, timeout, TLS...).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("HTTP {status} [{code}]: {message}")]
    Status {
        status: u16,
        code: String,
        message: String,
        field: Option<String>,
    },

    /// The response body did not match the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl ClientError {
    fn transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Transport(format!("Request timed out: {}", err))
        } else if err.is_connect() {
            ClientError::Transport(format!("Connection failed: {}", err))
        } else {
            ClientError::Transport(err.to_string())
        }
    }

    /// The wire error code, when the server sent a known one.
    pub fn error_code(&self) -> Option<ErrorCode> {
        match self {
            ClientError::Status { code, .. } => ErrorCode::from_wire(code),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Maps to the session taxonomy. The ids name what the request addressed.
    /// Undecodable bodies and statuses with no specific mapping are network
    /// errors.
    pub fn into_session_error(
        self,
        session_id: Option<SessionId>,
        user_id: Option<UserId>,
    ) -> SessionError {
        let code = self.error_code();
        match self {
            ClientError::Transport(message) | ClientError::Decode(message) => {
                SessionError::Network(message)
            }
            ClientError::Status {
                status,
                message,
                field,
                ..
            } => match (code, session_id, user_id) {
                (Some(ErrorCode::ValidationFailed), _, _) => SessionError::ValidationFailed {
                    field: field.unwrap_or_else(|| "unknown".to_string()),
                    message,
                },
                (Some(ErrorCode::SessionNotFound), Some(s), _) => SessionError::NotFound(s),
                (Some(ErrorCode::UserNotFound), _, Some(u)) => SessionError::UserNotFound(u),
                (Some(ErrorCode::AlreadyParticipating), Some(s), Some(u)) => {
                    SessionError::already_participating(s, u)
                }
                (Some(ErrorCode::NotParticipating), Some(s), Some(u)) => {
                    SessionError::not_participating(s, u)
                }
                (None, Some(s), _) if status == 404 => SessionError::NotFound(s),
                _ if status == 401 || status == 403 => SessionError::Forbidden,
                _ => SessionError::Network(format!("HTTP {}: {}", status, message)),
            },
        }
    }

    /// Maps to the directory error shape.
    pub fn into_domain_error(self) -> DomainError {
        let code = self.error_code();
        match self {
            ClientError::Transport(message) => DomainError::network(message),
            ClientError::Decode(message) => DomainError::new(ErrorCode::InternalError, message),
            ClientError::Status {
                status,
                message,
                field,
                ..
            } => {
                let code = code.unwrap_or(match status {
                    401 => ErrorCode::Unauthorized,
                    403 => ErrorCode::Forbidden,
                    _ => ErrorCode::InternalError,
                });
                let error = DomainError::new(code, message);
                match field {
                    Some(field) => error.with_detail("field", field),
                    None => error,
                }
            }
        }
    }

    /// Maps to the authentication error shape.
    pub fn into_auth_error(self) -> AuthError {
        match self {
            ClientError::Transport(message) | ClientError::Decode(message) => {
                AuthError::ServiceUnavailable(message)
            }
            ClientError::Status {
                status,
                code,
                message,
                ..
            } => match status {
                401 => AuthError::InvalidCredentials,
                400 if code == "EMAIL_TAKEN" => AuthError::EmailTaken,
                500..=599 => AuthError::ServiceUnavailable(message),
                _ => AuthError::InvalidRequest(message),
            },
        }
    }
}

/// HTTP client bound to the API base URL, carrying the current bearer token.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(ClientError::transport)?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            token: Arc::new(RwLock::new(None)),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn set_token(&self, token: Option<String>) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = token;
    }

    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match self.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, ClientError> {
        let response = builder.send().await.map_err(ClientError::transport)?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let error = match serde_json::from_str::<ErrorResponse>(&body) {
            Ok(parsed) => ClientError::Status {
                status: status.as_u16(),
                code: parsed.code,
                message: parsed.error,
                field: parsed.field,
            },
            Err(_) => ClientError::Status {
                status: status.as_u16(),
                code: String::new(),
                message: body,
                field: None,
            },
        };
        tracing::debug!(status = status.as_u16(), error = %error, "API request failed");
        Err(error)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        response
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self.send(self.request(Method::GET, path)).await?;
        Self::decode(response).await
    }

    pub async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(self.request(method, path).json(body)).await?;
        Self::decode(response).await
    }

    /// Sends a request whose response body is ignored.
    pub async fn send_empty<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(), ClientError>
    where
        B: Serialize + ?Sized,
    {
        let builder = self.request(method, path);
        let builder = match body {
            Some(body) => builder.json(body),
            None => builder,
        };
        self.send(builder).await.map(|_| ())
    }
}
