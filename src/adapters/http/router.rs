//! Assembles the `/api` router and its middleware stack.

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    middleware, Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::ports::{
    AuthProvider, ParticipationManager, SessionRepository, TeacherDirectory, TokenValidator,
    UserDirectory,
};

use super::auth::{auth_routes, AuthHandlers};
use super::middleware::auth_middleware;
use super::session::{session_routes, SessionHandlers};
use super::teacher::{teacher_routes, TeacherHandlers};
use super::user::{user_routes, UserHandlers};

/// Collaborators the REST API is served from.
#[derive(Clone)]
pub struct ApiDependencies {
    pub sessions: Arc<dyn SessionRepository>,
    pub participation: Arc<dyn ParticipationManager>,
    pub teachers: Arc<dyn TeacherDirectory>,
    pub users: Arc<dyn UserDirectory>,
    pub auth: Arc<dyn AuthProvider>,
    pub tokens: Arc<dyn TokenValidator>,
}

/// Builds the full application router, mounted at `/api`.
pub fn api_router(deps: ApiDependencies, config: &ServerConfig) -> Router {
    let api = Router::new()
        .nest("/auth", auth_routes(AuthHandlers::new(deps.auth)))
        .nest(
            "/session",
            session_routes(SessionHandlers::new(deps.sessions, deps.participation)),
        )
        .nest("/teacher", teacher_routes(TeacherHandlers::new(deps.teachers)))
        .nest("/user", user_routes(UserHandlers::new(deps.users)))
        .layer(middleware::from_fn_with_state(deps.tokens, auth_middleware));

    Router::new().nest("/api", api).layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TimeoutLayer::new(config.request_timeout()))
            .layer(cors_layer(config)),
    )
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}
