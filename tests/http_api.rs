//! Integration tests for the REST API.
//!
//! Drives the full router (auth middleware and tower-http stack included)
//! with `tower::ServiceExt::oneshot` against the in-memory store.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use yoga_booking::adapters::{
    api_router, ApiDependencies, InMemoryAccounts, InMemorySessionRepository,
    InMemoryTeacherDirectory,
};
use yoga_booking::config::ServerConfig;

// =============================================================================
// Test Infrastructure
// =============================================================================

struct TestApi {
    router: Router,
    member_id: i64,
    member_token: String,
    admin_token: String,
}

impl TestApi {
    async fn new() -> Self {
        let accounts = InMemoryAccounts::new()
            .with_user("member@studio.com", "Ada", "Lovelace", "pw-member")
            .with_admin("yoga@studio.com", "Admin", "Admin", "test!1234");
        let accounts = Arc::new(accounts);
        let sessions = Arc::new(InMemorySessionRepository::new(accounts.clone()));

        let router = api_router(
            ApiDependencies {
                sessions: sessions.clone(),
                participation: sessions,
                teachers: Arc::new(InMemoryTeacherDirectory::seeded()),
                users: accounts.clone(),
                auth: accounts.clone(),
                tokens: accounts,
            },
            &ServerConfig::default(),
        );

        let (member_id, member_token) = login(&router, "member@studio.com", "pw-member").await;
        let (_, admin_token) = login(&router, "yoga@studio.com", "test!1234").await;

        Self {
            router,
            member_id,
            member_token,
            admin_token,
        }
    }

    async fn call(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        send(&self.router, method, uri, token, body).await
    }

    async fn create_session(&self, name: &str) -> i64 {
        let (status, body) = self
            .call(
                "POST",
                "/api/session",
                Some(&self.admin_token),
                Some(session_body(name)),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "{}", body);
        body["id"].as_i64().unwrap()
    }
}

async fn send(
    router: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

async fn login(router: &Router, email: &str, password: &str) -> (i64, String) {
    let (status, body) = send(
        router,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "email": email, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{}", body);
    (
        body["id"].as_i64().unwrap(),
        body["token"].as_str().unwrap().to_string(),
    )
}

fn session_body(name: &str) -> Value {
    json!({
        "name": name,
        "date": "2024-01-01",
        "teacher_id": 1,
        "description": "d"
    })
}

// =============================================================================
// Auth
// =============================================================================

#[tokio::test]
async fn login_returns_bearer_profile() {
    let api = TestApi::new().await;
    let (status, body) = api
        .call(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({ "email": "yoga@studio.com", "password": "test!1234" })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], "Bearer");
    assert_eq!(body["admin"], true);
    assert_eq!(body["firstName"], "Admin");
}

#[tokio::test]
async fn login_with_bad_password_is_401() {
    let api = TestApi::new().await;
    let (status, body) = api
        .call(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({ "email": "yoga@studio.com", "password": "wrong" })),
        )
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn register_then_register_again_is_rejected() {
    let api = TestApi::new().await;
    let request = json!({
        "email": "new@studio.com",
        "firstName": "Grace",
        "lastName": "Hopper",
        "password": "pw"
    });

    let (status, body) = api
        .call("POST", "/api/auth/register", None, Some(request.clone()))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].is_string());

    let (status, body) = api
        .call("POST", "/api/auth/register", None, Some(request))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "EMAIL_TAKEN");
}

#[tokio::test]
async fn requests_without_token_are_401() {
    let api = TestApi::new().await;
    let (status, body) = api.call("GET", "/api/session", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHENTICATED");

    let (status, _) = api.call("GET", "/api/session", Some("bogus"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let api = TestApi::new().await;
    let request = Request::builder()
        .uri("/api/teacher")
        .header("Authorization", format!("Bearer {}", api.member_token))
        .body(Body::empty())
        .unwrap();

    let response = api.router.clone().oneshot(request).await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

// =============================================================================
// Sessions
// =============================================================================

#[tokio::test]
async fn admin_creates_and_member_lists() {
    let api = TestApi::new().await;
    let id = api.create_session("Yoga").await;

    let (status, body) = api
        .call("GET", "/api/session", Some(&api.member_token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    let sessions = body.as_array().unwrap();
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0]["id"], id);
    assert_eq!(sessions[0]["users"], json!([]));
    assert!(sessions[0]["createdAt"].is_string());
}

#[tokio::test]
async fn member_cannot_create_update_or_delete() {
    let api = TestApi::new().await;
    let id = api.create_session("Yoga").await;
    let token = Some(api.member_token.as_str());

    let (status, _) = api
        .call("POST", "/api/session", token, Some(session_body("Other")))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let uri = format!("/api/session/{}", id);
    let (status, _) = api
        .call("PUT", &uri, token, Some(session_body("Renamed")))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = api.call("DELETE", &uri, token, None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (_, body) = api.call("GET", &uri, token, None).await;
    assert_eq!(body["name"], "Yoga");
}

#[tokio::test]
async fn create_with_missing_teacher_names_the_field() {
    let api = TestApi::new().await;
    let (status, body) = api
        .call(
            "POST",
            "/api/session",
            Some(&api.admin_token),
            Some(json!({ "name": "Yoga", "date": "2024-01-01", "description": "d" })),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");
    assert_eq!(body["field"], "teacher_id");
}

#[tokio::test]
async fn non_numeric_and_unknown_ids() {
    let api = TestApi::new().await;
    let token = Some(api.member_token.as_str());

    let (status, _) = api.call("GET", "/api/session/abc", token, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = api.call("GET", "/api/session/999", token, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "SESSION_NOT_FOUND");
}

#[tokio::test]
async fn update_replaces_fields() {
    let api = TestApi::new().await;
    let id = api.create_session("Yoga").await;

    let (status, body) = api
        .call(
            "PUT",
            &format!("/api/session/{}", id),
            Some(&api.admin_token),
            Some(session_body("Vinyasa")),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Vinyasa");
    assert_eq!(body["id"], id);
}

#[tokio::test]
async fn delete_twice_is_404_the_second_time() {
    let api = TestApi::new().await;
    let id = api.create_session("Yoga").await;
    let uri = format!("/api/session/{}", id);

    let (status, _) = api.call("DELETE", &uri, Some(&api.admin_token), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = api.call("DELETE", &uri, Some(&api.admin_token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Participation
// =============================================================================

#[tokio::test]
async fn member_joins_and_leaves() {
    let api = TestApi::new().await;
    let id = api.create_session("Yoga").await;
    let token = Some(api.member_token.as_str());
    let uri = format!("/api/session/{}/participate/{}", id, api.member_id);

    let (status, _) = api.call("POST", &uri, token, None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = api.call("POST", &uri, token, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "ALREADY_PARTICIPATING");

    let (_, session) = api
        .call("GET", &format!("/api/session/{}", id), token, None)
        .await;
    assert_eq!(session["users"], json!([api.member_id]));

    let (status, _) = api.call("DELETE", &uri, token, None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = api.call("DELETE", &uri, token, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "NOT_PARTICIPATING");
}

#[tokio::test]
async fn member_cannot_enrol_someone_else_but_admin_can() {
    let api = TestApi::new().await;
    let id = api.create_session("Yoga").await;
    let other = api.member_id + 1;
    let uri = format!("/api/session/{}/participate/{}", id, other);

    let (status, _) = api.call("POST", &uri, Some(&api.member_token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = api.call("POST", &uri, Some(&api.admin_token), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn participation_of_unknown_user_is_404() {
    let api = TestApi::new().await;
    let id = api.create_session("Yoga").await;

    let (status, body) = api
        .call(
            "POST",
            &format!("/api/session/{}/participate/404", id),
            Some(&api.admin_token),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "USER_NOT_FOUND");
}

// =============================================================================
// Teachers and users
// =============================================================================

#[tokio::test]
async fn teachers_are_listed_and_fetched() {
    let api = TestApi::new().await;
    let token = Some(api.member_token.as_str());

    let (status, body) = api.call("GET", "/api/teacher", token, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (status, body) = api.call("GET", "/api/teacher/1", token, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["lastName"], "Delahaye");

    let (status, body) = api.call("GET", "/api/teacher/99", token, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "TEACHER_NOT_FOUND");
}

#[tokio::test]
async fn users_may_only_delete_themselves() {
    let api = TestApi::new().await;
    let admin_uri = format!("/api/user/{}", api.member_id + 1);
    let own_uri = format!("/api/user/{}", api.member_id);

    let (status, body) = api
        .call("GET", &own_uri, Some(&api.member_token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "member@studio.com");

    let (status, _) = api
        .call("DELETE", &admin_uri, Some(&api.member_token), None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = api
        .call("DELETE", &own_uri, Some(&api.member_token), None)
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = api
        .call("GET", &own_uri, Some(&api.admin_token), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
