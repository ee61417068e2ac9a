//! End-to-end tests against the assembled router with in-memory stores.

use std::path::PathBuf;
use std::sync::Arc;

use auth::{AuthConfig, InMemoryAuthRepository};
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use serde_json::{Value, json};
use survey::InMemorySurveyRepository;
use tower::ServiceExt;

use crate::build_router;

fn static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../../public")
}

fn app() -> Router {
    build_router(
        Arc::new(InMemoryAuthRepository::new()),
        Arc::new(InMemorySurveyRepository::new()),
        Arc::new(AuthConfig::development()),
        &static_dir(),
    )
}

fn request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::COOKIE, format!("token={token}"));
    }
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn register_and_login(app: &Router, email: &str, username: &str) -> String {
    let response = send(
        app,
        request(
            "POST",
            "/api/register",
            None,
            Some(json!({"email": email, "username": username, "password": "pw1"})),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = send(
        app,
        request(
            "POST",
            "/api/login",
            None,
            Some(json!({"username": username, "password": "pw1"})),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    body_json(response).await["token"]
        .as_str()
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn test_session_lifecycle() {
    let app = app();
    let token = register_and_login(&app, "a@x.com", "alice").await;

    let response = send(&app, request("GET", "/api/user", Some(&token), None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"name": "a@x.com", "username": "alice"})
    );

    let response = send(&app, request("DELETE", "/api/logout", Some(&token), None)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(&app, request("GET", "/api/user", Some(&token), None)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_survey_round_trip() {
    let app = app();
    let alice = register_and_login(&app, "a@x.com", "alice").await;
    let bob = register_and_login(&app, "b@x.com", "bob").await;

    let response = send(
        &app,
        request(
            "POST",
            "/api/surveys",
            Some(&alice),
            Some(json!({
                "title": "Team lunch",
                "questions": [{
                    "text": "Where?",
                    "type": "multipleChoice",
                    "options": ["Pizza", "Sushi"]
                }]
            })),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let survey_id = body_json(response).await["surveyId"]
        .as_str()
        .unwrap()
        .to_string();

    let vote_uri = format!("/api/surveys/{survey_id}/vote");
    let vote = json!({"answers": [{"questionIndex": 0, "answer": "Sushi"}]});

    let response = send(&app, request("POST", &vote_uri, Some(&bob), Some(vote.clone()))).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(&app, request("POST", &vote_uri, Some(&bob), Some(vote))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let survey_uri = format!("/api/surveys/{survey_id}");
    let response = send(&app, request("GET", &survey_uri, None, None)).await;
    let survey = body_json(response).await;
    assert_eq!(survey["responses"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_error_body_shape() {
    let app = app();
    let response = send(&app, request("GET", "/api/user", None, None)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await;
    assert_eq!(body["status"], 401);
    assert_eq!(body["message"], "Authentication required.");
    assert_eq!(body["message"], body["detail"]);
}

#[tokio::test]
async fn test_landing_pages() {
    let app = app();

    for uri in ["/", "/login", "/register"] {
        let response = send(&app, request("GET", uri, None, None)).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("<html"), "{uri}");
    }

    let response = send(&app, request("GET", "/missing.css", None, None)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
