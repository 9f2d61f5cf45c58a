/// Common test utilities and fixtures
use axum::{body::Body, http::Request, Router};
use phasebook_core::{Dataset, User};
use phasebook_server::{create_router, state::AppState};
use std::sync::Arc;
use tower::util::ServiceExt;

/// Router over the two-user directory used throughout the tests
pub fn create_test_app() -> Router {
    create_test_app_with(fixtures::bob_and_alice())
}

/// Router over an arbitrary directory
pub fn create_test_app_with(users: Vec<User>) -> Router {
    let dataset = Arc::new(Dataset::new(users));
    create_router(AppState::new(dataset))
}

/// Issue a GET and decode the JSON body
pub async fn get_json(app: Router, uri: &str) -> (axum::http::StatusCode, serde_json::Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if body_bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap()
    };
    (status, value)
}

/// Ids of a JSON array of users, in order
pub fn ids(value: &serde_json::Value) -> Vec<String> {
    value
        .as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|u| u["id"].as_str().unwrap().to_string())
        .collect()
}

/// Test directories
pub mod fixtures {
    use phasebook_core::User;

    pub fn bob_and_alice() -> Vec<User> {
        vec![
            User::new("2", "Bob", 30, "Chef"),
            User::new("1", "Alice", 25, "Nurse"),
        ]
    }

    pub fn staff() -> Vec<User> {
        vec![
            User::new("1", "John Doe", 30, "Developer"),
            User::new("2", "Jane Doe", 25, "Designer"),
            User::new("3", "Bob Smith", 29, "Nurse"),
            User::new("4", "Alice Johnson", 31, "Developer"),
            User::new("5", "Jonathan Nurse", 45, "Chef"),
        ]
    }
}
