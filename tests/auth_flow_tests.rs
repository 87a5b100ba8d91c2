//! Login and registration flow tests against a mocked user service

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use taskpad::api::{RegisterRequest, UserClient};
use taskpad::auth::{self, SessionStore};
use taskpad::error::Error;

fn session_store(dir: &tempfile::TempDir) -> SessionStore {
    SessionStore::new(dir.path().join("session.json"))
}

#[tokio::test]
async fn test_login_stores_token_and_synthesized_user() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(json!({"username": "alice", "password": "s3cret"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"access_token": "tok-1", "token_type": "bearer"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let store = session_store(&dir);
    let users = UserClient::new(&server.uri(), 5).unwrap();

    let session = auth::login(&users, &store, "alice", "s3cret").await.unwrap();
    assert_eq!(session.token, "tok-1");
    assert_eq!(session.user.id, 1);
    assert_eq!(session.user.username, "alice");
    assert_eq!(session.user.email, "alice@example.com");

    // The session survived to disk.
    let restored = store.restore().expect("session should be persisted");
    assert_eq!(restored.token, "tok-1");
}

#[tokio::test]
async fn test_login_failure_surfaces_server_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"detail": "Invalid credentials"})),
        )
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let store = session_store(&dir);
    let users = UserClient::new(&server.uri(), 5).unwrap();

    let err = auth::login(&users, &store, "alice", "wrong").await.unwrap_err();
    assert!(matches!(
        err,
        Error::Api {
            status: 401,
            detail: Some(_)
        }
    ));
    assert_eq!(auth::login_error_message(&err), "Invalid credentials");
    assert!(store.restore().is_none(), "no session on failed login");
}

#[tokio::test]
async fn test_login_failure_without_detail_uses_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let store = session_store(&dir);
    let users = UserClient::new(&server.uri(), 5).unwrap();

    let err = auth::login(&users, &store, "alice", "pw").await.unwrap_err();
    assert_eq!(
        auth::login_error_message(&err),
        "Login failed. Please check your credentials."
    );
}

#[tokio::test]
async fn test_login_network_error_message() {
    // Nothing is listening here.
    let dir = tempfile::tempdir().unwrap();
    let store = session_store(&dir);
    let users = UserClient::new("http://127.0.0.1:1", 5).unwrap();

    let err = auth::login(&users, &store, "alice", "pw").await.unwrap_err();
    assert!(matches!(err, Error::Http(_)));
    assert_eq!(
        auth::login_error_message(&err),
        "Network error. Please try again."
    );
}

#[tokio::test]
async fn test_register_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/register"))
        .and(body_json(json!({
            "username": "bob",
            "email": "bob@mail.com",
            "password": "pw"
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": 2, "username": "bob", "email": "bob@mail.com"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let users = UserClient::new(&server.uri(), 5).unwrap();
    let form = RegisterRequest {
        username: "bob".to_string(),
        email: "bob@mail.com".to_string(),
        password: "pw".to_string(),
    };
    users.register(&form).await.unwrap();
}

#[tokio::test]
async fn test_register_conflict_surfaces_duplicate_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/register"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({"detail": "User already exists"})),
        )
        .mount(&server)
        .await;

    let users = UserClient::new(&server.uri(), 5).unwrap();
    let form = RegisterRequest {
        username: "bob".to_string(),
        email: "bob@mail.com".to_string(),
        password: "pw".to_string(),
    };

    let err = users.register(&form).await.unwrap_err();
    assert!(matches!(err, Error::Conflict));
    assert_eq!(
        auth::register_error_message(&err),
        "Username or email already exists. Please try another."
    );
}

#[tokio::test]
async fn test_register_other_failure_uses_server_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/register"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({"detail": "Invalid email address"})),
        )
        .mount(&server)
        .await;

    let users = UserClient::new(&server.uri(), 5).unwrap();
    let form = RegisterRequest {
        username: "bob".to_string(),
        email: "not-an-email".to_string(),
        password: "pw".to_string(),
    };

    let err = users.register(&form).await.unwrap_err();
    assert_eq!(auth::register_error_message(&err), "Invalid email address");
}
