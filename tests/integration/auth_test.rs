//! Integration tests for registration, login, and throttling.

use http::StatusCode;
use serde_json::json;

use super::helpers::{TestApp, unique_client, unique_name};

#[tokio::test]
async fn test_registration_token_resolves_to_created_user() {
    let Some(app) = TestApp::try_new().await else {
        eprintln!("skipping: TASKHUB_TEST_DATABASE_URL not set");
        return;
    };

    let (user_id, _, token) = app.register_user("secret1").await;

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["id"].as_i64().unwrap(), user_id);
}

#[tokio::test]
async fn test_register_duplicate_username_conflicts() {
    let Some(app) = TestApp::try_new().await else {
        eprintln!("skipping: TASKHUB_TEST_DATABASE_URL not set");
        return;
    };

    let name = unique_name();
    let body = |email: &str| {
        json!({"username": &name, "email": email, "password": "secret1"})
    };

    let first = app
        .request("POST", "/api/auth/register", Some(body("a1@x.com")), None)
        .await;
    assert_eq!(first.status, StatusCode::OK);

    let second = app
        .request("POST", "/api/auth/register", Some(body("a2@x.com")), None)
        .await;
    assert_eq!(second.status, StatusCode::CONFLICT);
    assert_eq!(second.body["error"], "CONFLICT");
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let Some(app) = TestApp::try_new().await else {
        eprintln!("skipping: TASKHUB_TEST_DATABASE_URL not set");
        return;
    };

    let email = format!("{}@x.com", unique_name());
    let body = |name: String| json!({"username": name, "email": &email, "password": "secret1"});

    let first = app
        .request("POST", "/api/auth/register", Some(body(unique_name())), None)
        .await;
    assert_eq!(first.status, StatusCode::OK);

    let second = app
        .request("POST", "/api/auth/register", Some(body(unique_name())), None)
        .await;
    assert_eq!(second.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_register_validation_names_the_field() {
    let Some(app) = TestApp::try_new().await else {
        eprintln!("skipping: TASKHUB_TEST_DATABASE_URL not set");
        return;
    };

    let cases = [
        (json!({"username": "x!", "email": "a@x.com", "password": "secret1"}), "Username"),
        (json!({"username": unique_name(), "email": "nonsense", "password": "secret1"}), "Email"),
        (json!({"username": unique_name(), "email": "a@x.com", "password": "short"}), "Password"),
    ];

    for (body, field) in cases {
        let response = app
            .request("POST", "/api/auth/register", Some(body), None)
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        let message = response.body["message"].as_str().unwrap();
        assert!(message.contains(field), "{message}");
    }
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let Some(app) = TestApp::try_new().await else {
        eprintln!("skipping: TASKHUB_TEST_DATABASE_URL not set");
        return;
    };

    let (_, email, _) = app.register_user("secret1").await;
    let client = unique_client();

    let wrong_password = app
        .request_from(
            Some(&client),
            "POST",
            "/api/auth/login",
            Some(json!({"email": &email, "password": "wrong"})),
            None,
        )
        .await;
    let unknown_email = app
        .request_from(
            Some(&client),
            "POST",
            "/api/auth/login",
            Some(json!({"email": "nobody@nowhere.io", "password": "secret1"})),
            None,
        )
        .await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body["message"], unknown_email.body["message"]);
}

#[tokio::test]
async fn test_lockout_after_five_failures() {
    let Some(app) = TestApp::try_new().await else {
        eprintln!("skipping: TASKHUB_TEST_DATABASE_URL not set");
        return;
    };

    let (_, email, _) = app.register_user("secret1").await;
    let client = unique_client();

    for _ in 0..5 {
        let response = app
            .request_from(
                Some(&client),
                "POST",
                "/api/auth/login",
                Some(json!({"email": &email, "password": "wrong"})),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    }

    // The sixth attempt is throttled even with the correct password.
    let throttled = app
        .request_from(
            Some(&client),
            "POST",
            "/api/auth/login",
            Some(json!({"email": &email, "password": "secret1"})),
            None,
        )
        .await;
    assert_eq!(throttled.status, StatusCode::TOO_MANY_REQUESTS);
    let message = throttled.body["message"].as_str().unwrap();
    assert!(message.contains("5 minutes"), "{message}");

    // A different client address is unaffected.
    let other = app
        .request_from(
            Some(&unique_client()),
            "POST",
            "/api/auth/login",
            Some(json!({"email": &email, "password": "secret1"})),
            None,
        )
        .await;
    assert_eq!(other.status, StatusCode::OK);
}

#[tokio::test]
async fn test_successful_login_clears_recorded_failures() {
    let Some(app) = TestApp::try_new().await else {
        eprintln!("skipping: TASKHUB_TEST_DATABASE_URL not set");
        return;
    };

    let (_, email, _) = app.register_user("secret1").await;
    let client = unique_client();

    for _ in 0..4 {
        let status = login(&app, &client, &email, "wrong").await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
    assert_eq!(login(&app, &client, &email, "secret1").await, StatusCode::OK);

    // The slate is clean: five fresh failures are needed before lockout.
    for _ in 0..5 {
        let status = login(&app, &client, &email, "wrong").await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
    assert_eq!(
        login(&app, &client, &email, "secret1").await,
        StatusCode::TOO_MANY_REQUESTS
    );
}

/// Login helper returning only the status code.
async fn login(app: &TestApp, client: &str, email: &str, password: &str) -> StatusCode {
    app.request_from(
        Some(client),
        "POST",
        "/api/auth/login",
        Some(json!({"email": email, "password": password})),
        None,
    )
    .await
    .status
}

#[tokio::test]
async fn test_me_requires_a_valid_token() {
    let Some(app) = TestApp::try_new().await else {
        eprintln!("skipping: TASKHUB_TEST_DATABASE_URL not set");
        return;
    };

    let missing = app.request("GET", "/api/auth/me", None, None).await;
    assert_eq!(missing.status, StatusCode::UNAUTHORIZED);

    let garbage = app
        .request("GET", "/api/auth/me", None, Some("not.a.token"))
        .await;
    assert_eq!(garbage.status, StatusCode::UNAUTHORIZED);
}
