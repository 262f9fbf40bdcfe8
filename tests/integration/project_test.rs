//! Integration tests for project CRUD, ordering, and ownership scoping.

use http::StatusCode;
use serde_json::{Value, json};

use super::helpers::TestApp;

/// Creates an entry and returns its id.
async fn create(app: &TestApp, token: &str, body: Value) -> i64 {
    let response = app
        .request("POST", "/api/projects", Some(body), Some(token))
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    response.body["data"]["id"].as_i64().expect("id")
}

/// Lists entries and returns the items array.
async fn list(app: &TestApp, token: &str) -> Vec<Value> {
    let response = app.request("GET", "/api/projects", None, Some(token)).await;
    assert_eq!(response.status, StatusCode::OK);
    response.body["data"]["items"].as_array().expect("items").clone()
}

#[tokio::test]
async fn test_create_then_list_round_trips_fields() {
    let Some(app) = TestApp::try_new().await else {
        eprintln!("skipping: TASKHUB_TEST_DATABASE_URL not set");
        return;
    };
    let (_, _, token) = app.register_user("secret1").await;

    let id = create(
        &app,
        &token,
        json!({
            "title": "Ship the report",
            "description": "quarterly numbers",
            "priority": "high",
            "image": "aGVsbG8=",
            "pinned": true,
        }),
    )
    .await;

    let items = list(&app, &token).await;
    assert_eq!(items.len(), 1);
    let item = &items[0];
    assert_eq!(item["id"].as_i64().unwrap(), id);
    assert_eq!(item["title"], "Ship the report");
    assert_eq!(item["description"], "quarterly numbers");
    assert_eq!(item["priority"], "high");
    assert_eq!(item["image"], "aGVsbG8=");
    assert_eq!(item["pinned"], true);
    assert_eq!(item["order_index"].as_i64().unwrap(), 1);
}

#[tokio::test]
async fn test_unrecognized_priority_becomes_medium() {
    let Some(app) = TestApp::try_new().await else {
        eprintln!("skipping: TASKHUB_TEST_DATABASE_URL not set");
        return;
    };
    let (_, _, token) = app.register_user("secret1").await;

    create(&app, &token, json!({"title": "Odd one", "priority": "urgent"})).await;
    create(&app, &token, json!({"title": "No priority at all"})).await;

    let items = list(&app, &token).await;
    assert!(items.iter().all(|i| i["priority"] == "medium"));
}

#[tokio::test]
async fn test_create_validation_messages() {
    let Some(app) = TestApp::try_new().await else {
        eprintln!("skipping: TASKHUB_TEST_DATABASE_URL not set");
        return;
    };
    let (_, _, token) = app.register_user("secret1").await;

    let short_title = app
        .request(
            "POST",
            "/api/projects",
            Some(json!({"title": "ab"})),
            Some(&token),
        )
        .await;
    assert_eq!(short_title.status, StatusCode::BAD_REQUEST);
    assert!(
        short_title.body["message"].as_str().unwrap().contains("Title"),
        "{:?}",
        short_title.body
    );

    let long_description = app
        .request(
            "POST",
            "/api/projects",
            Some(json!({"title": "Fine title", "description": "d".repeat(1001)})),
            Some(&token),
        )
        .await;
    assert_eq!(long_description.status, StatusCode::BAD_REQUEST);
    let message = long_description.body["message"].as_str().unwrap();
    assert!(message.contains("Description") && message.contains("1000"), "{message}");
}

#[tokio::test]
async fn test_new_entries_append_at_the_tail() {
    let Some(app) = TestApp::try_new().await else {
        eprintln!("skipping: TASKHUB_TEST_DATABASE_URL not set");
        return;
    };
    let (_, _, token) = app.register_user("secret1").await;

    let first = create(&app, &token, json!({"title": "first"})).await;
    let second = create(&app, &token, json!({"title": "second"})).await;
    let third = create(&app, &token, json!({"title": "third"})).await;

    let ids: Vec<i64> = list(&app, &token)
        .await
        .iter()
        .map(|i| i["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![first, second, third]);
}

#[tokio::test]
async fn test_update_of_foreign_entry_is_not_found() {
    let Some(app) = TestApp::try_new().await else {
        eprintln!("skipping: TASKHUB_TEST_DATABASE_URL not set");
        return;
    };
    let (_, _, owner_token) = app.register_user("secret1").await;
    let (_, _, other_token) = app.register_user("secret1").await;

    let id = create(&app, &owner_token, json!({"title": "mine"})).await;
    let changes = json!({"title": "stolen", "description": ""});

    let foreign = app
        .request(
            "PUT",
            &format!("/api/projects/{id}"),
            Some(changes.clone()),
            Some(&other_token),
        )
        .await;
    let missing = app
        .request(
            "PUT",
            "/api/projects/999999999",
            Some(changes),
            Some(&other_token),
        )
        .await;

    // Ownership mismatch and true absence are indistinguishable.
    assert_eq!(foreign.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(foreign.body["error"], missing.body["error"]);

    // The entry is untouched.
    let items = list(&app, &owner_token).await;
    assert_eq!(items[0]["title"], "mine");
}

#[tokio::test]
async fn test_update_without_order_index_keeps_ranking() {
    let Some(app) = TestApp::try_new().await else {
        eprintln!("skipping: TASKHUB_TEST_DATABASE_URL not set");
        return;
    };
    let (_, _, token) = app.register_user("secret1").await;

    let id = create(&app, &token, json!({"title": "entry"})).await;
    create(&app, &token, json!({"title": "tail"})).await;

    let before = list(&app, &token).await;
    let order_before = before[0]["order_index"].as_i64().unwrap();

    let response = app
        .request(
            "PUT",
            &format!("/api/projects/{id}"),
            Some(json!({"title": "entry renamed", "description": "now described"})),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let after = list(&app, &token).await;
    assert_eq!(after[0]["title"], "entry renamed");
    assert_eq!(after[0]["order_index"].as_i64().unwrap(), order_before);

    // An explicit order_index does move the entry.
    let response = app
        .request(
            "PUT",
            &format!("/api/projects/{id}"),
            Some(json!({"title": "entry renamed", "order_index": 50})),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let moved = list(&app, &token).await;
    assert_eq!(moved.last().unwrap()["id"].as_i64().unwrap(), id);
}

#[tokio::test]
async fn test_reorder_assigns_positions() {
    let Some(app) = TestApp::try_new().await else {
        eprintln!("skipping: TASKHUB_TEST_DATABASE_URL not set");
        return;
    };
    let (_, _, token) = app.register_user("secret1").await;

    let a = create(&app, &token, json!({"title": "alpha"})).await;
    let b = create(&app, &token, json!({"title": "beta"})).await;
    let c = create(&app, &token, json!({"title": "gamma"})).await;

    let response = app
        .request(
            "PUT",
            "/api/projects/reorder",
            Some(json!({"order": [c, a, b]})),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let ids: Vec<i64> = list(&app, &token)
        .await
        .iter()
        .map(|i| i["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![c, a, b]);
}

#[tokio::test]
async fn test_pinned_entries_sort_before_any_order_index() {
    let Some(app) = TestApp::try_new().await else {
        eprintln!("skipping: TASKHUB_TEST_DATABASE_URL not set");
        return;
    };
    let (_, _, token) = app.register_user("secret1").await;

    let a = create(&app, &token, json!({"title": "alpha"})).await;
    let b = create(&app, &token, json!({"title": "beta"})).await;
    let c = create(&app, &token, json!({"title": "gamma", "pinned": true})).await;

    // gamma is pinned, so it leads even though its order_index is largest.
    let ids: Vec<i64> = list(&app, &token)
        .await
        .iter()
        .map(|i| i["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![c, a, b]);
}

#[tokio::test]
async fn test_reorder_ignores_foreign_and_unknown_ids() {
    let Some(app) = TestApp::try_new().await else {
        eprintln!("skipping: TASKHUB_TEST_DATABASE_URL not set");
        return;
    };
    let (_, _, owner_token) = app.register_user("secret1").await;
    let (_, _, other_token) = app.register_user("secret1").await;

    let foreign = create(&app, &owner_token, json!({"title": "not yours"})).await;
    let own = create(&app, &other_token, json!({"title": "own"})).await;

    // Foreign and unknown ids are silent no-ops; the call still succeeds.
    let response = app
        .request(
            "PUT",
            "/api/projects/reorder",
            Some(json!({"order": [foreign, 999999999, own]})),
            Some(&other_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let own_items = list(&app, &other_token).await;
    assert_eq!(own_items[0]["order_index"].as_i64().unwrap(), 2);

    // The foreign entry kept its tail-append index.
    let owner_items = list(&app, &owner_token).await;
    assert_eq!(owner_items[0]["order_index"].as_i64().unwrap(), 1);
}

#[tokio::test]
async fn test_delete_scoping_and_repeat() {
    let Some(app) = TestApp::try_new().await else {
        eprintln!("skipping: TASKHUB_TEST_DATABASE_URL not set");
        return;
    };
    let (_, _, owner_token) = app.register_user("secret1").await;
    let (_, _, other_token) = app.register_user("secret1").await;

    let id = create(&app, &owner_token, json!({"title": "target"})).await;

    let foreign = app
        .request(
            "DELETE",
            &format!("/api/projects/{id}"),
            None,
            Some(&other_token),
        )
        .await;
    assert_eq!(foreign.status, StatusCode::NOT_FOUND);

    let deleted = app
        .request(
            "DELETE",
            &format!("/api/projects/{id}"),
            None,
            Some(&owner_token),
        )
        .await;
    assert_eq!(deleted.status, StatusCode::OK);

    let again = app
        .request(
            "DELETE",
            &format!("/api/projects/{id}"),
            None,
            Some(&owner_token),
        )
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_all_reports_the_count() {
    let Some(app) = TestApp::try_new().await else {
        eprintln!("skipping: TASKHUB_TEST_DATABASE_URL not set");
        return;
    };
    let (_, _, token) = app.register_user("secret1").await;

    create(&app, &token, json!({"title": "one"})).await;
    create(&app, &token, json!({"title": "two"})).await;

    let first = app.request("DELETE", "/api/projects", None, Some(&token)).await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body["data"]["deleted"].as_u64().unwrap(), 2);

    assert!(list(&app, &token).await.is_empty());

    // Deleting an already-empty list still succeeds.
    let second = app.request("DELETE", "/api/projects", None, Some(&token)).await;
    assert_eq!(second.status, StatusCode::OK);
    assert_eq!(second.body["data"]["deleted"].as_u64().unwrap(), 0);
}

#[tokio::test]
async fn test_project_routes_require_a_token() {
    let Some(app) = TestApp::try_new().await else {
        eprintln!("skipping: TASKHUB_TEST_DATABASE_URL not set");
        return;
    };

    for (method, path) in [
        ("GET", "/api/projects"),
        ("DELETE", "/api/projects"),
        ("PUT", "/api/projects/reorder"),
    ] {
        let response = app.request(method, path, None, None).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{method} {path}");
    }
}
