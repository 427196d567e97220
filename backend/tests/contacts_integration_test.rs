//! Integration tests for contact CRUD, pagination, search, and ownership

mod common;

use axum::http::StatusCode;
use serde_json::json;

fn contact_body(name: &str, email: &str) -> String {
    json!({
        "name": name,
        "surname": "Tester",
        "email": email,
        "phone": "+1 555 000 1234",
        "birthday": "1990-04-01"
    })
    .to_string()
}

async fn create_contact(
    app: &common::TestApp,
    token: &str,
    name: &str,
    email: &str,
) -> serde_json::Value {
    let (status, response) = app
        .post_auth("/contacts/", &contact_body(name, email), token)
        .await;
    assert_eq!(status, StatusCode::CREATED);
    serde_json::from_str(&response).unwrap()
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_create_and_get_contact() {
    let app = common::TestApp::new().await;
    let (_, token) = app.register_and_login().await;

    let created = create_contact(&app, &token, "Ada", "ada@example.com").await;
    let id = created["id"].as_i64().unwrap();

    let (status, response) = app.get_auth(&format!("/contacts/{}", id), &token).await;
    assert_eq!(status, StatusCode::OK);

    let contact: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(contact["name"], "Ada");
    assert_eq!(contact["email"], "ada@example.com");
    assert_eq!(contact["birthday"], "1990-04-01");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_contact_not_visible_to_other_user() {
    let app = common::TestApp::new().await;
    let (_, owner_token) = app.register_and_login().await;
    let (_, other_token) = app.register_and_login().await;

    let created = create_contact(&app, &owner_token, "Private", "private@example.com").await;
    let id = created["id"].as_i64().unwrap();

    // Owner sees it
    let (status, _) = app.get_auth(&format!("/contacts/{}", id), &owner_token).await;
    assert_eq!(status, StatusCode::OK);

    // Another authenticated user gets 404, not 403
    let (status, _) = app.get_auth(&format!("/contacts/{}", id), &other_token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Same for update and delete
    let (status, _) = app
        .put_auth(
            &format!("/contacts/{}", id),
            &contact_body("Hijack", "hijack@example.com"),
            &other_token,
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .delete_auth(&format!("/contacts/{}", id), &other_token)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // The row is untouched
    let (status, response) = app.get_auth(&format!("/contacts/{}", id), &owner_token).await;
    assert_eq!(status, StatusCode::OK);
    let contact: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(contact["name"], "Private");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_list_pagination() {
    let app = common::TestApp::new().await;
    let (_, token) = app.register_and_login().await;

    for i in 0..15 {
        create_contact(
            &app,
            &token,
            &format!("Contact{:02}", i),
            &format!("contact{:02}@example.com", i),
        )
        .await;
    }

    let (status, response) = app.get_auth("/contacts/?skip=0&limit=10", &token).await;
    assert_eq!(status, StatusCode::OK);
    let page: Vec<serde_json::Value> = serde_json::from_str(&response).unwrap();
    assert_eq!(page.len(), 10);
    // Insertion order
    assert_eq!(page[0]["name"], "Contact00");
    assert_eq!(page[9]["name"], "Contact09");

    let (status, response) = app.get_auth("/contacts/?skip=10&limit=10", &token).await;
    assert_eq!(status, StatusCode::OK);
    let page: Vec<serde_json::Value> = serde_json::from_str(&response).unwrap();
    assert_eq!(page.len(), 5);
    assert_eq!(page[0]["name"], "Contact10");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_list_default_limit() {
    let app = common::TestApp::new().await;
    let (_, token) = app.register_and_login().await;

    for i in 0..12 {
        create_contact(
            &app,
            &token,
            &format!("Bulk{}", i),
            &format!("bulk{}@example.com", i),
        )
        .await;
    }

    // No query parameters: skip=0, limit=10
    let (status, response) = app.get_auth("/contacts/", &token).await;
    assert_eq!(status, StatusCode::OK);
    let page: Vec<serde_json::Value> = serde_json::from_str(&response).unwrap();
    assert_eq!(page.len(), 10);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_search_by_name_and_email() {
    let app = common::TestApp::new().await;
    let (_, token) = app.register_and_login().await;

    create_contact(&app, &token, "Grace", "grace@example.com").await;
    create_contact(&app, &token, "Alan", "alan@computing.org").await;
    create_contact(&app, &token, "Edsger", "edsger@example.com").await;

    // Case-insensitive substring match on name
    let (status, response) = app.get_auth("/contacts/?search=gra", &token).await;
    assert_eq!(status, StatusCode::OK);
    let matches: Vec<serde_json::Value> = serde_json::from_str(&response).unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["name"], "Grace");

    // Match on email domain
    let (status, response) = app.get_auth("/contacts/?search=computing", &token).await;
    assert_eq!(status, StatusCode::OK);
    let matches: Vec<serde_json::Value> = serde_json::from_str(&response).unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["name"], "Alan");

    // No match: empty list, not an error
    let (status, response) = app.get_auth("/contacts/?search=nobody", &token).await;
    assert_eq!(status, StatusCode::OK);
    let matches: Vec<serde_json::Value> = serde_json::from_str(&response).unwrap();
    assert!(matches.is_empty());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_search_does_not_cross_owners() {
    let app = common::TestApp::new().await;
    let (_, token_a) = app.register_and_login().await;
    let (_, token_b) = app.register_and_login().await;

    create_contact(&app, &token_a, "Shared Name", "a@example.com").await;
    create_contact(&app, &token_b, "Shared Name", "b@example.com").await;

    let (status, response) = app.get_auth("/contacts/?search=Shared", &token_a).await;
    assert_eq!(status, StatusCode::OK);
    let matches: Vec<serde_json::Value> = serde_json::from_str(&response).unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["email"], "a@example.com");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_update_replaces_all_fields() {
    let app = common::TestApp::new().await;
    let (_, token) = app.register_and_login().await;

    let created = app
        .post_auth(
            "/contacts/",
            &json!({
                "name": "Before",
                "surname": "Update",
                "email": "before@example.com",
                "phone": "+1 555 000 1234",
                "birthday": "1990-04-01",
                "additional_info": "keep in touch"
            })
            .to_string(),
            &token,
        )
        .await;
    assert_eq!(created.0, StatusCode::CREATED);
    let created: serde_json::Value = serde_json::from_str(&created.1).unwrap();
    let id = created["id"].as_i64().unwrap();

    // Full replace: additional_info omitted means it becomes null
    let (status, response) = app
        .put_auth(
            &format!("/contacts/{}", id),
            &contact_body("After", "after@example.com"),
            &token,
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let updated: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(updated["name"], "After");
    assert_eq!(updated["email"], "after@example.com");
    assert!(updated.get("additional_info").is_none() || updated["additional_info"].is_null());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_update_nonexistent_returns_404() {
    let app = common::TestApp::new().await;
    let (_, token) = app.register_and_login().await;

    let existing = create_contact(&app, &token, "Untouched", "untouched@example.com").await;

    let (status, _) = app
        .put_auth(
            "/contacts/999999999",
            &contact_body("Ghost", "ghost@example.com"),
            &token,
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Storage unchanged
    let id = existing["id"].as_i64().unwrap();
    let (status, response) = app.get_auth(&format!("/contacts/{}", id), &token).await;
    assert_eq!(status, StatusCode::OK);
    let contact: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(contact["name"], "Untouched");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_delete_then_get_returns_404() {
    let app = common::TestApp::new().await;
    let (_, token) = app.register_and_login().await;

    let created = create_contact(&app, &token, "Ephemeral", "ephemeral@example.com").await;
    let id = created["id"].as_i64().unwrap();

    // Delete returns the removed contact
    let (status, response) = app.delete_auth(&format!("/contacts/{}", id), &token).await;
    assert_eq!(status, StatusCode::OK);
    let deleted: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(deleted["name"], "Ephemeral");

    // Gone afterwards
    let (status, _) = app.get_auth(&format!("/contacts/{}", id), &token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Deleting again is also 404
    let (status, _) = app.delete_auth(&format!("/contacts/{}", id), &token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_create_contact_invalid_payload() {
    let app = common::TestApp::new().await;
    let (_, token) = app.register_and_login().await;

    let (status, _) = app
        .post_auth(
            "/contacts/",
            &contact_body("Ada", "not-an-email"),
            &token,
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
