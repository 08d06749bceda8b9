//! API integration tests
//!
//! These run against a live server with its identity provider configured.
//! Provide tokens via `ADMIN_TOKEN` and `USER_TOKEN` environment variables,
//! then run with: cargo test -- --ignored

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080";

fn admin_token() -> String {
    std::env::var("ADMIN_TOKEN").expect("ADMIN_TOKEN must be set for integration tests")
}

fn user_token() -> String {
    std::env::var("USER_TOKEN").expect("USER_TOKEN must be set for integration tests")
}

/// Create a book as admin and return its parsed response body
async fn create_test_book(client: &Client, title: &str) -> Value {
    let response = client
        .post(format!("{}/book", BASE_URL))
        .header("Authorization", format!("Bearer {}", admin_token()))
        .json(&json!({
            "title": title,
            "price": 29.99,
            "authors": [{"id": uuid::Uuid::new_v4(), "name": "John Doe"}],
            "genre": {"id": uuid::Uuid::new_v4(), "name": "Fiction"}
        }))
        .send()
        .await
        .expect("Failed to send create request");

    assert!(response.status().is_success());
    response.json().await.expect("Failed to parse create response")
}

#[tokio::test]
#[ignore]
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_readiness_reports_database_up() {
    let client = Client::new();

    let response = client
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "ready");
    assert_eq!(body["database"], "up");
}

#[tokio::test]
#[ignore]
async fn test_unauthenticated_request_is_401() {
    let client = Client::new();

    let response = client
        .get(format!("{}/book", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_list_books_paged() {
    let client = Client::new();

    let response = client
        .get(format!("{}/book?page=0&size=5", BASE_URL))
        .header("Authorization", format!("Bearer {}", user_token()))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"].is_array());
    assert!(body["totalElements"].is_number());
    assert!(body["totalPages"].is_number());
    assert!(body["hasNext"].is_boolean());
}

#[tokio::test]
#[ignore]
async fn test_get_unknown_book_is_404_with_id_in_message() {
    let client = Client::new();
    let id = uuid::Uuid::new_v4();

    let response = client
        .get(format!("{}/book/{}", BASE_URL, id))
        .header("Authorization", format!("Bearer {}", user_token()))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], 404);
    assert!(body["message"]
        .as_str()
        .expect("message should be a string")
        .contains(&id.to_string()));
}

#[tokio::test]
#[ignore]
async fn test_search_with_short_criteria_is_400() {
    let client = Client::new();

    let response = client
        .get(format!("{}/book/search?criteria=ab", BASE_URL))
        .header("Authorization", format!("Bearer {}", user_token()))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], 400);
}

#[tokio::test]
#[ignore]
async fn test_search_matches_case_insensitively() {
    let client = Client::new();
    create_test_book(&client, "The Search Fixture").await;

    let response = client
        .get(format!("{}/book/search?criteria=search fix", BASE_URL))
        .header("Authorization", format!("Bearer {}", user_token()))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let titles: Vec<&str> = body["data"]
        .as_array()
        .expect("data should be an array")
        .iter()
        .filter_map(|b| b["title"].as_str())
        .collect();
    assert!(titles.contains(&"The Search Fixture"));
}

#[tokio::test]
#[ignore]
async fn test_create_book_with_invalid_payload_is_400() {
    let client = Client::new();

    let response = client
        .post(format!("{}/book", BASE_URL))
        .header("Authorization", format!("Bearer {}", admin_token()))
        .json(&json!({
            "title": "ab",
            "price": 29.999,
            "authors": [{"id": uuid::Uuid::new_v4(), "name": "John Doe"}],
            "genre": {"id": uuid::Uuid::new_v4(), "name": "Fiction"}
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_update_then_delete_book_as_admin() {
    let client = Client::new();
    let created = create_test_book(&client, "Book To Update").await;
    let id = created["id"].as_str().expect("No book id");

    let response = client
        .put(format!("{}/book/{}", BASE_URL, id))
        .header("Authorization", format!("Bearer {}", admin_token()))
        .json(&json!({
            "title": "Book Updated",
            "price": 12.50,
            "authors": created["authors"],
            "genre": created["genre"]
        }))
        .send()
        .await
        .expect("Failed to send update request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["title"], "Book Updated");
    assert_eq!(body["id"], created["id"]);

    let response = client
        .delete(format!("{}/book/{}", BASE_URL, id))
        .header("Authorization", format!("Bearer {}", admin_token()))
        .send()
        .await
        .expect("Failed to send delete request");

    assert!(response.status().is_success());

    // Gone afterwards
    let response = client
        .get(format!("{}/book/{}", BASE_URL, id))
        .header("Authorization", format!("Bearer {}", admin_token()))
        .send()
        .await
        .expect("Failed to send get request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_list_authors_and_genres() {
    let client = Client::new();

    for path in ["author", "genres"] {
        let response = client
            .get(format!("{}/{}", BASE_URL, path))
            .header("Authorization", format!("Bearer {}", user_token()))
            .send()
            .await
            .expect("Failed to send request");

        assert!(response.status().is_success());

        let body: Value = response.json().await.expect("Failed to parse response");
        assert!(body["data"].is_array());
    }
}

/// Admin creates a book, a user can read it but not delete it.
#[tokio::test]
#[ignore]
async fn test_user_can_read_but_not_write() {
    let client = Client::new();
    let created = create_test_book(&client, "The Great Book").await;
    assert_eq!(created["title"], "The Great Book");
    let id = created["id"].as_str().expect("No book id");

    // USER reads it back
    let response = client
        .get(format!("{}/book/{}", BASE_URL, id))
        .header("Authorization", format!("Bearer {}", user_token()))
        .send()
        .await
        .expect("Failed to send get request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["title"], created["title"]);
    assert_eq!(body["id"], created["id"]);

    // USER may not delete
    let response = client
        .delete(format!("{}/book/{}", BASE_URL, id))
        .header("Authorization", format!("Bearer {}", user_token()))
        .send()
        .await
        .expect("Failed to send delete request");

    assert_eq!(response.status(), 403);

    // Still retrievable afterwards
    let response = client
        .get(format!("{}/book/{}", BASE_URL, id))
        .header("Authorization", format!("Bearer {}", user_token()))
        .send()
        .await
        .expect("Failed to send get request");

    assert!(response.status().is_success());

    // Cleanup as admin
    let _ = client
        .delete(format!("{}/book/{}", BASE_URL, id))
        .header("Authorization", format!("Bearer {}", admin_token()))
        .send()
        .await;
}
