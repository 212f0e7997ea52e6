//! API integration tests
//!
//! These run against a live server and database:
//! `cargo run` in one terminal, then `cargo test -- --ignored`.

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080";

/// Unique suffix so the tests can be re-run against the same database
fn run_id() -> u128 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("clock before epoch")
        .as_nanos()
}

fn librarian_body(email: &str, password: &str, phone: &str) -> Value {
    json!({
        "name": "Test Librarian",
        "password": password,
        "email": email,
        "phonenumber": phone,
        "address": "1 Test Street",
        "role": "user"
    })
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
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
async fn test_create_librarian_rejects_bad_email_domain() {
    let client = Client::new();

    let response = client
        .post(format!("{}/Librarian", BASE_URL))
        .json(&librarian_body("someone@example.org", "secret123", "0123456789"))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Invalid email address");
}

#[tokio::test]
#[ignore]
async fn test_create_librarian_password_boundary() {
    let client = Client::new();

    // Six characters rejected
    let response = client
        .post(format!("{}/Librarian", BASE_URL))
        .json(&librarian_body(
            &format!("short{}@gmail.com", run_id()),
            "sixsix",
            "0123456789",
        ))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    // Seven characters accepted
    let response = client
        .post(format!("{}/Librarian", BASE_URL))
        .json(&librarian_body(
            &format!("seven{}@gmail.com", run_id()),
            "sevense",
            "0123456789",
        ))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
}

#[tokio::test]
#[ignore]
async fn test_create_librarian_rejects_bad_phone() {
    let client = Client::new();

    for phone in ["123456789", "1234567890123", "12345abc90"] {
        let response = client
            .post(format!("{}/Librarian", BASE_URL))
            .json(&librarian_body(
                &format!("phone{}@gmail.com", run_id()),
                "secret123",
                phone,
            ))
            .send()
            .await
            .expect("Failed to send request");

        assert_eq!(response.status(), 400, "phone {:?} should be rejected", phone);
    }
}

#[tokio::test]
#[ignore]
async fn test_duplicate_email_rejected() {
    let client = Client::new();
    let email = format!("dup{}@gmail.com", run_id());

    let response = client
        .post(format!("{}/Librarian", BASE_URL))
        .json(&librarian_body(&email, "secret123", "0123456789"))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let response = client
        .post(format!("{}/Librarian", BASE_URL))
        .json(&librarian_body(&email, "secret123", "0123456789"))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Email already registered");

    // The duplicate check answers before the password check
    let response = client
        .post(format!("{}/Librarian", BASE_URL))
        .json(&librarian_body(&email, "sixsix", "0123456789"))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Email already registered");
}

#[tokio::test]
#[ignore]
async fn test_librarian_roundtrip_and_delete() {
    let client = Client::new();
    let email = format!("round{}@gmail.com", run_id());

    // Create
    let response = client
        .post(format!("{}/Librarian", BASE_URL))
        .json(&librarian_body(&email, "secret123", "0123456789"))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    // Find the created record in the list
    let response = client
        .get(format!("{}/Librarian", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    let librarians: Vec<Value> = response.json().await.expect("Failed to parse response");
    let created = librarians
        .iter()
        .find(|l| l["email"] == email.as_str())
        .expect("Created librarian not in list");
    let id = created["id"].as_i64().expect("No librarian id");

    // Get by id returns identical fields
    let response = client
        .get(format!("{}/Librarian/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["email"], email.as_str());
    assert_eq!(body["name"], "Test Librarian");
    assert_eq!(body["phonenumber"], "0123456789");

    // Delete, then get answers 404
    let response = client
        .delete(format!("{}/Librarian/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    let response = client
        .get(format!("{}/Librarian/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_login() {
    let client = Client::new();
    let email = format!("login{}@gmail.com", run_id());

    let response = client
        .post(format!("{}/Librarian", BASE_URL))
        .json(&librarian_body(&email, "secret123", "0123456789"))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    // Correct credentials
    let response = client
        .post(format!("{}/login", BASE_URL))
        .json(&json!({ "email": email, "password": "secret123" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Login successful");

    // Wrong password
    let response = client
        .post(format!("{}/login", BASE_URL))
        .json(&json!({ "email": email, "password": "wrong-password" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 401);

    // Unknown email
    let response = client
        .post(format!("{}/login", BASE_URL))
        .json(&json!({ "email": format!("nobody{}@gmail.com", run_id()), "password": "secret123" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_duplicate_category_scenario() {
    let client = Client::new();
    let name = format!("Fiction-{}", run_id());
    let body = json!({ "category_name": name, "shelf_no": 3 });

    let response = client
        .post(format!("{}/Category/", BASE_URL))
        .json(&body)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    let response = client
        .post(format!("{}/Category/", BASE_URL))
        .json(&body)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Category name already exists");
}

#[tokio::test]
#[ignore]
async fn test_books_crud_and_category_listing() {
    let client = Client::new();
    let id = run_id();

    // Need a category to attach books to
    let response = client
        .post(format!("{}/Category/", BASE_URL))
        .json(&json!({ "category_name": format!("Systems-{}", id), "shelf_no": 7 }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    let response = client
        .get(format!("{}/Category/", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    let categories: Vec<Value> = response.json().await.expect("Failed to parse response");
    let category_id = categories
        .iter()
        .find(|c| c["category_name"] == format!("Systems-{}", id))
        .and_then(|c| c["category_id"].as_i64())
        .expect("Created category not in list");

    let isbn = format!("978-{}", id);
    let response = client
        .post(format!("{}/Books", BASE_URL))
        .json(&json!({
            "ISBN": isbn,
            "title": "The Mythical Man-Month",
            "author": "Brooks",
            "category_id": category_id
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    // Listing by category includes the new book
    let response = client
        .get(format!("{}/Books/Category/{}", BASE_URL, category_id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    let books: Vec<Value> = response.json().await.expect("Failed to parse response");
    assert!(books.iter().any(|b| b["ISBN"] == isbn.as_str()));

    // Update only touches title and author
    let response = client
        .put(format!("{}/Books/{}", BASE_URL, isbn))
        .json(&json!({ "title": "Renamed", "author": "Someone Else" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    let response = client
        .get(format!("{}/Books/{}", BASE_URL, isbn))
        .send()
        .await
        .expect("Failed to send request");
    let book: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(book["title"], "Renamed");
    assert_eq!(book["category_id"].as_i64(), Some(category_id));

    // Delete, then get answers 404
    let response = client
        .delete(format!("{}/Books/{}", BASE_URL, isbn))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    let response = client
        .get(format!("{}/Books/{}", BASE_URL, isbn))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_empty_category_listing_is_404() {
    let client = Client::new();

    let response = client
        .get(format!("{}/Books/Category/999999999", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_log_operation_return_date() {
    let client = Client::new();
    let email = format!("logop{}@gmail.com", run_id());

    // A log entry references a librarian
    let response = client
        .post(format!("{}/Librarian", BASE_URL))
        .json(&librarian_body(&email, "secret123", "0123456789"))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let response = client
        .get(format!("{}/Librarian", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    let librarians: Vec<Value> = response.json().await.expect("Failed to parse response");
    let librarian_id = librarians
        .iter()
        .find(|l| l["email"] == email.as_str())
        .and_then(|l| l["id"].as_i64())
        .expect("Created librarian not in list");

    let response = client
        .post(format!("{}/Log_Operations", BASE_URL))
        .json(&json!({
            "id": librarian_id,
            "name": "Test Borrower",
            "title": "The Mythical Man-Month",
            "borrow_date": "2024-03-01"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    // return_date is borrow_date + 15 days exactly
    let response = client
        .get(format!("{}/Log_Operations", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    let logs: Vec<Value> = response.json().await.expect("Failed to parse response");
    let log = logs
        .iter()
        .filter(|l| l["id"].as_i64() == Some(librarian_id))
        .last()
        .expect("Created log entry not in list");
    assert_eq!(log["borrow_date"], "2024-03-01");
    assert_eq!(log["return_date"], "2024-03-16");

    let log_id = log["log_id"].as_i64().expect("No log_id");

    // Update only touches name and title
    let response = client
        .put(format!("{}/Log_Operations/{}", BASE_URL, log_id))
        .json(&json!({ "name": "Renamed Borrower", "title": "Another Title" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    let response = client
        .get(format!("{}/Log_Operations/{}", BASE_URL, log_id))
        .send()
        .await
        .expect("Failed to send request");
    let log: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(log["name"], "Renamed Borrower");
    assert_eq!(log["return_date"], "2024-03-16");

    // Delete, then get answers 404
    let response = client
        .delete(format!("{}/Log_Operations/{}", BASE_URL, log_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 200);

    let response = client
        .get(format!("{}/Log_Operations/{}", BASE_URL, log_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}
