//! Integration tests for the authentication view.
//!
//! In-process tests cover navigation and validation, which never reach the
//! database. The ignored tests need:
//! - A migrated `PostgreSQL` database (vc-cli migrate)
//! - The storefront running (cargo run -p voltcart-storefront)
//!
//! Run with: cargo test -p voltcart-integration-tests -- --ignored

use std::time::Duration;

use axum::http::StatusCode;
use reqwest::{Client, redirect::Policy};
use uuid::Uuid;

use voltcart_integration_tests::{TestApp, storefront_base_url};

// ============================================================================
// Navigation
// ============================================================================

#[tokio::test]
async fn test_default_step_is_sign_in() {
    let mut app = TestApp::new();

    let resp = app.get("/auth").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("<h1>Sign In</h1>"));
    assert!(resp.body.contains("Forgot password?"));
}

#[tokio::test]
async fn test_switch_to_sign_up_tab() {
    let mut app = TestApp::new();

    let resp = app.post_form("/auth/tab", "tab=sign_up").await;
    assert_eq!(resp.status, StatusCode::SEE_OTHER);
    assert_eq!(resp.header("location"), Some("/auth"));

    let page = app.get("/auth").await;
    assert!(page.body.contains("<h1>Create Account</h1>"));
    assert!(page.body.contains("name=\"confirm_password\""));
}

#[tokio::test]
async fn test_forgot_password_only_from_sign_in() {
    let mut app = TestApp::new();

    app.post_form("/auth/tab", "tab=sign_up").await;
    let refused = app.post_form("/auth/forgot", "").await;
    assert_eq!(refused.status, StatusCode::BAD_REQUEST);

    app.post_form("/auth/tab", "tab=sign_in").await;
    let accepted = app.post_form("/auth/forgot", "").await;
    assert_eq!(accepted.status, StatusCode::SEE_OTHER);

    let page = app.get("/auth").await;
    assert!(page.body.contains("<h1>Reset Password</h1>"));
    assert!(page.body.contains("Back to login"));
}

#[tokio::test]
async fn test_back_to_login_from_reset() {
    let mut app = TestApp::new();

    assert_eq!(
        app.post_form("/auth/back", "").await.status,
        StatusCode::BAD_REQUEST
    );

    app.post_form("/auth/forgot", "").await;
    let back = app.post_form("/auth/back", "").await;
    assert_eq!(back.status, StatusCode::SEE_OTHER);

    let page = app.get("/auth").await;
    assert!(page.body.contains("<h1>Sign In</h1>"));
}

// ============================================================================
// Validation (no provider call)
// ============================================================================

#[tokio::test]
async fn test_sign_in_requires_both_fields() {
    let mut app = TestApp::new();

    let resp = app.post_form("/auth", "email=ram%40example.com").await;

    assert_eq!(resp.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(resp.body.contains("Please fill in all fields"));
    assert!(resp.body.contains("value=\"ram@example.com\""));
}

#[tokio::test]
async fn test_sign_up_password_mismatch() {
    let mut app = TestApp::new();
    app.post_form("/auth/tab", "tab=sign_up").await;

    let resp = app
        .post_form(
            "/auth",
            "name=Ram&email=ram%40example.com&mobile=9800000000&password=secret123&confirm_password=secret124",
        )
        .await;

    assert_eq!(resp.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(resp.body.contains("Passwords do not match"));
    assert!(!resp.body.contains("secret123"));
}

#[tokio::test]
async fn test_sign_up_short_mobile() {
    let mut app = TestApp::new();
    app.post_form("/auth/tab", "tab=sign_up").await;

    let resp = app
        .post_form(
            "/auth",
            "name=Ram&email=ram%40example.com&mobile=98000&password=secret123&confirm_password=secret123",
        )
        .await;

    assert_eq!(resp.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(resp.body.contains("Please enter a valid mobile number"));
}

#[tokio::test]
async fn test_tab_switch_clears_error() {
    let mut app = TestApp::new();

    app.post_form("/auth", "").await;
    app.post_form("/auth/tab", "tab=sign_up").await;

    let page = app.get("/auth").await;
    assert!(!page.body.contains("Please fill in all fields"));
}

// ============================================================================
// Concurrent submissions
// ============================================================================

#[tokio::test]
async fn test_overlapping_submit_is_refused_while_pending() {
    let mut app = TestApp::with_unreachable_database(Duration::from_secs(3));
    // Establish the session cookie
    app.post_form("/auth/tab", "tab=sign_in").await;

    let mut first_tab = app.clone();
    let pending = tokio::spawn(async move {
        first_tab
            .post_form("/auth", "email=ram%40example.com&password=hunter22")
            .await
    });

    tokio::time::sleep(Duration::from_millis(300)).await;
    assert!(!pending.is_finished(), "login should still be waiting on the database");

    let second = app
        .post_form("/auth", "email=ram%40example.com&password=hunter22")
        .await;
    assert_eq!(second.status, StatusCode::CONFLICT);

    let first = pending
        .await
        .unwrap_or_else(|e| panic!("submit task failed: {e}"));
    assert_eq!(first.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(first.body.contains("An error occurred. Please try again."));

    // The finished submission released the form
    let page = app.get("/auth").await;
    assert!(!page.body.contains("Please wait..."));
}

// ============================================================================
// Against a running storefront
// ============================================================================

fn live_client() -> Client {
    Client::builder()
        .cookie_store(true)
        .redirect(Policy::none())
        .build()
        .unwrap_or_else(|e| panic!("Failed to create HTTP client: {e}"))
}

#[tokio::test]
#[ignore = "Requires running storefront and migrated database"]
async fn test_register_then_sign_in() {
    let base_url = storefront_base_url();
    let unique = Uuid::new_v4().simple().to_string();
    let email = format!("test-{unique}@example.com");
    let mobile = format!("98{:08}", Uuid::new_v4().as_u128() % 100_000_000);

    let client = live_client();
    client
        .post(format!("{base_url}/auth/tab"))
        .form(&[("tab", "sign_up")])
        .send()
        .await
        .unwrap_or_else(|e| panic!("tab switch failed: {e}"));

    let registered = client
        .post(format!("{base_url}/auth"))
        .form(&[
            ("name", "Test Customer"),
            ("email", email.as_str()),
            ("mobile", mobile.as_str()),
            ("password", "correct horse"),
            ("confirm_password", "correct horse"),
        ])
        .send()
        .await
        .unwrap_or_else(|e| panic!("register failed: {e}"));
    assert_eq!(registered.status(), reqwest::StatusCode::SEE_OTHER);

    // Fresh visitor signs in with the new account
    let visitor = live_client();
    let wrong = visitor
        .post(format!("{base_url}/auth"))
        .form(&[("email", email.as_str()), ("password", "wrong horse")])
        .send()
        .await
        .unwrap_or_else(|e| panic!("sign in failed: {e}"));
    assert_eq!(wrong.status(), reqwest::StatusCode::UNPROCESSABLE_ENTITY);
    let body = wrong.text().await.unwrap_or_default();
    assert!(body.contains("Invalid email or password"));

    let signed_in = visitor
        .post(format!("{base_url}/auth"))
        .form(&[("email", email.as_str()), ("password", "correct horse")])
        .send()
        .await
        .unwrap_or_else(|e| panic!("sign in failed: {e}"));
    assert_eq!(signed_in.status(), reqwest::StatusCode::SEE_OTHER);

    let home = visitor
        .get(format!("{base_url}/"))
        .send()
        .await
        .unwrap_or_else(|e| panic!("home failed: {e}"));
    let body = home.text().await.unwrap_or_default();
    assert!(body.contains("Test Customer"));
}

#[tokio::test]
#[ignore = "Requires running storefront and migrated database"]
async fn test_reset_request_does_not_reveal_accounts() {
    let base_url = storefront_base_url();
    let client = live_client();

    client
        .post(format!("{base_url}/auth/forgot"))
        .send()
        .await
        .unwrap_or_else(|e| panic!("forgot failed: {e}"));

    let resp = client
        .post(format!("{base_url}/auth"))
        .form(&[("mobile", "9811111111")])
        .send()
        .await
        .unwrap_or_else(|e| panic!("reset request failed: {e}"));
    assert_eq!(resp.status(), reqwest::StatusCode::SEE_OTHER);

    let page = client
        .get(format!("{base_url}/auth"))
        .send()
        .await
        .unwrap_or_else(|e| panic!("auth page failed: {e}"));
    let body = page.text().await.unwrap_or_default();
    assert!(body.contains("If an account exists for this number"));
    assert!(body.contains("<h1>Enter Code</h1>"));
}
