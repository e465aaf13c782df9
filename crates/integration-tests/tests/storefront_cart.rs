//! Integration tests for the session cart.
//!
//! Run with: cargo test -p voltcart-integration-tests

use axum::http::StatusCode;

use voltcart_integration_tests::TestApp;

#[tokio::test]
async fn test_add_same_product_twice_is_one_line() {
    let mut app = TestApp::new();

    let first = app.post_form("/cart/add", "product_id=1").await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.header("hx-trigger"), Some("cart-updated"));
    assert!(first.body.contains(">1<"));

    let second = app.post_form("/cart/add", "product_id=1").await;
    assert_eq!(second.status, StatusCode::OK);
    // The badge counts lines, not units.
    assert!(second.body.contains(">1<"));

    let popover = app.get("/cart/popover").await;
    assert_eq!(popover.status, StatusCode::OK);
    assert!(popover.body.contains("2 x Rs. 82,000.00"));
    assert!(popover.body.contains("Rs. 164,000.00"));
    assert!(popover.body.contains("View Cart"));
}

#[tokio::test]
async fn test_badge_counts_distinct_products() {
    let mut app = TestApp::new();

    app.post_form("/cart/add", "product_id=1").await;
    app.post_form("/cart/add", "product_id=5").await;

    let count = app.get("/cart/count").await;
    assert!(count.body.contains(">2<"));
}

#[tokio::test]
async fn test_add_unknown_product_is_not_found() {
    let mut app = TestApp::new();

    let resp = app.post_form("/cart/add", "product_id=404").await;

    assert_eq!(resp.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_to_zero_and_remove() {
    let mut app = TestApp::new();

    app.post_form("/cart/add", "product_id=2").await;
    app.post_form("/cart/add", "product_id=7").await;

    let updated = app.post_form("/cart/update", "product_id=2&quantity=0").await;
    assert_eq!(updated.status, StatusCode::OK);
    assert!(!updated.body.contains("Apple MacBook pro A1989 with Touch Bar"));
    assert!(updated.body.contains("Lenovo X1 Yoga"));

    let removed = app.post_form("/cart/remove", "product_id=7").await;
    assert!(removed.body.contains("Your cart is empty"));
}

#[tokio::test]
async fn test_empty_cart_page() {
    let mut app = TestApp::new();

    let resp = app.get("/cart").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Your cart is empty"));
}
