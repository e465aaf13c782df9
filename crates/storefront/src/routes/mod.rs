//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                           - Catalog (all products)
//! GET  /health                     - Health check
//! GET  /health/ready               - Readiness check (database)
//! GET  /search                     - Navbar search (redirects to the catalog)
//!
//! # Products
//! GET  /products                   - Product listing (?search=&condition=)
//! GET  /products/suggest           - Search suggestions fragment (HTMX)
//! GET  /products/details/{id}      - Product detail dialog fragment (HTMX)
//! GET  /products/{category}        - Category listing
//!
//! # Cart (HTMX fragments)
//! GET  /cart                       - Cart page
//! GET  /cart/popover               - Cart summary popover (fragment)
//! GET  /cart/count                 - Cart count badge (fragment)
//! POST /cart/add                   - Add to cart (returns badge, triggers cart-updated)
//! POST /cart/update                - Update quantity (returns cart_items fragment)
//! POST /cart/remove                - Remove item (returns cart_items fragment)
//!
//! # Auth (form posts are rate limited)
//! GET  /auth                       - Authentication page at the current step
//! POST /auth                       - Submit the current step
//! POST /auth/tab                   - Switch between sign in and sign up
//! POST /auth/forgot                - Start the password reset
//! POST /auth/back                  - Back to sign in
//! POST /auth/logout                - Logout action
//! ```

pub mod auth;
pub mod cart;
pub mod navbar;
pub mod products;
pub mod search;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use tower_http::{
    services::ServeDir,
    trace::{DefaultOnResponse, OnResponse, TraceLayer},
};
use tower_sessions::{SessionManagerLayer, SessionStore};
use tracing::Span;

use crate::middleware::{auth_rate_limiter, request_id_middleware};
use crate::state::AppState;

/// Directory static assets are served from, relative to the workspace root.
pub const STATIC_DIR: &str = "crates/storefront/static";

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/suggest", get(products::suggest))
        .route("/details/{id}", get(products::details))
        .route("/{category}", get(products::category))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/popover", get(cart::popover))
        .route("/count", get(cart::count))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    let limiter = auth_rate_limiter();

    Router::new()
        .route(
            "/",
            get(auth::page).merge(post(auth::submit).layer(limiter.clone())),
        )
        .route("/tab", post(auth::tab).layer(limiter.clone()))
        .route("/forgot", post(auth::forgot).layer(limiter.clone()))
        .route("/back", post(auth::back).layer(limiter))
        .route("/logout", post(auth::logout))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Catalog is the default view
        .route("/", get(products::index))
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .route("/search", get(search::search))
        .nest("/products", product_routes())
        .nest("/cart", cart_routes())
        .nest("/auth", auth_routes())
}

/// Build the full application: routes, static files and the middleware stack.
///
/// The session store is a parameter so tests can run on an in-memory store.
pub fn app<S>(state: AppState, session_layer: SessionManagerLayer<S>) -> Router
where
    S: SessionStore + Clone,
{
    routes()
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .layer(session_layer)
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction())
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies database connectivity before returning OK.
/// Returns 503 Service Unavailable if the database is not reachable.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match sqlx::query("SELECT 1").fetch_one(state.pool()).await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
