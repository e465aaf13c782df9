//! Navbar search submission.

use axum::{extract::Query, response::Redirect};
use serde::Deserialize;
use tracing::instrument;

use super::navbar::search_location;

/// Search form query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// Redirect a navbar search to the product listing.
#[instrument(skip_all, fields(q = %query.q))]
pub async fn search(Query(query): Query<SearchQuery>) -> Redirect {
    Redirect::to(&search_location(&query.q))
}
