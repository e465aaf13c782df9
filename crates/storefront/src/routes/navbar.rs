//! Navigation bar shared by every full page.

use tower_sessions::Session;

use voltcart_core::Category;

use crate::middleware::OptionalUser;
use crate::models::CurrentUser;
use crate::services::SessionCart;

/// Navigation bar display data for templates.
#[derive(Debug, Clone)]
pub struct NavbarView {
    pub user: Option<CurrentUser>,
    /// Number of distinct cart lines.
    pub cart_count: usize,
    /// Current search text, echoed into the search box.
    pub search: String,
    pub categories: [Category; 3],
}

impl NavbarView {
    /// Build the navbar for the visitor's session.
    pub async fn load(session: &Session, user: OptionalUser, search: &str) -> Self {
        let cart = SessionCart::new(session).load().await;
        Self {
            user: user.0,
            cart_count: cart.line_count(),
            search: search.to_owned(),
            categories: Category::ALL,
        }
    }
}

/// Where a navbar search goes: the listing filtered by the trimmed-non-empty
/// text, or the plain listing for blank input.
#[must_use]
pub fn search_location(text: &str) -> String {
    if text.trim().is_empty() {
        "/products".to_string()
    } else {
        format!("/products?search={}", urlencoding::encode(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_location_encodes_text() {
        assert_eq!(
            search_location("MacBook Pro"),
            "/products?search=MacBook%20Pro"
        );
        assert_eq!(
            search_location("M1 (2021)"),
            "/products?search=M1%20%282021%29"
        );
    }

    #[test]
    fn test_blank_search_goes_to_listing() {
        assert_eq!(search_location(""), "/products");
        assert_eq!(search_location("   "), "/products");
    }
}
