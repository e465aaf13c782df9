//! Product route handlers.
//!
//! The listing page renders the full grid; the suggestion list and the
//! detail dialog are HTMX fragments.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use voltcart_core::{Category, Product, ProductId, ProductSpec};

use super::navbar::NavbarView;
use crate::catalog::{CatalogQuery, ConditionFilter, EMPTY_MESSAGE, Highlight, Suggestion};
use crate::error::AppError;
use crate::filters;
use crate::middleware::OptionalUser;
use crate::state::AppState;

/// Product card display data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub id: i32,
    pub name: String,
    pub brand: String,
    pub model: String,
    pub description: String,
    pub price: String,
    pub image: String,
    pub rating: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i32(),
            name: product.name.clone(),
            brand: product.brand.clone(),
            model: product.model.clone(),
            description: product.description.clone(),
            price: product.price.display(),
            image: product.image.clone(),
            rating: format!("{:.1}", product.rating),
        }
    }
}

/// Suggestion display data for templates.
#[derive(Clone)]
pub struct SuggestionView {
    pub name: String,
    pub caption: String,
    pub highlight: Highlight,
}

impl From<Suggestion<'_>> for SuggestionView {
    fn from(suggestion: Suggestion<'_>) -> Self {
        Self {
            name: suggestion.product.name.clone(),
            caption: format!("{} {}", suggestion.product.brand, suggestion.product.model),
            highlight: suggestion.highlight,
        }
    }
}

/// Listing query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    #[serde(default)]
    pub search: String,
    pub condition: Option<String>,
}

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub nav: NavbarView,
    pub heading: String,
    /// Path the filter form submits to.
    pub action: String,
    pub products: Vec<ProductView>,
    pub search: String,
    pub condition: ConditionFilter,
    pub conditions: [ConditionFilter; 3],
    pub empty_message: &'static str,
}

/// Suggestion list fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/search_suggestions.html")]
pub struct SuggestionsTemplate {
    pub suggestions: Vec<SuggestionView>,
}

/// Product detail dialog fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/product_details.html")]
pub struct ProductDetailsTemplate {
    pub product: ProductView,
    pub specs: Vec<ProductSpec>,
}

async fn listing(
    state: &AppState,
    session: &Session,
    user: OptionalUser,
    category: Option<String>,
    query: ListingQuery,
) -> ProductsIndexTemplate {
    let condition = query
        .condition
        .as_deref()
        .map_or_else(ConditionFilter::default, ConditionFilter::parse);

    let (heading, action) = match category.as_deref() {
        None => ("All Products".to_string(), "/products".to_string()),
        Some(slug) => (
            Category::parse(slug).map_or_else(|| slug.to_string(), |c| c.title().to_string()),
            format!("/products/{}", urlencoding::encode(slug)),
        ),
    };

    let catalog_query = CatalogQuery {
        category,
        search: query.search,
        condition,
    };
    let products = state
        .catalog()
        .query(&catalog_query)
        .into_iter()
        .map(ProductView::from)
        .collect();

    ProductsIndexTemplate {
        nav: NavbarView::load(session, user, &catalog_query.search).await,
        heading,
        action,
        products,
        search: catalog_query.search,
        condition,
        conditions: ConditionFilter::ALL,
        empty_message: EMPTY_MESSAGE,
    }
}

/// Display every product.
#[instrument(skip(state, session, user))]
pub async fn index(
    State(state): State<AppState>,
    session: Session,
    user: OptionalUser,
    Query(query): Query<ListingQuery>,
) -> impl IntoResponse {
    listing(&state, &session, user, None, query).await
}

/// Display one category. Unknown categories list nothing.
#[instrument(skip(state, session, user))]
pub async fn category(
    State(state): State<AppState>,
    session: Session,
    user: OptionalUser,
    Path(category): Path<String>,
    Query(query): Query<ListingQuery>,
) -> impl IntoResponse {
    listing(&state, &session, user, Some(category), query).await
}

/// Suggestion query parameters. The navbar search box sends its text as `q`.
#[derive(Debug, Deserialize)]
pub struct SuggestQuery {
    #[serde(default, alias = "q")]
    pub search: String,
}

/// Search suggestions as the customer types (HTMX).
#[instrument(skip(state))]
pub async fn suggest(
    State(state): State<AppState>,
    Query(query): Query<SuggestQuery>,
) -> impl IntoResponse {
    SuggestionsTemplate {
        suggestions: state
            .catalog()
            .suggestions(&query.search)
            .into_iter()
            .map(SuggestionView::from)
            .collect(),
    }
}

/// Product detail dialog (HTMX).
///
/// # Errors
///
/// Returns `AppError::NotFound` for unknown or malformed ids.
#[instrument(skip(state))]
pub async fn details(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ProductDetailsTemplate, AppError> {
    let product = id
        .parse::<ProductId>()
        .ok()
        .and_then(|id| state.catalog().get(id))
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    Ok(ProductDetailsTemplate {
        product: ProductView::from(product),
        specs: product.specs.clone(),
    })
}
