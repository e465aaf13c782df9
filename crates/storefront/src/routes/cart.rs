//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! The cart itself lives in the visitor's session.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use voltcart_core::{Cart, CartLineItem, ProductId};

use super::navbar::NavbarView;
use crate::error::{AppError, add_breadcrumb};
use crate::filters;
use crate::middleware::OptionalUser;
use crate::services::SessionCart;
use crate::state::AppState;

/// Event the navbar badge and popover listen for.
const CART_UPDATED: (&str, &str) = ("HX-Trigger", "cart-updated");

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartLineView {
    pub id: i32,
    pub name: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
}

impl From<&CartLineItem> for CartLineView {
    fn from(line: &CartLineItem) -> Self {
        Self {
            id: line.id.as_i32(),
            name: line.name.clone(),
            quantity: line.quantity,
            price: line.price.display(),
            line_price: line.line_total().display(),
        }
    }
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartLineView>,
    pub total: String,
    pub item_count: u32,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.items().iter().map(CartLineView::from).collect(),
            total: cart.total_price().display(),
            item_count: cart.total_quantity(),
        }
    }
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: ProductId,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub nav: NavbarView,
    pub cart: CartView,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: usize,
}

/// Cart summary popover fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_popover.html")]
pub struct CartPopoverTemplate {
    pub cart: CartView,
}

/// Display cart page.
#[instrument(skip(session, user))]
pub async fn show(session: Session, user: OptionalUser) -> impl IntoResponse {
    let cart = SessionCart::new(&session).load().await;

    CartShowTemplate {
        nav: NavbarView::load(&session, user, "").await,
        cart: CartView::from(&cart),
    }
}

/// Add one unit of a product to the cart (HTMX).
///
/// Returns the updated badge and triggers `cart-updated` for the popover.
///
/// # Errors
///
/// Returns `AppError::NotFound` if the product id is malformed or unknown.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<Response, AppError> {
    let product = form
        .product_id
        .parse::<ProductId>()
        .ok()
        .and_then(|id| state.catalog().get(id))
        .ok_or_else(|| AppError::NotFound(format!("product {}", form.product_id)))?;

    let cart = SessionCart::new(&session).add_to_cart(product).await;

    let product_id = product.id.to_string();
    add_breadcrumb("cart", "Added to cart", Some(&[("product_id", product_id.as_str())]));

    Ok((
        AppendHeaders([CART_UPDATED]),
        CartCountTemplate {
            count: cart.line_count(),
        },
    )
        .into_response())
}

/// Update a line's quantity (HTMX). Zero removes the line.
#[instrument(skip(session))]
pub async fn update(session: Session, Form(form): Form<UpdateCartForm>) -> impl IntoResponse {
    let cart = SessionCart::new(&session)
        .update_quantity(form.product_id, form.quantity)
        .await;

    (
        AppendHeaders([CART_UPDATED]),
        CartItemsTemplate {
            cart: CartView::from(&cart),
        },
    )
}

/// Remove a line from the cart (HTMX).
#[instrument(skip(session))]
pub async fn remove(session: Session, Form(form): Form<RemoveFromCartForm>) -> impl IntoResponse {
    let cart = SessionCart::new(&session).remove(form.product_id).await;

    (
        AppendHeaders([CART_UPDATED]),
        CartItemsTemplate {
            cart: CartView::from(&cart),
        },
    )
}

/// Get cart count badge (HTMX).
#[instrument(skip(session))]
pub async fn count(session: Session) -> impl IntoResponse {
    let cart = SessionCart::new(&session).load().await;

    CartCountTemplate {
        count: cart.line_count(),
    }
}

/// Get cart summary popover (HTMX).
#[instrument(skip(session))]
pub async fn popover(session: Session) -> impl IntoResponse {
    let cart = SessionCart::new(&session).load().await;

    CartPopoverTemplate {
        cart: CartView::from(&cart),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use voltcart_core::{CurrencyCode, Price};

    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_cart_view_totals() {
        let catalog = Catalog::builtin();
        let mut cart = Cart::new();
        let product = catalog.get(ProductId::new(1)).unwrap();
        cart.add_product(product);
        cart.add_product(product);

        let view = CartView::from(&cart);

        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].quantity, 2);
        assert_eq!(view.item_count, 2);
        assert_eq!(
            view.total,
            Price::from_units(164_000, CurrencyCode::NPR).display()
        );
        assert_eq!(view.items[0].line_price, view.total);
    }

    #[test]
    fn test_empty_cart_view() {
        let view = CartView::from(&Cart::new());
        assert!(view.items.is_empty());
        assert_eq!(view.item_count, 0);
    }
}
