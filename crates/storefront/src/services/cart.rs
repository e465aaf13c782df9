//! Session-backed cart.
//!
//! Wraps the visitor's [`Cart`] stored under [`keys::CART`]. Mutations load
//! the cart, apply the change, and write it back in the same request.

use tower_sessions::Session;

use voltcart_core::{Cart, Product, ProductId};

use crate::models::session::keys;

/// The cart of the session the request belongs to.
pub struct SessionCart<'a> {
    session: &'a Session,
}

impl<'a> SessionCart<'a> {
    #[must_use]
    pub const fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Load the cart. Missing or unreadable carts load as empty.
    pub async fn load(&self) -> Cart {
        match self.session.get::<Cart>(keys::CART).await {
            Ok(cart) => cart.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read cart from session, starting empty");
                Cart::new()
            }
        }
    }

    async fn store(&self, cart: &Cart) {
        if let Err(e) = self.session.insert(keys::CART, cart).await {
            tracing::error!(error = %e, "Failed to store cart in session");
        }
    }

    /// Add one unit of `product` and return the updated cart.
    ///
    /// Storage failures are logged; the caller always gets the cart it asked for.
    pub async fn add_to_cart(&self, product: &Product) -> Cart {
        let mut cart = self.load().await;
        let quantity = cart.add_product(product);
        tracing::debug!(product_id = %product.id, quantity, "Added to cart");
        self.store(&cart).await;
        cart
    }

    /// Set a line's quantity; zero removes it. Returns the updated cart.
    pub async fn update_quantity(&self, id: ProductId, quantity: u32) -> Cart {
        let mut cart = self.load().await;
        if cart.update_quantity(id, quantity) {
            self.store(&cart).await;
        }
        cart
    }

    /// Remove a line. Returns the updated cart.
    pub async fn remove(&self, id: ProductId) -> Cart {
        let mut cart = self.load().await;
        if cart.remove(id) {
            self.store(&cart).await;
        }
        cart
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use tower_sessions::MemoryStore;
    use voltcart_core::{CurrencyCode, Price};

    use super::*;
    use crate::catalog::Catalog;

    fn session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    #[tokio::test]
    async fn test_add_twice_is_one_line() {
        let session = session();
        let cart = SessionCart::new(&session);
        let catalog = Catalog::builtin();
        let product = catalog.get(ProductId::new(1)).unwrap();

        cart.add_to_cart(product).await;
        let updated = cart.add_to_cart(product).await;

        assert_eq!(updated.line_count(), 1);
        assert_eq!(updated.items()[0].quantity, 2);
        assert_eq!(cart.load().await, updated);
        assert_eq!(
            updated.total_price(),
            Price::from_units(164_000, CurrencyCode::NPR)
        );
    }

    #[tokio::test]
    async fn test_update_and_remove() {
        let session = session();
        let cart = SessionCart::new(&session);
        let catalog = Catalog::builtin();

        cart.add_to_cart(catalog.get(ProductId::new(5)).unwrap()).await;
        cart.add_to_cart(catalog.get(ProductId::new(6)).unwrap()).await;

        let updated = cart.update_quantity(ProductId::new(5), 3).await;
        assert_eq!(updated.total_quantity(), 4);

        let updated = cart.remove(ProductId::new(6)).await;
        assert_eq!(updated.line_count(), 1);

        let updated = cart.update_quantity(ProductId::new(5), 0).await;
        assert!(updated.is_empty());
        assert!(cart.load().await.is_empty());
    }
}
