//! Shopping cart contents.
//!
//! The cart is a plain value: handlers load it from the visitor's session,
//! mutate it, and store it back. Totals are always derived from the lines.

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::{CurrencyCode, Price};
use super::product::Product;

/// One product entry in the cart with its aggregated quantity.
///
/// Invariant: `quantity >= 1` for every line held by a [`Cart`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub id: ProductId,
    pub name: String,
    /// Unit price at the time the product was added.
    pub price: Price,
    pub quantity: u32,
}

impl CartLineItem {
    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

/// Ordered cart lines (insertion order).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add one unit of a product.
    ///
    /// Increments the existing line for the same product id, or appends a
    /// new line with quantity 1. Returns the line's new quantity.
    pub fn add_product(&mut self, product: &Product) -> u32 {
        self.add(product.id, &product.name, product.price)
    }

    /// Add one unit of an item described by id, name and unit price.
    pub fn add(&mut self, id: ProductId, name: &str, price: Price) -> u32 {
        if let Some(line) = self.items.iter_mut().find(|line| line.id == id) {
            line.quantity = line.quantity.saturating_add(1);
            return line.quantity;
        }

        self.items.push(CartLineItem {
            id,
            name: name.to_owned(),
            price,
            quantity: 1,
        });
        1
    }

    /// Set the quantity of a line. A quantity of zero removes the line.
    ///
    /// Returns `false` if the product is not in the cart.
    pub fn update_quantity(&mut self, id: ProductId, quantity: u32) -> bool {
        if quantity == 0 {
            return self.remove(id);
        }

        match self.items.iter_mut().find(|line| line.id == id) {
            Some(line) => {
                line.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Remove a line. Returns `false` if the product is not in the cart.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|line| line.id != id);
        self.items.len() != before
    }

    /// Cart lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Sum of `price * quantity` over all lines.
    ///
    /// An empty cart totals zero in the storefront's default currency.
    #[must_use]
    pub fn total_price(&self) -> Price {
        let currency = self
            .items
            .first()
            .map_or_else(CurrencyCode::default, |line| line.price.currency_code);

        self.items
            .iter()
            .fold(Price::zero(currency), |total, line| total.plus(line.line_total()))
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of all quantities.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.items
            .iter()
            .fold(0_u32, |sum, line| sum.saturating_add(line.quantity))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::types::product::Category;

    fn product(id: i32, name: &str, price: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_owned(),
            brand: "Dell".to_owned(),
            model: "5420".to_owned(),
            description: String::new(),
            price: Price::from_units(price, CurrencyCode::NPR),
            category: Category::Laptops,
            condition: "new".to_owned(),
            image: String::new(),
            rating: 4.9,
            specs: Vec::new(),
        }
    }

    #[test]
    fn test_same_product_twice_is_one_line() {
        let mut cart = Cart::new();
        let latitude = product(5, "Dell latitude 5420", 21_500);

        assert_eq!(cart.add_product(&latitude), 1);
        assert_eq!(cart.add_product(&latitude), 2);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.items().first().unwrap().quantity, 2);
    }

    #[test]
    fn test_total_is_sum_of_lines() {
        let mut cart = Cart::new();
        cart.add_product(&product(5, "Dell latitude 5420", 21_500));
        cart.add_product(&product(5, "Dell latitude 5420", 21_500));
        cart.add_product(&product(6, "Lenovo L460", 11_500));

        let expected: Decimal = cart
            .items()
            .iter()
            .map(|line| line.price.amount * Decimal::from(line.quantity))
            .sum();
        assert_eq!(cart.total_price().amount, expected);
        assert_eq!(cart.total_price().amount, Decimal::from(54_500));
        assert_eq!(cart.total_quantity(), 3);
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let mut cart = Cart::new();
        cart.add_product(&product(9, "Dell Latitude 3420", 18_000));
        cart.add_product(&product(1, "Apple MacBook Air M4 14inch", 82_000));
        cart.add_product(&product(9, "Dell Latitude 3420", 18_000));

        let ids: Vec<i32> = cart.items().iter().map(|l| l.id.as_i32()).collect();
        assert_eq!(ids, vec![9, 1]);
    }

    #[test]
    fn test_update_quantity_zero_removes() {
        let mut cart = Cart::new();
        cart.add_product(&product(7, "Lenovo X1 Yoga", 20_000));

        assert!(cart.update_quantity(ProductId::new(7), 3));
        assert_eq!(cart.total_quantity(), 3);

        assert!(cart.update_quantity(ProductId::new(7), 0));
        assert!(cart.is_empty());
        assert!(!cart.update_quantity(ProductId::new(7), 2));
    }

    #[test]
    fn test_remove() {
        let mut cart = Cart::new();
        cart.add_product(&product(10, "HP EliteBook 440 G8", 18_000));

        assert!(!cart.remove(ProductId::new(11)));
        assert!(cart.remove(ProductId::new(10)));
        assert_eq!(cart.total_price(), Price::zero(CurrencyCode::NPR));
    }

    #[test]
    fn test_session_payload_roundtrip() {
        let mut cart = Cart::new();
        cart.add_product(&product(2, "Apple MacBook pro A1989 with Touch Bar", 21_500));

        let json = serde_json::to_string(&cart).unwrap();
        let restored: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, cart);
    }
}
