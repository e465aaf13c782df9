//! Core types for VoltCart.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod contact;
pub mod id;
pub mod outcome;
pub mod price;
pub mod product;

pub use cart::{Cart, CartLineItem};
pub use contact::{EmailAddress, EmailError, MobileError, MobileNumber};
pub use id::*;
pub use outcome::Outcome;
pub use price::{CurrencyCode, Price};
pub use product::{Category, Product, ProductSpec};
