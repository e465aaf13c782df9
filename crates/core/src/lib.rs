//! VoltCart Core - Shared domain types.
//!
//! This crate provides the types shared by every VoltCart component:
//! - `storefront` - Public-facing catalog, cart and account pages
//! - `cli` - Command-line tools for migrations
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no database
//! access, no HTTP clients. Cart arithmetic and contact validation live here
//! so they can be tested without a running server.
//!
//! # Modules
//!
//! - [`types`] - IDs, prices, contact details, products, cart and operation outcomes

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
