//! Business logic services for storefront.
//!
//! # Services
//!
//! - `auth` - Account sign-in, registration, and SMS password resets
//! - `cart` - Session-backed shopping cart
//! - `sms` - SMS gateway client for reset codes

pub mod auth;
pub mod cart;
pub mod sms;

pub use auth::{AccountAuth, AuthError, SessionProvider};
pub use cart::SessionCart;
pub use sms::{SmsClient, SmsError};
