//! Domain models for storefront.
//!
//! - [`account`] - Customer accounts and password-reset codes
//! - [`session`] - Values stored in the visitor's session

pub mod account;
pub mod session;

pub use account::{Account, PasswordReset};
pub use session::{CurrentUser, PendingReset};
