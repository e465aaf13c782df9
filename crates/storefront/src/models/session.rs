//! Session-related types.
//!
//! Types stored in the session for authentication state.

use serde::{Deserialize, Serialize};

use voltcart_core::{AccountId, MobileNumber};

/// Session-stored user identity.
///
/// Minimal data stored in the session to identify the logged-in customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Account database ID.
    pub id: AccountId,
    /// Display name shown in the navigation bar.
    pub name: String,
    /// Sign-in email address.
    pub email: String,
}

/// Progress of a password reset started from this session.
///
/// `account_id` is `None` when the number matched no account; the flow still
/// advances so the response does not reveal which numbers are registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingReset {
    pub mobile: MobileNumber,
    pub account_id: Option<AccountId>,
    /// Set once the code has been verified.
    pub verified: bool,
}

/// Session keys.
pub mod keys {
    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "current_user";

    /// Key for the shopping cart.
    pub const CART: &str = "cart";

    /// Key for the authentication view state.
    pub const AUTH_FLOW: &str = "auth_flow";

    /// Key for an in-progress password reset.
    pub const PENDING_RESET: &str = "pending_reset";
}
