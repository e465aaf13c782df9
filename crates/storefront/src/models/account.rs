//! Account domain types.
//!
//! These types represent validated domain objects separate from database row types.

use chrono::{DateTime, Utc};

use voltcart_core::{AccountId, EmailAddress, MobileNumber};

/// A customer account (domain type).
#[derive(Debug, Clone)]
pub struct Account {
    /// Unique account ID.
    pub id: AccountId,
    /// Display name given at registration.
    pub name: String,
    /// Sign-in email address.
    pub email: EmailAddress,
    /// Mobile number used for password resets.
    pub mobile: MobileNumber,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

/// An issued password-reset code (domain type).
///
/// Only the Argon2 hash of the code is kept.
#[derive(Debug, Clone)]
pub struct PasswordReset {
    pub account_id: AccountId,
    pub code_hash: String,
    /// Wrong guesses made against this code so far.
    pub attempts: i32,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl PasswordReset {
    /// Whether the code is past its expiry at `now`.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Whether the code has used up its allowed guesses.
    #[must_use]
    pub const fn is_locked(&self, max_attempts: i32) -> bool {
        self.attempts >= max_attempts
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn reset(attempts: i32, expires_at: DateTime<Utc>) -> PasswordReset {
        PasswordReset {
            account_id: AccountId::new(1),
            code_hash: String::new(),
            attempts,
            expires_at,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_is_expired() {
        let now = Utc::now();
        assert!(!reset(0, now + Duration::minutes(10)).is_expired(now));
        assert!(reset(0, now).is_expired(now));
        assert!(reset(0, now - Duration::seconds(1)).is_expired(now));
    }

    #[test]
    fn test_is_locked() {
        let future = Utc::now() + Duration::minutes(10);
        assert!(!reset(4, future).is_locked(5));
        assert!(reset(5, future).is_locked(5));
    }
}
