//! Authentication error types.

use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::sms::SmsError;

/// Errors that can occur during authentication operations.
///
/// Most variants are expected customer mistakes and are turned into a failed
/// [`Outcome`](voltcart_core::Outcome) with [`AuthError::customer_message`].
/// The rest are faults and propagate as errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] voltcart_core::EmailError),

    /// Invalid mobile number format.
    #[error("invalid mobile number: {0}")]
    InvalidMobile(#[from] voltcart_core::MobileError),

    /// Registration without a name.
    #[error("name is required")]
    MissingName,

    /// Invalid credentials (wrong password or unknown email).
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Email or mobile already registered.
    #[error("user already exists")]
    UserAlreadyExists,

    /// Password too weak or invalid.
    #[error("password validation failed: {0}")]
    WeakPassword(String),

    /// No reset has been requested from this session.
    #[error("no password reset in progress")]
    NoPendingReset,

    /// The reset code was not verified before setting a new password.
    #[error("reset code not verified")]
    ResetNotVerified,

    /// The reset code is past its expiry.
    #[error("reset code expired")]
    CodeExpired,

    /// The reset code has used up its allowed guesses.
    #[error("too many attempts")]
    TooManyAttempts,

    /// The reset code does not match.
    #[error("invalid reset code")]
    InvalidCode,

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),

    /// Session store error.
    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// SMS delivery error.
    #[error("sms error: {0}")]
    Sms(#[from] SmsError),

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,
}

impl AuthError {
    /// The message to show the customer, or `None` for faults that must not
    /// be described to them.
    #[must_use]
    pub fn customer_message(&self) -> Option<String> {
        let message = match self {
            Self::InvalidEmail(_) => "Please enter a valid email address",
            Self::InvalidMobile(_) => "Please enter a valid mobile number",
            Self::MissingName => "Please enter your name",
            Self::InvalidCredentials => "Invalid email or password",
            Self::UserAlreadyExists => "An account with this email or mobile number already exists",
            Self::WeakPassword(msg) => return Some(msg.clone()),
            Self::NoPendingReset => "Your reset request has expired. Please start again.",
            Self::ResetNotVerified => "Please verify your code first",
            Self::CodeExpired => "This code has expired. Please request a new one.",
            Self::TooManyAttempts => "Too many incorrect attempts. Please request a new code.",
            Self::InvalidCode => "Invalid verification code",
            Self::Repository(_) | Self::Session(_) | Self::Sms(_) | Self::PasswordHash => {
                return None;
            }
        };
        Some(message.to_string())
    }
}
