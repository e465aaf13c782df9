//! Customer contact details: email addresses and mobile numbers.
//!
//! Accounts are looked up by email for sign-in and by mobile number for
//! password resets, so both are normalized on parse to make lookups stable
//! regardless of how the customer typed them.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing an [`EmailAddress`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    #[error("email cannot be empty")]
    Empty,
    #[error("email must be at most {max} characters")]
    TooLong { max: usize },
    #[error("email must contain exactly one @ symbol")]
    AtSymbol,
    #[error("email must have a mailbox and a domain")]
    MissingPart,
}

/// A normalized (trimmed, lowercased) email address.
///
/// ```
/// use voltcart_core::EmailAddress;
///
/// let email = EmailAddress::parse("  Ram@Example.COM ").unwrap();
/// assert_eq!(email.as_str(), "ram@example.com");
///
/// assert!(EmailAddress::parse("ram.example.com").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Maximum length of an email address (RFC 5321).
    pub const MAX_LENGTH: usize = 254;

    /// Parse and normalize an email address.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed input is empty, too long, does not
    /// contain exactly one `@`, or has an empty mailbox or domain.
    pub fn parse(s: &str) -> Result<Self, EmailError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(EmailError::Empty);
        }
        if trimmed.len() > Self::MAX_LENGTH {
            return Err(EmailError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        let mut parts = trimmed.split('@');
        let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(EmailError::AtSymbol);
        };
        if local.is_empty() || domain.is_empty() {
            return Err(EmailError::MissingPart);
        }

        Ok(Self(trimmed.to_lowercase()))
    }

    /// Returns the email address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Errors that can occur when parsing a [`MobileNumber`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MobileError {
    #[error("mobile number cannot be empty")]
    Empty,
    #[error("mobile number may only contain digits, spaces, dashes and a leading +")]
    InvalidCharacter,
    #[error("mobile number must have between {min} and {max} digits")]
    Length { min: usize, max: usize },
}

/// A mobile number reduced to its digits (with an optional leading `+`).
///
/// ```
/// use voltcart_core::MobileNumber;
///
/// let mobile = MobileNumber::parse("+977 98-1234-5678").unwrap();
/// assert_eq!(mobile.as_str(), "+9779812345678");
///
/// assert!(MobileNumber::parse("98123").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct MobileNumber(String);

impl MobileNumber {
    /// Minimum number of digits.
    pub const MIN_DIGITS: usize = 10;
    /// Maximum number of digits (E.164).
    pub const MAX_DIGITS: usize = 15;

    /// Parse and normalize a mobile number.
    ///
    /// Spaces, dashes, dots and parentheses are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is blank, contains other characters, or
    /// does not have 10 to 15 digits.
    pub fn parse(s: &str) -> Result<Self, MobileError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(MobileError::Empty);
        }

        let (plus, rest) = trimmed
            .strip_prefix('+')
            .map_or(("", trimmed), |rest| ("+", rest));

        let mut digits = String::with_capacity(rest.len());
        for c in rest.chars() {
            match c {
                '0'..='9' => digits.push(c),
                ' ' | '-' | '.' | '(' | ')' => {}
                _ => return Err(MobileError::InvalidCharacter),
            }
        }

        if !(Self::MIN_DIGITS..=Self::MAX_DIGITS).contains(&digits.len()) {
            return Err(MobileError::Length {
                min: Self::MIN_DIGITS,
                max: Self::MAX_DIGITS,
            });
        }

        Ok(Self(format!("{plus}{digits}")))
    }

    /// Returns the normalized number.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The number with all but the last four digits masked, for logs and notices.
    #[must_use]
    pub fn masked(&self) -> String {
        let visible = self.0.len().saturating_sub(4);
        let tail = self.0.get(visible..).unwrap_or_default();
        format!("{}{tail}", "*".repeat(visible))
    }
}

impl fmt::Display for MobileNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_email_normalizes() {
        let email = EmailAddress::parse(" Sita@Mail.com").unwrap();
        assert_eq!(email.as_str(), "sita@mail.com");
        assert_eq!(email.to_string(), "sita@mail.com");
    }

    #[test]
    fn test_email_rejects_malformed() {
        assert_eq!(EmailAddress::parse("   "), Err(EmailError::Empty));
        assert_eq!(EmailAddress::parse("a@b@c"), Err(EmailError::AtSymbol));
        assert_eq!(EmailAddress::parse("no-at"), Err(EmailError::AtSymbol));
        assert_eq!(EmailAddress::parse("@shop.np"), Err(EmailError::MissingPart));
        assert_eq!(EmailAddress::parse("ram@"), Err(EmailError::MissingPart));

        let long = format!("{}@example.com", "a".repeat(250));
        assert!(matches!(
            EmailAddress::parse(&long),
            Err(EmailError::TooLong { .. })
        ));
    }

    #[test]
    fn test_mobile_strips_separators() {
        let mobile = MobileNumber::parse("(981) 234-5678").unwrap();
        assert_eq!(mobile.as_str(), "9812345678");
    }

    #[test]
    fn test_mobile_rejects_bad_input() {
        assert_eq!(MobileNumber::parse(""), Err(MobileError::Empty));
        assert_eq!(
            MobileNumber::parse("98123x5678"),
            Err(MobileError::InvalidCharacter)
        );
        assert!(matches!(
            MobileNumber::parse("981234567"),
            Err(MobileError::Length { .. })
        ));
        assert!(matches!(
            MobileNumber::parse("1234567890123456"),
            Err(MobileError::Length { .. })
        ));
    }

    #[test]
    fn test_mobile_masked() {
        let mobile = MobileNumber::parse("9812345678").unwrap();
        assert_eq!(mobile.masked(), "******5678");
    }
}
