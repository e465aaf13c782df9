//! Result shape shared by every account operation.

use serde::{Deserialize, Serialize};

/// The outcome of a sign-in, registration or password-reset operation.
///
/// A failed outcome is an expected, user-facing result (wrong password,
/// expired code). Unexpected faults travel separately as errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub success: bool,
    pub message: Option<String>,
}

impl Outcome {
    /// A successful outcome with no message.
    #[must_use]
    pub const fn success() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    /// A successful outcome with a message for the customer.
    #[must_use]
    pub fn success_with(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
        }
    }

    /// A failed outcome with a message for the customer.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}
