//! Authentication view state machine.
//!
//! One [`AuthFlow`] per visitor drives the sign-in / sign-up form and the
//! three-step password reset. The flow is stored in the session between
//! requests; the typed-in [`FormFields`] are not.
//!
//! Submitting is split in two so the web layer can persist `loading` before
//! the provider call: [`AuthFlow::begin_submit`] validates and marks the
//! flow busy, [`AuthFlow::complete_submit`] performs exactly one provider
//! call and applies its outcome.
//!
//! A submission pending for longer than [`STALE_SUBMIT_SECS`] is treated as
//! abandoned, so a dropped request cannot lock the form for the whole session.

use core::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::services::auth::SessionProvider;

/// Shown when the provider fails unexpectedly or gives no message.
pub const GENERIC_ERROR: &str = "An error occurred. Please try again.";

/// Seconds after which a pending submission no longer blocks a new one.
pub const STALE_SUBMIT_SECS: i64 = 60;

/// Minimum length of a mobile number as typed into the form.
const MIN_MOBILE_LENGTH: usize = 10;

/// The two tabs of the first step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthTab {
    #[default]
    SignIn,
    SignUp,
}

impl AuthTab {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SignIn => "sign_in",
            Self::SignUp => "sign_up",
        }
    }
}

/// The active step. The tab only exists on the first step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthStep {
    SignInOrUp(AuthTab),
    RequestReset,
    VerifyCode,
    SetNewPassword,
}

impl Default for AuthStep {
    fn default() -> Self {
        Self::SignInOrUp(AuthTab::SignIn)
    }
}

impl AuthStep {
    /// Stable name of the screen this step renders.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SignInOrUp(tab) => tab.as_str(),
            Self::RequestReset => "request_reset",
            Self::VerifyCode => "verify_code",
            Self::SetNewPassword => "set_new_password",
        }
    }

    const fn is_reset(self) -> bool {
        matches!(
            self,
            Self::RequestReset | Self::VerifyCode | Self::SetNewPassword
        )
    }
}

impl fmt::Display for AuthStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text typed into the form. Every field is plain text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormFields {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub name: String,
    pub mobile: String,
    pub otp: String,
    pub new_password: String,
}

/// Navigation actions. Submitting is handled separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthAction {
    SwitchTab(AuthTab),
    ForgotPassword,
    BackToLogin,
}

impl fmt::Display for AuthAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SwitchTab(tab) => write!(f, "switch to {}", tab.as_str()),
            Self::ForgotPassword => f.write_str("forgot password"),
            Self::BackToLogin => f.write_str("back to login"),
        }
    }
}

/// An action that is not available on the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot {action} from the {step} step")]
pub struct TransitionError {
    pub step: AuthStep,
    pub action: AuthAction,
}

/// Form validation failures. The display text is shown to the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Please enter a valid mobile number")]
    InvalidMobile,
    #[error("Please enter the OTP")]
    MissingOtp,
    #[error("Please enter your new password")]
    MissingNewPassword,
}

/// A submission refused before any provider call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitRefused {
    /// A previous submission from this session has not finished.
    #[error("a submission is already in progress")]
    Busy,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// The single provider operation a validated submission performs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthRequest {
    Login {
        email: String,
        password: String,
    },
    Register {
        name: String,
        email: String,
        password: String,
        mobile: String,
    },
    RequestReset {
        mobile: String,
    },
    VerifyCode {
        otp: String,
    },
    ResetPassword {
        new_password: String,
    },
}

impl AuthRequest {
    const fn operation(&self) -> &'static str {
        match self {
            Self::Login { .. } => "login",
            Self::Register { .. } => "register",
            Self::RequestReset { .. } => "request_password_reset",
            Self::VerifyCode { .. } => "verify_otp",
            Self::ResetPassword { .. } => "reset_password",
        }
    }
}

/// What a submission led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Refused because a submission is in flight. State unchanged.
    Busy,
    /// Validation failed; `error` is set and no provider call was made.
    Rejected(ValidationError),
    /// Signed in or registered. The visitor leaves the view.
    Authenticated,
    /// Moved on to the given step.
    Advanced(AuthStep),
    /// The provider refused or failed; `error` is set.
    Failed,
}

impl From<SubmitRefused> for SubmitOutcome {
    fn from(refused: SubmitRefused) -> Self {
        match refused {
            SubmitRefused::Busy => Self::Busy,
            SubmitRefused::Invalid(err) => Self::Rejected(err),
        }
    }
}

/// State of one visitor's authentication view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthFlow {
    step: AuthStep,
    #[serde(skip)]
    pub fields: FormFields,
    /// Set while a provider call is in flight.
    pending_since: Option<DateTime<Utc>>,
    error: Option<String>,
    notice: Option<String>,
}

impl AuthFlow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn step(&self) -> AuthStep {
        self.step
    }

    /// Whether a submission is in flight and not yet stale.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.pending_since
            .is_some_and(|since| Utc::now() - since < Duration::seconds(STALE_SUBMIT_SECS))
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Informational message carried over from the previous step.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Apply a navigation action.
    ///
    /// # Errors
    ///
    /// Returns `TransitionError` if the action is not available on the
    /// current step; the state is left unchanged.
    pub fn apply(&mut self, action: AuthAction) -> Result<(), TransitionError> {
        let next = match (self.step, action) {
            (AuthStep::SignInOrUp(_), AuthAction::SwitchTab(tab)) => AuthStep::SignInOrUp(tab),
            (AuthStep::SignInOrUp(AuthTab::SignIn), AuthAction::ForgotPassword) => {
                AuthStep::RequestReset
            }
            (step, AuthAction::BackToLogin) if step.is_reset() => AuthStep::default(),
            (step, action) => return Err(TransitionError { step, action }),
        };

        self.move_to(next);
        Ok(())
    }

    /// Switch between the sign-in and sign-up tabs.
    ///
    /// # Errors
    ///
    /// Returns `TransitionError` outside the first step.
    pub fn switch_tab(&mut self, tab: AuthTab) -> Result<(), TransitionError> {
        self.apply(AuthAction::SwitchTab(tab))
    }

    /// Start the password reset from the sign-in tab.
    ///
    /// # Errors
    ///
    /// Returns `TransitionError` unless the sign-in tab is showing.
    pub fn forgot_password(&mut self) -> Result<(), TransitionError> {
        self.apply(AuthAction::ForgotPassword)
    }

    /// Abandon the password reset.
    ///
    /// # Errors
    ///
    /// Returns `TransitionError` unless a reset step is showing.
    pub fn back_to_login(&mut self) -> Result<(), TransitionError> {
        self.apply(AuthAction::BackToLogin)
    }

    fn move_to(&mut self, step: AuthStep) {
        self.step = step;
        self.fields = FormFields::default();
        self.error = None;
        self.notice = None;
    }

    // =========================================================================
    // Submission
    // =========================================================================

    /// Validate the fields of the active step and mark the flow busy.
    ///
    /// On a validation failure `error` is set and nothing else changes.
    ///
    /// # Errors
    ///
    /// Returns `SubmitRefused::Busy` while a submission is in flight and
    /// `SubmitRefused::Invalid` when validation fails.
    pub fn begin_submit(&mut self) -> Result<AuthRequest, SubmitRefused> {
        if self.is_loading() {
            return Err(SubmitRefused::Busy);
        }
        if let Some(since) = self.pending_since {
            tracing::warn!(%since, step = %self.step, "Abandoned submission, accepting a new one");
        }

        let request = match self.validate() {
            Ok(request) => request,
            Err(err) => {
                self.error = Some(err.to_string());
                return Err(err.into());
            }
        };

        self.pending_since = Some(Utc::now());
        self.error = None;
        self.notice = None;
        Ok(request)
    }

    /// Perform the provider call for `request` and apply its outcome.
    pub async fn complete_submit<P>(&mut self, request: AuthRequest, provider: &P) -> SubmitOutcome
    where
        P: SessionProvider + Sync,
    {
        let operation = request.operation();
        let result = match request {
            AuthRequest::Login { email, password } => provider.login(&email, &password).await,
            AuthRequest::Register {
                name,
                email,
                password,
                mobile,
            } => provider.register(&name, &email, &password, &mobile).await,
            AuthRequest::RequestReset { mobile } => provider.request_password_reset(&mobile).await,
            AuthRequest::VerifyCode { otp } => provider.verify_otp(&otp).await,
            AuthRequest::ResetPassword { new_password } => {
                provider.reset_password(&new_password).await
            }
        };
        self.pending_since = None;

        let outcome = match result {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(error = %e, operation, "Account operation failed");
                self.error = Some(GENERIC_ERROR.to_string());
                return SubmitOutcome::Failed;
            }
        };

        if !outcome.success {
            self.error = Some(outcome.message.unwrap_or_else(|| GENERIC_ERROR.to_string()));
            return SubmitOutcome::Failed;
        }

        let next = match self.step {
            AuthStep::SignInOrUp(_) => {
                *self = Self::default();
                return SubmitOutcome::Authenticated;
            }
            AuthStep::RequestReset => AuthStep::VerifyCode,
            AuthStep::VerifyCode => AuthStep::SetNewPassword,
            AuthStep::SetNewPassword => AuthStep::default(),
        };
        self.move_to(next);
        self.notice = outcome.message;
        SubmitOutcome::Advanced(next)
    }

    /// Validate and submit in one go.
    pub async fn submit<P>(&mut self, provider: &P) -> SubmitOutcome
    where
        P: SessionProvider + Sync,
    {
        match self.begin_submit() {
            Ok(request) => self.complete_submit(request, provider).await,
            Err(refused) => refused.into(),
        }
    }

    /// Check the fields the active step needs. Other fields are ignored.
    fn validate(&self) -> Result<AuthRequest, ValidationError> {
        let f = &self.fields;
        match self.step {
            AuthStep::SignInOrUp(AuthTab::SignIn) => {
                if f.email.is_empty() || f.password.is_empty() {
                    return Err(ValidationError::MissingFields);
                }
                Ok(AuthRequest::Login {
                    email: f.email.clone(),
                    password: f.password.clone(),
                })
            }
            AuthStep::SignInOrUp(AuthTab::SignUp) => {
                if [&f.email, &f.password, &f.confirm_password, &f.name, &f.mobile]
                    .iter()
                    .any(|v| v.is_empty())
                {
                    return Err(ValidationError::MissingFields);
                }
                if f.password != f.confirm_password {
                    return Err(ValidationError::PasswordMismatch);
                }
                if f.mobile.chars().count() < MIN_MOBILE_LENGTH {
                    return Err(ValidationError::InvalidMobile);
                }
                Ok(AuthRequest::Register {
                    name: f.name.clone(),
                    email: f.email.clone(),
                    password: f.password.clone(),
                    mobile: f.mobile.clone(),
                })
            }
            AuthStep::RequestReset => {
                if f.mobile.chars().count() < MIN_MOBILE_LENGTH {
                    return Err(ValidationError::InvalidMobile);
                }
                Ok(AuthRequest::RequestReset {
                    mobile: f.mobile.clone(),
                })
            }
            AuthStep::VerifyCode => {
                if f.otp.is_empty() {
                    return Err(ValidationError::MissingOtp);
                }
                Ok(AuthRequest::VerifyCode { otp: f.otp.clone() })
            }
            AuthStep::SetNewPassword => {
                if f.new_password.is_empty() {
                    return Err(ValidationError::MissingNewPassword);
                }
                Ok(AuthRequest::ResetPassword {
                    new_password: f.new_password.clone(),
                })
            }
        }
    }
}
