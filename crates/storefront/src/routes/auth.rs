//! Authentication route handlers.
//!
//! The sign-in / sign-up form and the password reset share one page whose
//! content follows the visitor's [`AuthFlow`], kept in the session between
//! requests. Navigation buttons post to their own routes; every step posts
//! its fields to `POST /auth`.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use super::navbar::NavbarView;
use crate::auth_flow::{AuthFlow, AuthTab, FormFields, SubmitOutcome, TransitionError};
use crate::error::AppError;
use crate::filters;
use crate::middleware::OptionalUser;
use crate::models::session::keys;
use crate::services::{AccountAuth, SessionProvider};
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Tab switch form data.
#[derive(Debug, Deserialize)]
pub struct TabForm {
    pub tab: AuthTab,
}

// =============================================================================
// Templates
// =============================================================================

/// Authentication page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/index.html")]
pub struct AuthTemplate {
    pub nav: NavbarView,
    /// Active step as a stable string (`sign_in`, `verify_code`, ...).
    pub step: &'static str,
    pub loading: bool,
    pub error: Option<String>,
    pub notice: Option<String>,
    /// Values echoed back into the inputs. Passwords are never refilled.
    pub fields: FormFields,
}

impl AuthTemplate {
    fn new(nav: NavbarView, flow: &AuthFlow) -> Self {
        let fields = FormFields {
            password: String::new(),
            confirm_password: String::new(),
            new_password: String::new(),
            ..flow.fields.clone()
        };

        Self {
            nav,
            step: flow.step().as_str(),
            loading: flow.is_loading(),
            error: flow.error().map(String::from),
            notice: flow.notice().map(String::from),
            fields,
        }
    }
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Load the visitor's flow. Missing or unreadable flows start over.
async fn load_flow(session: &Session) -> AuthFlow {
    match session.get::<AuthFlow>(keys::AUTH_FLOW).await {
        Ok(flow) => flow.unwrap_or_default(),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read auth flow from session, starting over");
            AuthFlow::new()
        }
    }
}

async fn store_flow(session: &Session, flow: &AuthFlow) -> Result<(), AppError> {
    session.insert(keys::AUTH_FLOW, flow).await?;
    Ok(())
}

async fn render(session: &Session, user: OptionalUser, flow: &AuthFlow) -> AuthTemplate {
    AuthTemplate::new(NavbarView::load(session, user, "").await, flow)
}

/// Apply a navigation action, persist the flow and go back to the page.
async fn navigate(
    session: &Session,
    action: impl FnOnce(&mut AuthFlow) -> Result<(), TransitionError>,
) -> Result<Redirect, AppError> {
    let mut flow = load_flow(session).await;
    action(&mut flow).map_err(|e| AppError::BadRequest(e.to_string()))?;
    store_flow(session, &flow).await?;
    Ok(Redirect::to("/auth"))
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the authentication page at its current step.
#[instrument(skip(session, user))]
pub async fn page(session: Session, user: OptionalUser) -> impl IntoResponse {
    let flow = load_flow(&session).await;
    render(&session, user, &flow).await
}

/// Submit the fields of the current step.
///
/// Sign-in and sign-up leave for the home page on success; reset steps
/// redirect back to the page at the next step. Failures re-render the page
/// with the error and the typed values.
///
/// # Errors
///
/// Returns `AppError::Session` if the flow cannot be persisted.
#[instrument(skip(state, session, user, fields))]
pub async fn submit(
    State(state): State<AppState>,
    session: Session,
    user: OptionalUser,
    Form(fields): Form<FormFields>,
) -> Result<Response, AppError> {
    let mut flow = load_flow(&session).await;
    flow.fields = fields;

    let request = match flow.begin_submit() {
        Ok(request) => request,
        Err(refused) => {
            let status = match SubmitOutcome::from(refused) {
                SubmitOutcome::Busy => StatusCode::CONFLICT,
                _ => {
                    store_flow(&session, &flow).await?;
                    StatusCode::UNPROCESSABLE_ENTITY
                }
            };
            tracing::debug!(step = %flow.step(), %refused, "Submission refused");
            return Ok((status, render(&session, user, &flow).await).into_response());
        }
    };

    // Write the busy flow through to the store now; the session layer only
    // saves once the response is built, after the provider call.
    store_flow(&session, &flow).await?;
    session.save().await?;

    let provider = AccountAuth::new(state.pool(), &session, state.sms(), state.config().otp);
    let outcome = flow.complete_submit(request, &provider).await;
    store_flow(&session, &flow).await?;

    let response = match outcome {
        SubmitOutcome::Authenticated => Redirect::to("/").into_response(),
        SubmitOutcome::Advanced(step) => {
            tracing::info!(%step, "Authentication step advanced");
            Redirect::to("/auth").into_response()
        }
        SubmitOutcome::Busy | SubmitOutcome::Rejected(_) | SubmitOutcome::Failed => (
            StatusCode::UNPROCESSABLE_ENTITY,
            render(&session, user, &flow).await,
        )
            .into_response(),
    };

    Ok(response)
}

/// Switch between the sign-in and sign-up tabs.
///
/// # Errors
///
/// Returns `AppError::BadRequest` outside the first step.
#[instrument(skip(session))]
pub async fn tab(session: Session, Form(form): Form<TabForm>) -> Result<Redirect, AppError> {
    navigate(&session, |flow| flow.switch_tab(form.tab)).await
}

/// Start the password reset.
///
/// # Errors
///
/// Returns `AppError::BadRequest` unless the sign-in tab is showing.
#[instrument(skip(session))]
pub async fn forgot(session: Session) -> Result<Redirect, AppError> {
    navigate(&session, AuthFlow::forgot_password).await
}

/// Abandon the password reset.
///
/// # Errors
///
/// Returns `AppError::BadRequest` unless a reset step is showing.
#[instrument(skip(session))]
pub async fn back(session: Session) -> Result<Redirect, AppError> {
    navigate(&session, AuthFlow::back_to_login).await
}

/// Sign out and return to the home page.
///
/// # Errors
///
/// Returns `AppError::Internal` if the session cannot be cleared.
#[instrument(skip(state, session))]
pub async fn logout(State(state): State<AppState>, session: Session) -> Result<Redirect, AppError> {
    let provider = AccountAuth::new(state.pool(), &session, state.sms(), state.config().otp);
    provider
        .logout()
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    store_flow(&session, &AuthFlow::new()).await?;
    Ok(Redirect::to("/"))
}

#[cfg(test)]
mod tests {
    use voltcart_core::Category;

    use super::*;
    use crate::auth_flow::AuthStep;

    fn nav() -> NavbarView {
        NavbarView {
            user: None,
            cart_count: 0,
            search: String::new(),
            categories: Category::ALL,
        }
    }

    #[test]
    fn test_template_never_refills_passwords() {
        let mut flow = AuthFlow::new();
        flow.fields = FormFields {
            email: "ram@example.com".to_string(),
            password: "hunter22".to_string(),
            confirm_password: "hunter22".to_string(),
            new_password: "hunter33".to_string(),
            ..FormFields::default()
        };

        let template = AuthTemplate::new(nav(), &flow);

        assert_eq!(template.fields.email, "ram@example.com");
        assert!(template.fields.password.is_empty());
        assert!(template.fields.confirm_password.is_empty());
        assert!(template.fields.new_password.is_empty());
        assert_eq!(template.step, AuthStep::default().as_str());
    }
}
