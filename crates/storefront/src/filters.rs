//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Turns a specification key into its display label.
///
/// Usage in templates: `{{ spec.key|spec_label }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn spec_label(key: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(crate::catalog::spec_label(&key.to_string()))
}
