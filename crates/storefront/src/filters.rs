//! Askama filters shared by every template.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

use chrono::Datelike;

/// Current calendar year (UTC), for the footer copyright line.
///
/// Usage: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    Ok(chrono::Utc::now().year())
}

/// Content hash of `static/css/main.css`, set by the build script.
///
/// Usage: `/static/css/derived/main.{{ ""|css_hash }}.css`
#[askama::filter_fn]
pub fn css_hash(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<&'static str> {
    Ok(env!("CSS_HASH"))
}
