//! The collected wizard answers.

use serde::Serialize;

use crate::license::License;

/// Everything the wizard collects before rendering. Text fields are
/// interpolated into the README verbatim - no defaulting, trimming, or
/// escaping beyond what the prompts themselves do.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerSet {
    pub title: String,
    pub description: String,
    pub installation: String,
    pub usage: String,
    pub contributing: String,
    pub tests: String,
    pub license: Option<License>,
    pub username: String,
    pub email: String,
}
