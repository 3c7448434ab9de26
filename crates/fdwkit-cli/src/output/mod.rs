//! Output formatting for validation reports and generated statements.

pub mod json;
pub mod sql;
pub mod text;

use fdwkit_core::{CommandPlan, ValidationIssue};
use serde::Serialize;

pub use json::format_json;
pub use sql::format_sql;
pub use text::{format_providers, format_text};

/// Outcome of validating one parameter mapping and, when valid, the
/// statements generated for it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub provider: String,
    pub valid: bool,
    /// Validation messages, missing parameters first.
    pub errors: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<ValidationIssue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<CommandPlan>,
}

impl Report {
    pub fn invalid(provider: &str, issues: Vec<ValidationIssue>) -> Self {
        Self {
            provider: provider.to_string(),
            valid: false,
            errors: issues.iter().map(ToString::to_string).collect(),
            issues,
            plan: None,
        }
    }

    /// A report for parameters rejected while generating statements.
    pub fn rejected(provider: &str, message: String) -> Self {
        Self {
            provider: provider.to_string(),
            valid: false,
            errors: message.lines().map(str::to_string).collect(),
            issues: Vec::new(),
            plan: None,
        }
    }

    pub fn valid(provider: &str, plan: Option<CommandPlan>) -> Self {
        Self {
            provider: provider.to_string(),
            valid: true,
            errors: Vec::new(),
            issues: Vec::new(),
            plan,
        }
    }
}
