//! Parameter schemas and validation.
//!
//! Every provider publishes the names of the parameters it requires and the
//! names it optionally accepts. Validation compares a [`Parameters`] mapping
//! against that schema and produces at most two issues, always in the same
//! order: missing parameters first, unknown parameters second.

use crate::error::{ConnectorError, Result};
use crate::params::{Parameters, PROVIDER_KEY};
use serde::Serialize;
use std::fmt;
#[cfg(feature = "tracing")]
use tracing::debug;

/// The parameter names a provider type requires and accepts.
///
/// Schemas are fixed per provider type, so both lists are `'static`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterSchema {
    required: &'static [&'static str],
    optional: &'static [&'static str],
}

/// A problem found while validating parameters against a schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "parameters", rename_all = "camelCase")]
pub enum ValidationIssue {
    /// Required parameters absent from the mapping, in schema order.
    Missing(Vec<String>),
    /// Supplied parameters the schema does not accept, in supplied order.
    Invalid(Vec<String>),
}

impl ValidationIssue {
    /// The parameter names this issue is about.
    pub fn parameters(&self) -> &[String] {
        match self {
            Self::Missing(names) | Self::Invalid(names) => names,
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing(names) => write!(f, "Missing required parameters {}", names.join(",")),
            Self::Invalid(names) => write!(f, "Invalid parameters: {}", names.join(", ")),
        }
    }
}

impl ParameterSchema {
    pub const fn new(
        required: &'static [&'static str],
        optional: &'static [&'static str],
    ) -> Self {
        Self { required, optional }
    }

    pub fn required(&self) -> &'static [&'static str] {
        self.required
    }

    pub fn optional(&self) -> &'static [&'static str] {
        self.optional
    }

    /// Union of required and optional names, required first, without duplicates.
    pub fn accepted(&self) -> Vec<&'static str> {
        let mut accepted: Vec<&'static str> =
            Vec::with_capacity(self.required.len() + self.optional.len());
        for &name in self.required.iter().chain(self.optional) {
            if !accepted.contains(&name) {
                accepted.push(name);
            }
        }
        accepted
    }

    pub fn accepts(&self, name: &str) -> bool {
        self.required.contains(&name) || self.optional.contains(&name)
    }

    /// Checks `parameters` against the schema.
    ///
    /// The `provider` discriminator is skipped: it belongs to request routing,
    /// not to any provider's schema.
    pub fn check(&self, parameters: &Parameters) -> Vec<ValidationIssue> {
        let mut missing: Vec<String> = Vec::new();
        for name in self.required {
            if !parameters.contains_key(name) && !missing.iter().any(|m| m == name) {
                missing.push((*name).to_string());
            }
        }

        let invalid: Vec<String> = parameters
            .keys()
            .filter(|key| *key != PROVIDER_KEY && !self.accepts(key))
            .map(str::to_string)
            .collect();

        #[cfg(feature = "tracing")]
        if !missing.is_empty() || !invalid.is_empty() {
            debug!(?missing, ?invalid, "parameter validation failed");
        }

        let mut issues = Vec::with_capacity(2);
        if !missing.is_empty() {
            issues.push(ValidationIssue::Missing(missing));
        }
        if !invalid.is_empty() {
            issues.push(ValidationIssue::Invalid(invalid));
        }
        issues
    }

    /// Validation messages for `parameters`, missing parameters first.
    pub fn validate(&self, parameters: &Parameters) -> Vec<String> {
        self.check(parameters)
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    pub fn is_valid(&self, parameters: &Parameters) -> bool {
        self.check(parameters).is_empty()
    }

    /// Fails with [`ConnectorError::InvalidParameters`] unless `parameters`
    /// satisfy the schema. The error message joins all validation messages
    /// with newlines.
    pub fn assert_valid(&self, parameters: &Parameters) -> Result<()> {
        let messages = self.validate(parameters);
        if messages.is_empty() {
            Ok(())
        } else {
            Err(ConnectorError::InvalidParameters(messages.join("\n")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: ParameterSchema = ParameterSchema::new(&["host", "dbname"], &["port"]);

    fn params(pairs: &[(&str, &str)]) -> Parameters {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_accepted_is_union_without_duplicates() {
        let schema = ParameterSchema::new(&["a", "b"], &["b", "c"]);
        assert_eq!(schema.accepted(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_unknown_parameter_is_invalid() {
        let p = params(&[("host", "x"), ("dbname", "y"), ("extra", "z")]);
        assert_eq!(SCHEMA.validate(&p), vec!["Invalid parameters: extra"]);
    }

    #[test]
    fn test_missing_parameter() {
        let p = params(&[("dbname", "y")]);
        assert_eq!(SCHEMA.validate(&p), vec!["Missing required parameters host"]);
    }

    #[test]
    fn test_provider_key_is_ignored() {
        let p = params(&[
            ("host", "x"),
            ("dbname", "y"),
            ("port", "5432"),
            ("provider", "pg"),
        ]);
        assert!(SCHEMA.validate(&p).is_empty());
        assert!(SCHEMA.is_valid(&p));
    }

    #[test]
    fn test_missing_names_follow_schema_order() {
        let p = params(&[("port", "1")]);
        assert_eq!(SCHEMA.validate(&p), vec!["Missing required parameters host,dbname"]);
    }

    #[test]
    fn test_invalid_names_follow_supplied_order() {
        let p = params(&[("zz", "1"), ("host", "x"), ("aa", "2"), ("dbname", "y")]);
        assert_eq!(SCHEMA.validate(&p), vec!["Invalid parameters: zz, aa"]);
    }

    #[test]
    fn test_both_issues_missing_first() {
        let p = params(&[("extra", "z")]);
        let issues = SCHEMA.check(&p);
        assert_eq!(
            issues,
            vec![
                ValidationIssue::Missing(vec!["host".into(), "dbname".into()]),
                ValidationIssue::Invalid(vec!["extra".into()]),
            ]
        );
        assert_eq!(
            SCHEMA.assert_valid(&p).unwrap_err(),
            ConnectorError::InvalidParameters(
                "Missing required parameters host,dbname\nInvalid parameters: extra".to_string()
            )
        );
    }

    #[test]
    fn test_duplicate_required_names_reported_once() {
        let schema = ParameterSchema::new(&["host", "host"], &[]);
        assert_eq!(
            schema.validate(&Parameters::new()),
            vec!["Missing required parameters host"]
        );
    }

    #[test]
    fn test_issue_serializes_with_kind_tag() {
        let issue = ValidationIssue::Invalid(vec!["extra".into()]);
        assert_eq!(
            serde_json::to_string(&issue).unwrap(),
            r#"{"kind":"invalid","parameters":["extra"]}"#
        );
    }
}
