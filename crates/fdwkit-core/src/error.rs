//! Error types for connector providers.
//!
//! # Error Handling Strategy
//!
//! Providers report problems in two complementary ways:
//!
//! - [`crate::ValidationIssue`]: structured findings returned by parameter
//!   validation. They are collected, not thrown, so a caller can show every
//!   problem with a request at once.
//!
//! - [`ConnectorError`]: the `Result` error of fallible operations. Of its
//!   variants only [`ConnectorError::InvalidParameters`] comes from the
//!   provider contract itself; the others are produced while routing or
//!   decoding a request before a provider exists.
//!
//! An operation a provider forgot to implement is not a runtime error at all.
//! Every generating operation of [`crate::Provider`] is a required trait method,
//! so such a provider does not compile.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T, E = ConnectorError> = std::result::Result<T, E>;

/// Errors produced while building providers and generating FDW commands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectorError {
    /// Required parameters are missing or unknown parameters were supplied.
    ///
    /// The message holds one line per validation issue, missing parameters
    /// first.
    #[error("{0}")]
    InvalidParameters(String),

    /// The parameter mapping has no `provider` discriminator.
    #[error("missing provider: the `provider` parameter is required")]
    MissingProvider,

    /// The `provider` discriminator names no registered provider.
    #[error("unknown provider: {0}")]
    UnknownProvider(String),

    /// A parameter value is not a string, number or boolean.
    #[error("unsupported value for parameter `{key}`: expected a string, number or boolean, found {kind}")]
    UnsupportedValue { key: String, kind: &'static str },
}

impl ConnectorError {
    /// Returns true for errors the end user can fix by changing parameters.
    pub fn is_invalid_parameters(&self) -> bool {
        matches!(self, Self::InvalidParameters(_))
    }
}
