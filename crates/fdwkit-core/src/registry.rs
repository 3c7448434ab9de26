//! Routing of parameter mappings to providers.

use crate::error::{ConnectorError, Result};
use crate::params::Parameters;
use crate::provider::Provider;
use crate::providers::{MysqlProvider, PostgresProvider};
use indexmap::IndexMap;
#[cfg(feature = "tracing")]
use tracing::debug;

/// Builds a provider from its parameters.
pub type ProviderFactory = fn(Parameters) -> Box<dyn Provider>;

/// Maps `provider` discriminator values to provider constructors.
///
/// A registry is assembled once and then only read, so it can be shared
/// between threads freely.
#[derive(Debug, Clone, Default)]
pub struct ProviderRegistry {
    factories: IndexMap<&'static str, ProviderFactory>,
}

impl ProviderRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the bundled providers.
    pub fn with_builtin() -> Self {
        Self::new()
            .register(PostgresProvider::NAME, |p| Box::new(PostgresProvider::new(p)))
            .register(MysqlProvider::NAME, |p| Box::new(MysqlProvider::new(p)))
    }

    /// Adds a provider, replacing any previous registration of `name`.
    pub fn register(mut self, name: &'static str, factory: ProviderFactory) -> Self {
        self.factories.insert(name, factory);
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered provider names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.factories.keys().copied()
    }

    /// Builds the provider selected by the `provider` parameter.
    ///
    /// The discriminator stays in the mapping; validation never reports it.
    ///
    /// # Errors
    ///
    /// [`ConnectorError::MissingProvider`] when there is no discriminator and
    /// [`ConnectorError::UnknownProvider`] when it names no registered provider.
    pub fn build(&self, parameters: Parameters) -> Result<Box<dyn Provider>> {
        let name = parameters.provider().ok_or(ConnectorError::MissingProvider)?;
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| ConnectorError::UnknownProvider(name.to_string()))?;

        #[cfg(feature = "tracing")]
        debug!(provider = name, parameter_count = parameters.len(), "building provider");

        Ok(factory(parameters))
    }
}
