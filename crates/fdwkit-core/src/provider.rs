//! The connector provider contract.
//!
//! A provider turns a validated [`Parameters`] mapping into the SQL that
//! creates and tears down the FDW objects used to import one remote table:
//! a foreign server, a user mapping for the importing role, and the foreign
//! table itself.
//!
//! # Usage protocol
//!
//! Callers are expected to
//!
//! 1. validate the parameters ([`ProviderExt::assert_valid`]),
//! 2. run [`Provider::create_server_command`], then
//!    [`Provider::create_usermap_command`], then
//!    [`Provider::create_foreign_table_command`],
//! 3. once the import is done, run [`ProviderExt::drop_foreign_table_command`]
//!    followed by [`ProviderExt::drop_server_command`]. Dropping the server
//!    cascades to its user mapping.
//!
//! The order is not enforced here; [`crate::CommandPlan`] builds the
//! statements in this order.
//!
//! # Implementing a provider
//!
//! Schema and generating operations are required methods, so a provider
//! that leaves one out is rejected by the compiler:
//!
//! ```compile_fail
//! use fdwkit_core::{Parameters, Provider, Result};
//!
//! struct Incomplete(Parameters);
//!
//! impl Provider for Incomplete {
//!     fn parameters(&self) -> &Parameters { &self.0 }
//!     fn required_parameters(&self) -> &'static [&'static str] { &["host"] }
//!     fn optional_parameters(&self) -> &'static [&'static str] { &[] }
//!     fn table_name(&self) -> Result<String> { Ok("t".into()) }
//!     // create_server_command is missing
//!     fn create_usermap_command(&self, _: &str, _: &str) -> Result<String> { Ok(String::new()) }
//!     fn create_foreign_table_command(
//!         &self, _: &str, _: &str, _: &str, _: &str, _: &str,
//!     ) -> Result<String> { Ok(String::new()) }
//! }
//! ```
//!
//! Teardown and validation come from [`ProviderExt`], which is implemented
//! for every provider and cannot be specialised.

use crate::error::Result;
use crate::fdw;
use crate::params::Parameters;
use crate::schema::{ParameterSchema, ValidationIssue};

/// A connector provider for one kind of remote data source.
pub trait Provider: Send + Sync {
    /// The parameters this instance was built from.
    fn parameters(&self) -> &Parameters;

    /// Parameter names the provider cannot operate without.
    fn required_parameters(&self) -> &'static [&'static str];

    /// Parameter names the provider accepts but does not require.
    fn optional_parameters(&self) -> &'static [&'static str];

    /// Name of the remote table being imported.
    fn table_name(&self) -> Result<String>;

    /// SQL that creates the foreign server for the remote endpoint.
    fn create_server_command(&self, server_name: &str) -> Result<String>;

    /// SQL that maps the local role `username` to remote credentials.
    fn create_usermap_command(&self, server_name: &str, username: &str) -> Result<String>;

    /// SQL that creates the foreign table `foreign_prefix + table_name` in
    /// `schema_name`, bound to `server_name` and readable by `username`.
    fn create_foreign_table_command(
        &self,
        server_name: &str,
        schema_name: &str,
        table_name: &str,
        foreign_prefix: &str,
        username: &str,
    ) -> Result<String>;
}

/// Operations shared by every provider.
///
/// Blanket-implemented for all [`Provider`]s, including trait objects.
pub trait ProviderExt: Provider {
    fn schema(&self) -> ParameterSchema {
        ParameterSchema::new(self.required_parameters(), self.optional_parameters())
    }

    /// Union of required and optional parameter names.
    fn accepted_parameters(&self) -> Vec<&'static str> {
        self.schema().accepted()
    }

    /// Structured validation issues for this instance's parameters.
    fn issues(&self) -> Vec<ValidationIssue> {
        self.schema().check(self.parameters())
    }

    /// Validation messages, missing parameters first, then invalid ones.
    fn validate(&self) -> Vec<String> {
        self.schema().validate(self.parameters())
    }

    fn is_valid(&self) -> bool {
        self.issues().is_empty()
    }

    /// Fails with [`crate::ConnectorError::InvalidParameters`] when
    /// [`ProviderExt::validate`] reports anything.
    fn assert_valid(&self) -> Result<()> {
        self.schema().assert_valid(self.parameters())
    }

    /// SQL that drops the server and, by cascade, its user mapping.
    fn drop_server_command(&self, server_name: &str) -> String {
        fdw::render_drop_server(server_name)
    }

    fn drop_foreign_table_command(&self, schema_name: &str, table_name: &str) -> String {
        fdw::render_drop_foreign_table(schema_name, table_name)
    }
}

impl<P: Provider + ?Sized> ProviderExt for P {}
