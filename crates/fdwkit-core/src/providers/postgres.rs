//! Remote PostgreSQL tables through `postgres_fdw`.

use super::{import_table_commands, present_options};
use crate::error::Result;
use crate::fdw;
use crate::params::Parameters;
use crate::provider::Provider;
use sqlparser::dialect::PostgreSqlDialect;

const REQUIRED: &[&str] = &["server", "database", "table", "username"];
const OPTIONAL: &[&str] = &["port", "schema", "password", "sslmode"];

const DEFAULT_REMOTE_SCHEMA: &str = "public";

/// Provider for remote PostgreSQL servers.
///
/// `table` may be schema-qualified (`sales.orders`); otherwise the `schema`
/// parameter, or `public`, is used as the remote schema.
#[derive(Debug, Clone)]
pub struct PostgresProvider {
    parameters: Parameters,
}

impl PostgresProvider {
    /// Discriminator value selecting this provider.
    pub const NAME: &'static str = "postgres";

    pub fn new(parameters: Parameters) -> Self {
        Self { parameters }
    }

    fn remote_table(&self) -> Result<fdw::RemoteName> {
        let table = self.parameters.require("table")?;
        let mut remote = fdw::parse_remote_name(&PostgreSqlDialect {}, "table", table)?;
        if remote.schema.is_none() {
            let schema = self.parameters.get("schema").unwrap_or(DEFAULT_REMOTE_SCHEMA);
            remote.schema = Some(schema.to_string());
        }
        Ok(remote)
    }
}

impl Provider for PostgresProvider {
    fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    fn required_parameters(&self) -> &'static [&'static str] {
        REQUIRED
    }

    fn optional_parameters(&self) -> &'static [&'static str] {
        OPTIONAL
    }

    fn table_name(&self) -> Result<String> {
        Ok(self.remote_table()?.name)
    }

    fn create_server_command(&self, server_name: &str) -> Result<String> {
        let mut options = vec![("host", self.parameters.require("server")?)];
        options.extend(present_options(&self.parameters, &[("port", "port")]));
        options.push(("dbname", self.parameters.require("database")?));
        options.extend(present_options(&self.parameters, &[("sslmode", "sslmode")]));
        Ok(fdw::render_create_server(server_name, "postgres_fdw", &options))
    }

    fn create_usermap_command(&self, server_name: &str, username: &str) -> Result<String> {
        let mut options = vec![("user", self.parameters.require("username")?)];
        options.extend(present_options(&self.parameters, &[("password", "password")]));
        Ok(fdw::render_create_usermap(server_name, username, &options))
    }

    fn create_foreign_table_command(
        &self,
        server_name: &str,
        schema_name: &str,
        table_name: &str,
        foreign_prefix: &str,
        username: &str,
    ) -> Result<String> {
        let remote = self.remote_table()?;
        let remote_schema = remote.schema.as_deref().unwrap_or(DEFAULT_REMOTE_SCHEMA);
        Ok(import_table_commands(
            server_name,
            remote_schema,
            &remote.name,
            schema_name,
            &format!("{foreign_prefix}{table_name}"),
            username,
        ))
    }
}
