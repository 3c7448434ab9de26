//! Ordered setup and teardown statements for one import.

use crate::error::Result;
use crate::provider::{Provider, ProviderExt};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
#[cfg(feature = "tracing")]
use tracing::info_span;

/// Local names used when generating FDW statements.
///
/// Every field has a default, so an empty JSON object is a valid
/// configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionNames {
    /// Name of the foreign server. Derived from the table name when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_name: Option<String>,

    /// Local schema receiving the foreign table (default: `public`).
    #[serde(default = "default_schema_name")]
    pub schema_name: String,

    /// Local table name before prefixing. Defaults to the remote table name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,

    /// Prefix of the foreign table name (default: `fdw_`).
    #[serde(default = "default_foreign_prefix")]
    pub foreign_prefix: String,

    /// Local role that owns the user mapping and may read the table
    /// (default: `postgres`).
    #[serde(default = "default_username")]
    pub username: String,
}

impl Default for ConnectionNames {
    fn default() -> Self {
        Self {
            server_name: None,
            schema_name: default_schema_name(),
            table_name: None,
            foreign_prefix: default_foreign_prefix(),
            username: default_username(),
        }
    }
}

fn default_schema_name() -> String {
    "public".to_string()
}

fn default_foreign_prefix() -> String {
    "fdw_".to_string()
}

fn default_username() -> String {
    "postgres".to_string()
}

/// One stage of the FDW lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum Step {
    CreateServer,
    CreateUsermap,
    CreateForeignTable,
    DropForeignTable,
    DropServer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Command {
    pub step: Step,
    pub sql: String,
}

/// Statements for importing one remote table, in execution order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommandPlan {
    pub server_name: String,
    pub schema_name: String,
    pub foreign_table_name: String,
    /// Create server, user mapping and foreign table.
    pub setup: Vec<Command>,
    /// Drop the foreign table, then the server.
    pub teardown: Vec<Command>,
}

impl CommandPlan {
    /// Validates the provider's parameters and generates every statement.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConnectorError::InvalidParameters`] when the
    /// parameters do not satisfy the provider's schema or a value cannot be
    /// used in a statement.
    pub fn build<P: Provider + ?Sized>(provider: &P, names: &ConnectionNames) -> Result<Self> {
        provider.assert_valid()?;

        let table_name = match &names.table_name {
            Some(name) => name.clone(),
            None => provider.table_name()?,
        };
        let server_name = names
            .server_name
            .clone()
            .unwrap_or_else(|| format!("{}server_{table_name}", names.foreign_prefix));
        let foreign_table_name = format!("{}{table_name}", names.foreign_prefix);

        #[cfg(feature = "tracing")]
        let _span = info_span!(
            "build_command_plan",
            server = %server_name,
            schema = %names.schema_name,
            table = %foreign_table_name
        )
        .entered();

        let setup = vec![
            Command {
                step: Step::CreateServer,
                sql: provider.create_server_command(&server_name)?,
            },
            Command {
                step: Step::CreateUsermap,
                sql: provider.create_usermap_command(&server_name, &names.username)?,
            },
            Command {
                step: Step::CreateForeignTable,
                sql: provider.create_foreign_table_command(
                    &server_name,
                    &names.schema_name,
                    &table_name,
                    &names.foreign_prefix,
                    &names.username,
                )?,
            },
        ];
        let teardown = vec![
            Command {
                step: Step::DropForeignTable,
                sql: provider.drop_foreign_table_command(&names.schema_name, &foreign_table_name),
            },
            Command {
                step: Step::DropServer,
                sql: provider.drop_server_command(&server_name),
            },
        ];

        Ok(Self {
            server_name,
            schema_name: names.schema_name.clone(),
            foreign_table_name,
            setup,
            teardown,
        })
    }

    pub fn setup_sql(&self) -> String {
        join_sql(&self.setup)
    }

    pub fn teardown_sql(&self) -> String {
        join_sql(&self.teardown)
    }
}

fn join_sql(commands: &[Command]) -> String {
    commands
        .iter()
        .map(|c| c.sql.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
