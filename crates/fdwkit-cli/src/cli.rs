//! CLI argument parsing using clap.

use clap::{Parser, ValueEnum};
use fdwkit_core::ConnectionNames;
use std::path::PathBuf;

/// fdwkit - FDW connector toolkit
#[derive(Parser, Debug)]
#[command(name = "fdwkit")]
#[command(about = "Validate connector parameters and generate FDW statements", long_about = None)]
#[command(version)]
pub struct Args {
    /// JSON file with connector parameters, including `provider` (reads from stdin if omitted)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// JSON file with connection names (serverName, schemaName, tableName, foreignPrefix, username)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Name of the foreign server
    #[arg(long, value_name = "NAME")]
    pub server_name: Option<String>,

    /// Local schema receiving the foreign table
    #[arg(long, value_name = "SCHEMA")]
    pub schema: Option<String>,

    /// Local table name before prefixing (defaults to the remote table name)
    #[arg(long, value_name = "NAME")]
    pub table: Option<String>,

    /// Prefix of the foreign table name
    #[arg(long, value_name = "PREFIX")]
    pub foreign_prefix: Option<String>,

    /// Local role owning the user mapping
    #[arg(long, value_name = "ROLE")]
    pub username: Option<String>,

    /// Output format
    #[arg(short, long, default_value = "text", value_enum)]
    pub format: OutputFormat,

    /// Only validate the parameters, do not generate statements
    #[arg(long)]
    pub validate_only: bool,

    /// List the available providers and their parameters
    #[arg(long)]
    pub list_providers: bool,

    /// Hide the summary line in text output and suppress warnings on stderr
    #[arg(short, long)]
    pub quiet: bool,

    /// Compact JSON output (no pretty-printing)
    #[arg(short, long)]
    pub compact: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    Text,
    /// JSON report
    Json,
    /// Plain SQL statements
    Sql,
}

impl Args {
    /// Applies command-line overrides on top of `names`.
    pub fn apply_overrides(&self, mut names: ConnectionNames) -> ConnectionNames {
        if let Some(server_name) = &self.server_name {
            names.server_name = Some(server_name.clone());
        }
        if let Some(schema) = &self.schema {
            names.schema_name = schema.clone();
        }
        if let Some(table) = &self.table {
            names.table_name = Some(table.clone());
        }
        if let Some(prefix) = &self.foreign_prefix {
            names.foreign_prefix = prefix.clone();
        }
        if let Some(username) = &self.username {
            names.username = username.clone();
        }
        names
    }
}
