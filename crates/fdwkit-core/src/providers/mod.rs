//! Providers bundled with the crate.
//!
//! Both import a single remote table with `IMPORT FOREIGN SCHEMA ... LIMIT TO`,
//! rename it to the requested local name and grant read access to the
//! importing role.

mod mysql;
mod postgres;

pub use mysql::MysqlProvider;
pub use postgres::PostgresProvider;

use crate::fdw;

/// Statements that bring `remote_schema.remote_table` into `schema_name` as
/// `foreign_name`, readable by `username`.
pub(crate) fn import_table_commands(
    server_name: &str,
    remote_schema: &str,
    remote_table: &str,
    schema_name: &str,
    foreign_name: &str,
    username: &str,
) -> String {
    let mut statements = vec![fdw::render_import_foreign_schema(
        server_name,
        remote_schema,
        remote_table,
        schema_name,
        &[],
    )];
    if remote_table != foreign_name {
        statements.push(fdw::render_rename_foreign_table(
            schema_name,
            remote_table,
            foreign_name,
        ));
    }
    statements.push(fdw::render_grant_select(schema_name, foreign_name, username));
    statements.join("\n")
}

/// Collects `(option, value)` pairs for the parameters that are present.
pub(crate) fn present_options<'a>(
    parameters: &'a crate::Parameters,
    mapping: &[(&'a str, &str)],
) -> Vec<(&'a str, &'a str)> {
    mapping
        .iter()
        .filter_map(|(option, parameter)| parameters.get(parameter).map(|value| (*option, value)))
        .collect()
}
