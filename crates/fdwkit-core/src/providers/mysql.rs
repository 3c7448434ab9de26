//! Remote MySQL tables through `mysql_fdw`.

use super::{import_table_commands, present_options};
use crate::error::Result;
use crate::fdw;
use crate::params::Parameters;
use crate::provider::Provider;
use sqlparser::dialect::MySqlDialect;

const REQUIRED: &[&str] = &["server", "database", "table", "username"];
const OPTIONAL: &[&str] = &["port", "password"];

/// Provider for remote MySQL and MariaDB servers.
///
/// In MySQL a database plays the role of a schema, so `database` is the
/// remote schema unless `table` is qualified.
#[derive(Debug, Clone)]
pub struct MysqlProvider {
    parameters: Parameters,
}

impl MysqlProvider {
    /// Discriminator value selecting this provider.
    pub const NAME: &'static str = "mysql";

    pub fn new(parameters: Parameters) -> Self {
        Self { parameters }
    }
}

impl Provider for MysqlProvider {
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
        let table = self.parameters.require("table")?;
        Ok(fdw::parse_remote_name(&MySqlDialect {}, "table", table)?.name)
    }

    fn create_server_command(&self, server_name: &str) -> Result<String> {
        let mut options = vec![("host", self.parameters.require("server")?)];
        options.extend(present_options(&self.parameters, &[("port", "port")]));
        Ok(fdw::render_create_server(server_name, "mysql_fdw", &options))
    }

    fn create_usermap_command(&self, server_name: &str, username: &str) -> Result<String> {
        let mut options = vec![("username", self.parameters.require("username")?)];
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
        let table = self.parameters.require("table")?;
        let remote = fdw::parse_remote_name(&MySqlDialect {}, "table", table)?;
        let remote_schema = match remote.schema.as_deref() {
            Some(schema) => schema,
            None => self.parameters.require("database")?,
        };
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

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn provider(pairs: &[(&str, &str)]) -> MysqlProvider {
        MysqlProvider::new(pairs.iter().copied().collect())
    }

    #[test]
    fn test_create_server_uses_mysql_fdw() {
        let p = provider(&[("server", "mysql.local"), ("port", "3306")]);
        assert_eq!(
            p.create_server_command("srv").unwrap(),
            "CREATE SERVER \"srv\" FOREIGN DATA WRAPPER mysql_fdw OPTIONS (host 'mysql.local', port '3306');"
        );
    }

    #[test]
    fn test_usermap_uses_username_option() {
        let p = provider(&[("username", "root"), ("password", "it's secret")]);
        assert_eq!(
            p.create_usermap_command("srv", "importer").unwrap(),
            "CREATE USER MAPPING FOR \"importer\" SERVER \"srv\" OPTIONS (username 'root', password 'it''s secret');"
        );
    }

    #[test]
    fn test_database_is_remote_schema() {
        let p = provider(&[("database", "shop"), ("table", "orders")]);
        let sql = p
            .create_foreign_table_command("srv", "public", "orders", "fdw_", "importer")
            .unwrap();
        assert_eq!(
            sql,
            "IMPORT FOREIGN SCHEMA \"shop\" LIMIT TO (\"orders\") FROM SERVER \"srv\" INTO \"public\";\n\
             ALTER FOREIGN TABLE \"public\".\"orders\" RENAME TO \"fdw_orders\";\n\
             GRANT SELECT ON \"public\".\"fdw_orders\" TO \"importer\";"
        );
    }

    #[rstest]
    #[case::backtick_quoted("`orders`", "shop", "orders")]
    #[case::digit_leading("2024_orders", "shop", "2024_orders")]
    #[case::punctuation_in_backticks("`order-lines`", "shop", "order-lines")]
    #[case::qualified("shop.orders", "shop", "orders")]
    #[case::other_database("archive.Orders", "archive", "Orders")]
    fn test_mysql_table_references(
        #[case] table: &str,
        #[case] remote_schema: &str,
        #[case] remote_table: &str,
    ) {
        let p = provider(&[("database", "shop"), ("table", table)]);
        assert_eq!(p.table_name().unwrap(), remote_table);

        let sql = p
            .create_foreign_table_command("srv", "public", remote_table, "fdw_", "importer")
            .unwrap();
        let import = format!(
            "IMPORT FOREIGN SCHEMA \"{remote_schema}\" LIMIT TO (\"{remote_table}\") FROM SERVER \"srv\""
        );
        assert!(sql.starts_with(&import), "{sql}");
    }
}
