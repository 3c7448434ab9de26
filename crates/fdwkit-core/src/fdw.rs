//! Rendering of FDW statements.
//!
//! Pure string formatting shared by every provider: identifiers are always
//! double-quoted and literals single-quoted, with embedded quotes doubled.
//! Nothing here executes SQL or holds state, so the functions can be called
//! from any thread.

use crate::error::{ConnectorError, Result};
use sqlparser::ast::ObjectNamePart;
use sqlparser::dialect::{Dialect, PostgreSqlDialect};
use sqlparser::parser::Parser;
use sqlparser::tokenizer::Token;

/// A remote object name, optionally qualified by its schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteName {
    pub schema: Option<String>,
    pub name: String,
}

/// Quotes an identifier for PostgreSQL.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Quotes a string literal for PostgreSQL.
pub fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// `"schema"."name"`
pub fn qualified_name(schema: &str, name: &str) -> String {
    format!("{}.{}", quote_ident(schema), quote_ident(name))
}

/// Renders ` OPTIONS (key 'value', ...)`, or nothing when there are no options.
///
/// Option names are FDW keywords chosen by providers and are emitted verbatim.
pub fn options_clause(options: &[(&str, &str)]) -> String {
    if options.is_empty() {
        return String::new();
    }
    let rendered: Vec<String> = options
        .iter()
        .map(|(key, value)| format!("{key} {}", quote_literal(value)))
        .collect();
    format!(" OPTIONS ({})", rendered.join(", "))
}

pub fn render_create_server(server_name: &str, wrapper: &str, options: &[(&str, &str)]) -> String {
    format!(
        "CREATE SERVER {} FOREIGN DATA WRAPPER {wrapper}{};",
        quote_ident(server_name),
        options_clause(options)
    )
}

pub fn render_create_usermap(server_name: &str, username: &str, options: &[(&str, &str)]) -> String {
    format!(
        "CREATE USER MAPPING FOR {} SERVER {}{};",
        quote_ident(username),
        quote_ident(server_name),
        options_clause(options)
    )
}

pub fn render_drop_usermap(server_name: &str, username: &str) -> String {
    format!(
        "DROP USER MAPPING IF EXISTS FOR {} SERVER {};",
        quote_ident(username),
        quote_ident(server_name)
    )
}

/// Imports a single remote table into `schema_name`, keeping its remote name.
pub fn render_import_foreign_schema(
    server_name: &str,
    remote_schema: &str,
    remote_table: &str,
    schema_name: &str,
    options: &[(&str, &str)],
) -> String {
    format!(
        "IMPORT FOREIGN SCHEMA {} LIMIT TO ({}) FROM SERVER {} INTO {}{};",
        quote_ident(remote_schema),
        quote_ident(remote_table),
        quote_ident(server_name),
        quote_ident(schema_name),
        options_clause(options)
    )
}

pub fn render_rename_foreign_table(schema_name: &str, table_name: &str, new_name: &str) -> String {
    format!(
        "ALTER FOREIGN TABLE {} RENAME TO {};",
        qualified_name(schema_name, table_name),
        quote_ident(new_name)
    )
}

pub fn render_grant_select(schema_name: &str, table_name: &str, username: &str) -> String {
    format!(
        "GRANT SELECT ON {} TO {};",
        qualified_name(schema_name, table_name),
        quote_ident(username)
    )
}

/// Drops a server together with its user mappings and foreign tables.
pub fn render_drop_server(server_name: &str) -> String {
    format!("DROP SERVER IF EXISTS {} CASCADE;", quote_ident(server_name))
}

pub fn render_drop_foreign_table(schema_name: &str, table_name: &str) -> String {
    format!(
        "DROP FOREIGN TABLE IF EXISTS {} CASCADE;",
        qualified_name(schema_name, table_name)
    )
}

/// Parses a remote table reference such as `orders`, `sales.orders` or
/// `"Sales"."Order Lines"` using the remote server's SQL dialect.
///
/// Quoted parts are kept as written. Unquoted parts are folded to lower case
/// when the dialect is PostgreSQL, the way the server itself resolves them;
/// other dialects keep them unchanged.
///
/// `parameter` names the parameter the value came from and is used in the
/// error message.
///
/// # Errors
///
/// Returns [`ConnectorError::InvalidParameters`] when the value is not a one
/// or two part name.
pub fn parse_remote_name(dialect: &dyn Dialect, parameter: &str, value: &str) -> Result<RemoteName> {
    let invalid = |reason: &str| {
        ConnectorError::InvalidParameters(format!(
            "Invalid value for parameter {parameter}: {reason}"
        ))
    };

    let mut parser = Parser::new(dialect)
        .try_with_sql(value)
        .map_err(|e| invalid(&e.to_string()))?;
    let object_name = parser
        .parse_object_name(false)
        .map_err(|e| invalid(&e.to_string()))?;
    if parser.peek_token().token != Token::EOF {
        return Err(invalid("unexpected trailing input"));
    }

    let folds_unquoted = dialect.is::<PostgreSqlDialect>();
    let mut parts = Vec::with_capacity(object_name.0.len());
    for part in &object_name.0 {
        match part {
            ObjectNamePart::Identifier(ident) if ident.quote_style.is_none() && folds_unquoted => {
                parts.push(ident.value.to_ascii_lowercase())
            }
            ObjectNamePart::Identifier(ident) => parts.push(ident.value.clone()),
            _ => return Err(invalid("expected a table name")),
        }
    }

    match parts.len() {
        1 => Ok(RemoteName {
            schema: None,
            name: parts.remove(0),
        }),
        2 => {
            let name = parts.remove(1);
            Ok(RemoteName {
                schema: Some(parts.remove(0)),
                name,
            })
        }
        _ => Err(invalid("expected `table` or `schema.table`")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlparser::dialect::MySqlDialect;

    #[test]
    fn test_quote_ident_doubles_quotes() {
        assert_eq!(quote_ident("srv"), "\"srv\"");
        assert_eq!(quote_ident("my\"srv"), "\"my\"\"srv\"");
    }

    #[test]
    fn test_quote_literal_doubles_quotes() {
        assert_eq!(quote_literal("p@ss'word"), "'p@ss''word'");
    }

    #[test]
    fn test_options_clause() {
        assert_eq!(options_clause(&[]), "");
        assert_eq!(
            options_clause(&[("host", "db.local"), ("port", "5432")]),
            " OPTIONS (host 'db.local', port '5432')"
        );
    }

    #[test]
    fn test_drop_statements() {
        assert_eq!(render_drop_server("srv1"), "DROP SERVER IF EXISTS \"srv1\" CASCADE;");
        assert_eq!(
            render_drop_foreign_table("public", "t1"),
            "DROP FOREIGN TABLE IF EXISTS \"public\".\"t1\" CASCADE;"
        );
    }

    #[test]
    fn test_create_server_without_options() {
        assert_eq!(
            render_create_server("srv", "odbc_fdw", &[]),
            "CREATE SERVER \"srv\" FOREIGN DATA WRAPPER odbc_fdw;"
        );
    }

    #[test]
    fn test_parse_remote_name_unqualified() {
        assert_eq!(
            parse_remote_name(&PostgreSqlDialect {}, "table", "orders").unwrap(),
            RemoteName {
                schema: None,
                name: "orders".to_string()
            }
        );
    }

    #[test]
    fn test_parse_remote_name_quoted_parts() {
        assert_eq!(
            parse_remote_name(&PostgreSqlDialect {}, "table", "\"Sales\".\"Order Lines\"").unwrap(),
            RemoteName {
                schema: Some("Sales".to_string()),
                name: "Order Lines".to_string()
            }
        );
    }

    #[test]
    fn test_parse_remote_name_folds_unquoted_postgres_names() {
        let pg = PostgreSqlDialect {};
        let unquoted = parse_remote_name(&pg, "table", "Sales.Orders").unwrap();
        let quoted = parse_remote_name(&pg, "table", "\"Sales\".\"Orders\"").unwrap();
        assert_eq!(unquoted.schema.as_deref(), Some("sales"));
        assert_eq!(unquoted.name, "orders");
        assert_eq!(quoted.schema.as_deref(), Some("Sales"));
        assert_eq!(quoted.name, "Orders");
        assert_ne!(unquoted, quoted);
    }

    #[test]
    fn test_parse_remote_name_mysql_keeps_case() {
        let name = parse_remote_name(&MySqlDialect {}, "table", "Orders").unwrap();
        assert_eq!(name.name, "Orders");
    }

    #[test]
    fn test_parse_remote_name_rejects_garbage() {
        let err = parse_remote_name(&PostgreSqlDialect {}, "table", "orders; DROP TABLE users").unwrap_err();
        assert_eq!(
            err,
            ConnectorError::InvalidParameters(
                "Invalid value for parameter table: unexpected trailing input".to_string()
            )
        );
        assert!(parse_remote_name(&PostgreSqlDialect {}, "table", "a.b.c").is_err());
        assert!(parse_remote_name(&PostgreSqlDialect {}, "table", "").is_err());
    }
}
