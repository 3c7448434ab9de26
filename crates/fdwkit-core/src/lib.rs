//! Connector provider contract for importing remote tables through a
//! PostgreSQL Foreign Data Wrapper.
//!
//! ```
//! use fdwkit_core::{CommandPlan, ConnectionNames, Parameters, ProviderExt, ProviderRegistry};
//!
//! let params: Parameters = serde_json::from_str(
//!     r#"{"provider": "postgres", "server": "db.local", "database": "sales",
//!         "table": "orders", "username": "reader"}"#,
//! )
//! .unwrap();
//!
//! let provider = ProviderRegistry::with_builtin().build(params).unwrap();
//! assert!(provider.is_valid());
//!
//! let plan = CommandPlan::build(provider.as_ref(), &ConnectionNames::default()).unwrap();
//! assert_eq!(plan.foreign_table_name, "fdw_orders");
//! assert_eq!(
//!     plan.teardown_sql(),
//!     "DROP FOREIGN TABLE IF EXISTS \"public\".\"fdw_orders\" CASCADE;\n\
//!      DROP SERVER IF EXISTS \"fdw_server_orders\" CASCADE;"
//! );
//! ```

pub mod error;
pub mod fdw;
pub mod params;
pub mod plan;
pub mod provider;
pub mod providers;
pub mod registry;
pub mod schema;

pub use error::{ConnectorError, Result};
pub use params::{Parameters, PROVIDER_KEY};
pub use plan::{Command, CommandPlan, ConnectionNames, Step};
pub use provider::{Provider, ProviderExt};
pub use providers::{MysqlProvider, PostgresProvider};
pub use registry::{ProviderFactory, ProviderRegistry};
pub use schema::{ParameterSchema, ValidationIssue};
