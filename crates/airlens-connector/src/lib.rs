//! # airlens-connector
//!
//! Callback surface a reporting host drives to use an external tables API as a
//! data source:
//!
//! - `auth_type`, `is_admin_user`, `is_auth_valid`: static declarations
//! - `get_config`: stepped configuration (API key, then base, then table)
//! - `get_fields` / `get_schema`: the table's fields in the host vocabulary
//! - `get_data`: schema plus every row of the table
//!
//! The host's schema builder and error reporter are passed in as
//! [`SchemaBuilder`] and [`ErrorReporter`] implementations.

pub mod config_ui;
mod connector;
pub mod error;
pub mod request;
pub mod schema;

pub use config_ui::{ConfigBuilder, ConfigEntry, ConfigResponse, SelectOption};
pub use connector::{AuthType, AuthTypeResponse, Connector};
pub use error::{ErrorReporter, TracingErrorReporter, UserError};
pub use request::{ConfigParams, ConnectorRequest, TableRef};
pub use schema::{
    DataResponse, DataRowResponse, HostField, HostFields, SchemaBuilder, SchemaResponse,
};
