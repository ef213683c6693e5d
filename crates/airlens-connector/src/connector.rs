use std::sync::Arc;

use airlens_query::{
    find_table, map_fields, project_rows, DataError, MappedField, MetadataSource, RecordSource,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::config_ui::{ConfigBuilder, ConfigResponse, SelectOption};
use crate::error::{ErrorReporter, TracingErrorReporter, UserError};
use crate::request::{ConnectorRequest, TableRef};
use crate::schema::{DataResponse, DataRowResponse, HostFields, SchemaBuilder, SchemaResponse};

/// How the host authenticates users of the connector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthType {
    /// The API key travels as a configuration parameter instead
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AuthTypeResponse {
    #[serde(rename = "type")]
    pub auth_type: AuthType,
}

/// Entry points called by the reporting host.
///
/// Every callback works from the configuration in its own request; nothing is
/// cached between calls. A failure is reported once through the injected
/// [`ErrorReporter`] and returned, with no partial schema or rows.
pub struct Connector<S> {
    source: S,
    reporter: Arc<dyn ErrorReporter>,
}

impl<S> Connector<S>
where
    S: MetadataSource + RecordSource,
{
    pub fn new(source: S) -> Self {
        Self {
            source,
            reporter: Arc::new(TracingErrorReporter),
        }
    }

    pub fn with_reporter(mut self, reporter: Arc<dyn ErrorReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn auth_type(&self) -> AuthTypeResponse {
        AuthTypeResponse {
            auth_type: AuthType::None,
        }
    }

    pub fn is_admin_user(&self) -> bool {
        false
    }

    pub fn is_auth_valid(&self) -> bool {
        true
    }

    /// Configuration screen for the steps completed so far
    pub async fn get_config(&self, request: &ConnectorRequest) -> Result<ConfigResponse, UserError> {
        let params = request.params();
        let credential = params.credential();

        let mut config = ConfigBuilder::new()
            .info("instructions1", "Step 1: Enter API Key.")
            .text_input(
                "apiKey",
                "API Key",
                "Enter your Airtable API Key.",
                "keyxxxxxxxxxxxxxx",
            );

        if params.api_key().is_some() {
            let bases = self
                .source
                .list_collections(&credential)
                .await
                .map_err(|e| self.fail(UserError::fetching_bases(&e)))?;

            let options = bases
                .into_iter()
                .map(|base| SelectOption::new(base.name, base.id))
                .collect();

            config = config.info("instructions2", "Step 2: Select Base.").select_single(
                "baseId",
                "Base",
                "Select the base you want to connect to.",
                true,
                options,
            );
        }

        if let Some(base_id) = params.base_id() {
            let tables = self
                .source
                .list_tables(&credential, base_id)
                .await
                .map_err(|e| self.fail(UserError::fetching_tables(&e)))?;

            let options = tables
                .into_iter()
                .map(|table| SelectOption::new(table.name.clone(), table.name))
                .collect();

            config = config.info("instructions3", "Step 3: Select Table.").select_single(
                "tableName",
                "Table",
                "Select the table you want to connect to.",
                false,
                options,
            );
        }

        Ok(config
            .stepped(params.table_name().is_none())
            .date_range_required(true)
            .build())
    }

    /// Resolve the configured table and push its mapped fields into `builder`
    pub async fn get_fields(
        &self,
        request: &ConnectorRequest,
        builder: &mut dyn SchemaBuilder,
    ) -> Result<Vec<MappedField>, UserError> {
        let params = request.params();
        let table = params.table_ref().map_err(|e| self.fail(e))?;

        let fields = self.resolve_fields(&table).await?;
        for field in &fields {
            builder.add_field(field);
        }

        Ok(fields)
    }

    pub async fn get_schema(&self, request: &ConnectorRequest) -> Result<SchemaResponse, UserError> {
        let mut builder = HostFields::new();
        self.get_fields(request, &mut builder).await?;

        Ok(SchemaResponse {
            schema: builder.build(),
        })
    }

    /// Schema and every row of the configured table
    pub async fn get_data(&self, request: &ConnectorRequest) -> Result<DataResponse, UserError> {
        let params = request.params();
        let table = params.table_ref().map_err(|e| self.fail(e))?;

        let mut builder = HostFields::new();
        let fields = self.resolve_fields(&table).await?;
        for field in &fields {
            builder.add_field(field);
        }

        let records = self
            .source
            .fetch_all(&table.credential, table.base_id, table.table_name)
            .await
            .map_err(|e| self.fail(UserError::fetching_records(&e)))?;

        let rows = project_rows(&records, &fields)
            .into_iter()
            .map(|values| DataRowResponse { values })
            .collect::<Vec<_>>();

        info!(
            "Returning {} rows with {} fields for {}/{}",
            rows.len(),
            fields.len(),
            table.base_id,
            table.table_name
        );

        Ok(DataResponse {
            schema: builder.build(),
            rows,
        })
    }

    async fn resolve_fields(&self, table: &TableRef<'_>) -> Result<Vec<MappedField>, UserError> {
        let tables = self
            .source
            .list_tables(&table.credential, table.base_id)
            .await
            .map_err(|e| self.fail(UserError::fetching_tables(&e)))?;

        let schema = find_table(tables, table.table_name).map_err(|e| match e {
            DataError::NotFound(_) => self.fail(UserError::table_not_found(table.table_name)),
            other => self.fail(UserError::fetching_tables(&other)),
        })?;

        debug!(
            "Resolved {} table {} with {} fields",
            self.source.source_type(),
            schema.name,
            schema.fields.len()
        );

        Ok(map_fields(&schema))
    }

    fn fail(&self, error: UserError) -> UserError {
        self.reporter.report(&error);
        error
    }
}
