use airlens_query::Credential;
use serde::{Deserialize, Serialize};

use crate::error::UserError;

/// Values the user entered in the configuration steps
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
}

impl ConfigParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_id(mut self, base_id: impl Into<String>) -> Self {
        self.base_id = Some(base_id.into());
        self
    }

    pub fn with_table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = Some(table_name.into());
        self
    }

    /// Empty strings count as not entered
    pub fn api_key(&self) -> Option<&str> {
        non_empty(&self.api_key)
    }

    pub fn base_id(&self) -> Option<&str> {
        non_empty(&self.base_id)
    }

    pub fn table_name(&self) -> Option<&str> {
        non_empty(&self.table_name)
    }

    /// Credential for upstream calls; blank when no key was entered
    pub fn credential(&self) -> Credential {
        Credential::new(self.api_key().unwrap_or_default())
    }

    /// All three parameters needed to address one table
    pub fn table_ref(&self) -> Result<TableRef<'_>, UserError> {
        Ok(TableRef {
            credential: self.credential(),
            base_id: self.base_id().ok_or_else(|| UserError::missing_parameter("baseId"))?,
            table_name: self
                .table_name()
                .ok_or_else(|| UserError::missing_parameter("tableName"))?,
        })
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// A fully specified table selection
#[derive(Debug, Clone)]
pub struct TableRef<'a> {
    pub credential: Credential,
    pub base_id: &'a str,
    pub table_name: &'a str,
}

/// Request passed by the host to every callback
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectorRequest {
    #[serde(default)]
    pub config_params: Option<ConfigParams>,
}

impl ConnectorRequest {
    pub fn new(config_params: ConfigParams) -> Self {
        Self {
            config_params: Some(config_params),
        }
    }

    /// Parameters entered so far; none at all on the first configuration step
    pub fn params(&self) -> ConfigParams {
        self.config_params.clone().unwrap_or_default()
    }
}
