//! Airtable implementation of the metadata and record sources.
//!
//! Authenticates every request with the caller's Personal Access Token (or legacy
//! API key) as a bearer token. Create a token at: https://airtable.com/create/tokens
//! with the `schema.bases:read` and `data.records:read` scopes.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use airlens_query::{
    collect_pages, Collection, Credential, DataError, MetadataSource, RecordPage, RecordSource,
    Result, Table,
};

use crate::config::AirtableConfig;
use crate::models::{ApiErrorResponse, BasesResponse, RecordsResponse, TablesResponse};

/// Airtable API client
pub struct AirtableClient {
    client: Client,
    config: AirtableConfig,
}

impl AirtableClient {
    /// Create a client with the given settings
    ///
    /// A trailing slash on `base_url` is dropped, so configs loaded through serde
    /// build the same request paths as ones made with `with_base_url`.
    pub fn new(mut config: AirtableConfig) -> Result<Self> {
        config.base_url = config.base_url.trim_end_matches('/').to_string();

        if config.max_pages == Some(0) {
            return Err(DataError::invalid_configuration(
                "max_pages must be at least 1",
            ));
        }

        Url::parse(&config.base_url).map_err(|e| {
            DataError::invalid_configuration(format!(
                "Invalid API base URL {}: {}",
                config.base_url, e
            ))
        })?;

        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| DataError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &AirtableConfig {
        &self.config
    }

    /// Make an authenticated GET request and decode the body as `T`
    async fn api_get<T: DeserializeOwned>(
        &self,
        credential: &Credential,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        if credential.is_blank() {
            return Err(DataError::invalid_credentials("API key is missing"));
        }

        let url = format!("{}{}", self.config.base_url, path);

        debug!("Airtable API request: GET {}", path);

        let response = self
            .client
            .get(&url)
            .bearer_auth(credential.expose())
            .query(query)
            .send()
            .await
            .map_err(|e| DataError::network(format!("API request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DataError::network(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            let error = classify_failure(status, &body, path);
            debug!("Airtable API request to {} failed: {}", path, error);
            return Err(error);
        }

        decode_body(&body)
    }
}

/// Decode a success body, reporting the JSON path of the first mismatch
fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_str(body);
    let value = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| DataError::upstream_format(format!("Failed to parse response: {}", e)))?;
    deserializer
        .end()
        .map_err(|e| DataError::upstream_format(format!("Trailing data in response: {}", e)))?;
    Ok(value)
}

/// Turn a non-success response into the matching error kind
fn classify_failure(status: StatusCode, body: &str, path: &str) -> DataError {
    let api_error = serde_json::from_str::<ApiErrorResponse>(body)
        .ok()
        .map(|response| response.error);

    let error_type = api_error.as_ref().map(|e| e.error_type()).unwrap_or("");
    let detail = match api_error.as_ref() {
        Some(error) => match error.message() {
            Some(message) => format!("{} ({})", message, error.error_type()),
            None => error.error_type().to_string(),
        },
        None if body.trim().is_empty() => "empty response body".to_string(),
        None => body.to_string(),
    };

    if status == StatusCode::UNAUTHORIZED
        || error_type == "AUTHENTICATION_REQUIRED"
        || error_type == "UNAUTHORIZED"
    {
        DataError::invalid_credentials(detail)
    } else if status == StatusCode::NOT_FOUND || error_type.contains("NOT_FOUND") {
        DataError::not_found(format!("{}: {}", path, detail))
    } else {
        DataError::network(format!("API returned status {}: {}", status, detail))
    }
}

#[async_trait]
impl MetadataSource for AirtableClient {
    fn source_type(&self) -> &'static str {
        "airtable"
    }

    async fn list_collections(&self, credential: &Credential) -> Result<Vec<Collection>> {
        collect_pages(self.config.max_pages, |cursor| async move {
            let query: Vec<(&str, String)> = cursor.into_iter().map(|c| ("offset", c)).collect();
            let response: BasesResponse = self.api_get(credential, "/meta/bases", &query).await?;
            Ok((response.bases, response.offset))
        })
        .await
    }

    async fn list_tables(
        &self,
        credential: &Credential,
        collection_id: &str,
    ) -> Result<Vec<Table>> {
        let path = format!("/meta/bases/{}/tables", urlencoding::encode(collection_id));
        let response: TablesResponse = self.api_get(credential, &path, &[]).await?;
        Ok(response.tables)
    }
}

#[async_trait]
impl RecordSource for AirtableClient {
    async fn fetch_page(
        &self,
        credential: &Credential,
        collection_id: &str,
        table_name: &str,
        cursor: Option<&str>,
    ) -> Result<RecordPage> {
        let path = format!(
            "/{}/{}",
            urlencoding::encode(collection_id),
            urlencoding::encode(table_name)
        );

        let mut query = Vec::new();
        if let Some(page_size) = self.config.page_size {
            query.push(("pageSize", page_size.to_string()));
        }
        if let Some(cursor) = cursor {
            query.push(("offset", cursor.to_string()));
        }

        let response: RecordsResponse = self.api_get(credential, &path, &query).await?;

        Ok(RecordPage {
            records: response.records,
            cursor: response.offset,
        })
    }

    fn max_pages(&self) -> Option<usize> {
        self.config.max_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_type() {
        let client = AirtableClient::new(AirtableConfig::default()).unwrap();
        assert_eq!(client.source_type(), "airtable");
    }

    #[test]
    fn test_invalid_base_url() {
        let result = AirtableClient::new(AirtableConfig::new().with_base_url("not a url"));
        assert!(matches!(result, Err(DataError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_trailing_slash_trimmed_from_deserialized_config() {
        let config: AirtableConfig =
            serde_json::from_str(r#"{"base_url": "https://api.airtable.com/v0/"}"#).unwrap();
        let client = AirtableClient::new(config).unwrap();
        assert_eq!(client.config().base_url, "https://api.airtable.com/v0");
    }

    #[test]
    fn test_zero_max_pages_rejected() {
        let config: AirtableConfig = serde_json::from_str(r#"{"max_pages": 0}"#).unwrap();
        let result = AirtableClient::new(config);
        assert!(matches!(result, Err(DataError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_classify_unauthorized() {
        let error = classify_failure(
            StatusCode::UNAUTHORIZED,
            r#"{"error":{"type":"AUTHENTICATION_REQUIRED","message":"Authentication required"}}"#,
            "/meta/bases",
        );
        assert_eq!(
            error,
            DataError::invalid_credentials("Authentication required (AUTHENTICATION_REQUIRED)")
        );
    }

    #[test]
    fn test_classify_model_not_found() {
        let error = classify_failure(
            StatusCode::FORBIDDEN,
            r#"{"error":{"type":"INVALID_PERMISSIONS_OR_MODEL_NOT_FOUND","message":"Invalid permissions, or the requested model was not found."}}"#,
            "/meta/bases/appMissing/tables",
        );
        assert!(matches!(error, DataError::NotFound(ref msg) if msg.starts_with("/meta/bases/appMissing/tables")));
    }

    #[test]
    fn test_classify_plain_404() {
        let error = classify_failure(StatusCode::NOT_FOUND, r#"{"error":"NOT_FOUND"}"#, "/app1/Nope");
        assert_eq!(error, DataError::not_found("/app1/Nope: NOT_FOUND"));
    }

    #[test]
    fn test_classify_server_error() {
        let error = classify_failure(StatusCode::BAD_GATEWAY, "upstream down", "/meta/bases");
        assert!(matches!(error, DataError::Network(ref msg) if msg.contains("502")));
    }

    #[test]
    fn test_decode_body_reports_path() {
        let result: Result<TablesResponse> =
            decode_body(r#"{"tables":[{"id":"tbl1","name":"Tasks","fields":[{"id":"f1","type":"number"}]}]}"#);
        match result {
            Err(DataError::UpstreamFormat(msg)) => assert!(msg.contains("tables[0].fields[0]")),
            other => panic!("expected upstream format error, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_body_missing_array() {
        let result: Result<RecordsResponse> = decode_body(r#"{"offset":"abc"}"#);
        assert!(matches!(result, Err(DataError::UpstreamFormat(_))));
    }
}
