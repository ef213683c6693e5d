//! Response shapes of the Airtable REST API.
//!
//! Each body is deserialized straight into these types; a body that does not fit
//! is rejected at the boundary instead of flowing on as loose JSON.

use airlens_query::{Collection, Record, Table};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct BasesResponse {
    pub bases: Vec<Collection>,
    #[serde(default)]
    pub offset: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TablesResponse {
    pub tables: Vec<Table>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecordsResponse {
    pub records: Vec<Record>,
    #[serde(default)]
    pub offset: Option<String>,
}

/// Error envelope; older endpoints send the type as a bare string
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ApiErrorBody {
    Detailed {
        #[serde(rename = "type")]
        error_type: String,
        #[serde(default)]
        message: Option<String>,
    },
    Code(String),
}

impl ApiErrorBody {
    pub fn error_type(&self) -> &str {
        match self {
            ApiErrorBody::Detailed { error_type, .. } => error_type,
            ApiErrorBody::Code(code) => code,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            ApiErrorBody::Detailed { message, .. } => message.as_deref(),
            ApiErrorBody::Code(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_body_variants() {
        let detailed: ApiErrorResponse = serde_json::from_value(json!({
            "error": {"type": "INVALID_PERMISSIONS_OR_MODEL_NOT_FOUND", "message": "Invalid permissions"}
        }))
        .unwrap();
        assert_eq!(
            detailed.error.error_type(),
            "INVALID_PERMISSIONS_OR_MODEL_NOT_FOUND"
        );
        assert_eq!(detailed.error.message(), Some("Invalid permissions"));

        let code: ApiErrorResponse =
            serde_json::from_value(json!({"error": "NOT_FOUND"})).unwrap();
        assert_eq!(code.error.error_type(), "NOT_FOUND");
        assert!(code.error.message().is_none());
    }

    #[test]
    fn test_records_response_without_offset() {
        let response: RecordsResponse = serde_json::from_value(json!({
            "records": [{"id": "rec1", "createdTime": "2024-01-01T00:00:00.000Z", "fields": {"Name": "A"}}]
        }))
        .unwrap();
        assert_eq!(response.records.len(), 1);
        assert!(response.offset.is_none());
    }
}
