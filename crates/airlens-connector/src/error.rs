use airlens_query::DataError;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

/// The single user-facing error a callback ends with
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
#[error("{text}")]
pub struct UserError {
    /// Shown to the user
    pub text: String,
    /// Shown to admins debugging the connector
    pub debug_text: String,
}

impl UserError {
    pub fn new(text: impl Into<String>, debug_text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            debug_text: debug_text.into(),
        }
    }

    pub fn fetching_bases(error: &DataError) -> Self {
        let message = format!("Error fetching bases: {}", error);
        Self::new(message.clone(), message)
    }

    pub fn fetching_tables(error: &DataError) -> Self {
        let message = format!("Error fetching tables: {}", error);
        Self::new(message.clone(), message)
    }

    pub fn table_not_found(table_name: &str) -> Self {
        Self::new(
            "Table not found. Please check the table name.",
            format!("Table not found: {}", table_name),
        )
    }

    pub fn fetching_records(error: &DataError) -> Self {
        Self::new(
            "Failed to fetch records. Please check your configuration.",
            format!("Error fetching records: {}", error),
        )
    }

    pub fn missing_parameter(name: &str) -> Self {
        Self::new(
            "The connector configuration is incomplete. Please finish all setup steps.",
            format!("Missing configuration parameter: {}", name),
        )
    }
}

/// Host capability that surfaces an error to the user
pub trait ErrorReporter: Send + Sync {
    fn report(&self, error: &UserError);
}

/// Reporter that only logs; the host reads the returned `Err`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, error: &UserError) {
        warn!(debug_text = %error.debug_text, "{}", error.text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetching_bases_message() {
        let err = UserError::fetching_bases(&DataError::invalid_credentials("API key is missing"));
        assert_eq!(
            err.text,
            "Error fetching bases: Invalid credentials: API key is missing"
        );
        assert_eq!(err.text, err.debug_text);
    }

    #[test]
    fn test_records_message_hides_detail() {
        let err = UserError::fetching_records(&DataError::network("connection reset"));
        assert_eq!(
            err.text,
            "Failed to fetch records. Please check your configuration."
        );
        assert_eq!(
            err.debug_text,
            "Error fetching records: Network error: connection reset"
        );
    }

    #[test]
    fn test_serialize_for_host() {
        let err = UserError::table_not_found("Tasks");
        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(value["debugText"], "Table not found: Tasks");
        assert_eq!(err.to_string(), "Table not found. Please check the table name.");
    }
}
