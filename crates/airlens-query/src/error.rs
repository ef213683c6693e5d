use thiserror::Error;

/// Unified error type for all metadata and record operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    /// Missing, blank or rejected credential
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Collection or table not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Transport failure or unexpected upstream status
    #[error("Network error: {0}")]
    Network(String),

    /// Upstream body did not have the expected shape
    #[error("Unexpected upstream response: {0}")]
    UpstreamFormat(String),

    /// Missing or invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Upstream kept returning a cursor past the configured page cap
    #[error("Pagination stopped after {0} pages")]
    PageLimitExceeded(usize),
}

impl DataError {
    /// Create a "not found" error with custom message
    pub fn not_found(msg: impl Into<String>) -> Self {
        DataError::NotFound(msg.into())
    }

    /// Create an invalid credentials error
    pub fn invalid_credentials(msg: impl Into<String>) -> Self {
        DataError::InvalidCredentials(msg.into())
    }

    /// Create an invalid configuration error
    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        DataError::InvalidConfiguration(msg.into())
    }

    pub fn network(msg: impl Into<String>) -> Self {
        DataError::Network(msg.into())
    }

    pub fn upstream_format(msg: impl Into<String>) -> Self {
        DataError::UpstreamFormat(msg.into())
    }

    /// Malformed bodies count as network-class failures alongside transport errors
    pub fn is_network(&self) -> bool {
        matches!(self, DataError::Network(_) | DataError::UpstreamFormat(_))
    }
}

pub type Result<T> = std::result::Result<T, DataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_format_is_network_class() {
        assert!(DataError::upstream_format("missing `tables`").is_network());
        assert!(DataError::network("connection reset").is_network());
        assert!(!DataError::not_found("table Tasks").is_network());
        assert!(!DataError::invalid_credentials("blank").is_network());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            DataError::not_found("table Tasks").to_string(),
            "Not found: table Tasks"
        );
        assert_eq!(
            DataError::PageLimitExceeded(3).to_string(),
            "Pagination stopped after 3 pages"
        );
    }
}
