//! Error types for the DropInBlog client
//!
//! One enum covers the whole fetch pipeline: configuration problems caught
//! before any network access, API-level failures reported by the service,
//! and transport/parsing failures propagated from the underlying layers.

use thiserror::Error;

/// Errors that can occur when fetching rendered content
#[derive(Debug, Error)]
pub enum Error {
    /// A credential required to authenticate is missing; raised before any
    /// network request is attempted
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The API answered with a failure status; the message is taken from the
    /// response body, or is the generic fallback when the body has none
    #[error("{0}")]
    Api(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to parse a JSON payload
    #[error("Failed to parse JSON payload: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_displays_the_raw_message() {
        let err = Error::Api("Not found".to_string());
        assert_eq!(err.to_string(), "Not found");
    }

    #[test]
    fn test_configuration_error_names_the_missing_credential() {
        let err = Error::Configuration("API token is not set".to_string());
        assert_eq!(err.to_string(), "configuration error: API token is not set");
    }
}
