//! API error types for the launch-data client.

use thiserror::Error;

/// Errors that can occur when fetching launch data.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Rate limited by the API.
    #[error("Rate limited: please wait before retrying")]
    RateLimited,

    /// Remote server error.
    #[error("Server error: {0}")]
    ServerError(String),

    /// Network or HTTP error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Invalid endpoint URL.
    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(String),

    /// The response body was not the expected JSON shape.
    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

/// Result type for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    /// Create an error from an HTTP status code.
    pub fn from_status(status: reqwest::StatusCode, context: &str) -> Self {
        match status.as_u16() {
            404 => ApiError::NotFound(context.to_string()),
            429 => ApiError::RateLimited,
            500..=599 => ApiError::ServerError(format!("HTTP {}: {}", status, context)),
            _ => ApiError::ServerError(format!("Unexpected HTTP {}: {}", status, context)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_from_status_not_found() {
        let err = ApiError::from_status(StatusCode::NOT_FOUND, "launches");
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[test]
    fn test_from_status_rate_limited() {
        let err = ApiError::from_status(StatusCode::TOO_MANY_REQUESTS, "launches");
        assert!(matches!(err, ApiError::RateLimited));
    }

    #[test]
    fn test_from_status_server_error() {
        let err = ApiError::from_status(StatusCode::BAD_GATEWAY, "launches");
        assert!(matches!(err, ApiError::ServerError(_)));
    }

    #[test]
    fn test_from_status_unexpected() {
        let err = ApiError::from_status(StatusCode::IM_A_TEAPOT, "launches");
        assert!(matches!(err, ApiError::ServerError(_)));
    }
}
