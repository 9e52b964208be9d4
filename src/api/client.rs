//! HTTP client for the launch-data endpoint.
//!
//! The entire dataset is fetched in one GET; all sorting and paging happens
//! client-side, so no query parameters are sent. The fetch has a request
//! timeout but no retry policy: on failure the caller keeps whatever data it
//! already has.

use std::time::Duration;

use reqwest::{header, Client, Response, StatusCode};
use tracing::{debug, instrument};

use super::error::{ApiError, Result};
use super::types::records_from_json;
use crate::model::Record;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client for fetching the launch dataset.
#[derive(Debug, Clone)]
pub struct LaunchClient {
    /// The HTTP client.
    client: Client,
    /// Full URL of the launches endpoint.
    endpoint: String,
}

impl LaunchClient {
    /// Create a client for the given endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not http(s) or the HTTP client cannot
    /// be built.
    pub fn new(endpoint: &str) -> Result<Self> {
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(ApiError::InvalidUrl(endpoint.to_string()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(ApiError::Network)?;

        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    /// The endpoint this client fetches from.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the full launch dataset.
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn fetch_launches(&self) -> Result<Vec<Record>> {
        debug!("Fetching launch dataset");

        let response = self
            .client
            .get(&self.endpoint)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let body = self.handle_response(response).await?;
        let records = records_from_json(&body).ok_or_else(|| {
            ApiError::InvalidResponse("expected a JSON array of objects".to_string())
        })?;

        debug!(count = records.len(), "Fetched launch records");
        Ok(records)
    }

    /// Handle the HTTP response, checking the status and parsing JSON.
    async fn handle_response(&self, response: Response) -> Result<serde_json::Value> {
        let status = response.status();

        if status.is_success() {
            response
                .json::<serde_json::Value>()
                .await
                .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse response: {}", e)))
        } else {
            let body = response.text().await.unwrap_or_default();
            debug!(%status, "Error response body: {}", body);
            Err(Self::error_from_response(status, &self.endpoint, &body))
        }
    }

    /// Create an appropriate error from an HTTP error response.
    fn error_from_response(status: StatusCode, url: &str, body: &str) -> ApiError {
        let context = if body.is_empty() {
            url.to_string()
        } else {
            // The SpaceX API reports errors as {"error": "..."}.
            serde_json::from_str::<serde_json::Value>(body)
                .ok()
                .and_then(|json| {
                    json.get("error")
                        .and_then(|v| v.as_str())
                        .map(str::to_string)
                })
                .unwrap_or_else(|| url.to_string())
        };

        ApiError::from_status(status, &context)
    }
}
