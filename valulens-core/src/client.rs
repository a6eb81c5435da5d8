//! Analysis endpoint client.
//!
//! One blocking POST per analysis request. The server performs all data
//! acquisition and financial computation; the client only submits the
//! ticker and decodes the result. Failures map onto a small structured
//! taxonomy whose Display strings are what the status line shows.

use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

use crate::config::ClientConfig;
use crate::model::AnalysisResult;

/// Fallback shown when a failing response carries no usable message.
pub const GENERIC_SERVER_ERROR: &str = "analysis request failed";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("ticker is required")]
    EmptyTicker,

    #[error("network error: {0}")]
    Network(String),

    #[error("{0}")]
    Server(String),

    #[error("unreadable analysis payload: {0}")]
    Decode(String),
}

#[derive(Serialize)]
struct AnalyzeRequest<'a> {
    ticker: &'a str,
}

/// Blocking client for the analysis endpoint.
pub struct AnalysisClient {
    http: reqwest::blocking::Client,
    endpoint: String,
}

impl AnalysisClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;
        Ok(Self { http, endpoint: config.endpoint.clone() })
    }

    /// Submit one ticker and decode the analysis result.
    ///
    /// The ticker is trimmed before use; an empty ticker never reaches
    /// the network. Any non-success status is a failure regardless of
    /// payload shape.
    pub fn analyze(&self, ticker: &str) -> Result<AnalysisResult, ClientError> {
        let ticker = ticker.trim();
        if ticker.is_empty() {
            return Err(ClientError::EmptyTicker);
        }

        let response = self
            .http
            .post(&self.endpoint)
            .json(&AnalyzeRequest { ticker })
            .send()
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(ClientError::Server(extract_error_message(&body)));
        }

        serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))
    }
}

/// Pull the server's human-readable message out of a failure body.
///
/// The contract puts it under the "error" key; anything else falls back
/// to a generic message.
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .as_ref()
        .and_then(|v| v.get("error"))
        .and_then(|v| v.as_str())
        .filter(|msg| !msg.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| GENERIC_SERVER_ERROR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_key_is_extracted() {
        assert_eq!(
            extract_error_message(r#"{"error": "Ticker history unavailable"}"#),
            "Ticker history unavailable"
        );
    }

    #[test]
    fn missing_or_blank_error_falls_back() {
        assert_eq!(extract_error_message(r#"{"detail": "nope"}"#), GENERIC_SERVER_ERROR);
        assert_eq!(extract_error_message(r#"{"error": "  "}"#), GENERIC_SERVER_ERROR);
        assert_eq!(extract_error_message("<html>502</html>"), GENERIC_SERVER_ERROR);
        assert_eq!(extract_error_message(""), GENERIC_SERVER_ERROR);
    }

    #[test]
    fn empty_ticker_fails_before_any_network_call() {
        let client = AnalysisClient::new(&ClientConfig::default()).unwrap();
        match client.analyze("   ") {
            Err(ClientError::EmptyTicker) => {}
            other => panic!("expected EmptyTicker, got {other:?}"),
        }
    }
}
