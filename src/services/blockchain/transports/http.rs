//! HTTP transport implementation for blockchain interactions.
//!
//! Sends JSON-RPC envelopes to arbitrary node endpoints with:
//! - A bounded per-request deadline (expiry counts as a failed call)
//! - Optional retries for transient errors (disabled by default)
//! - Connection pooling shared across all endpoints and workers

use anyhow::Context;
use async_trait::async_trait;
use reqwest_middleware::ClientWithMiddleware;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use url::Url;

use crate::{
	models::ScannerConfig,
	services::blockchain::transports::{
		BlockchainTransport, TransientErrorRetryStrategy, TransportError,
	},
	utils::http::{create_http_client, create_retryable_http_client, HttpRetryConfig},
};

/// HTTP transport client for JSON-RPC requests
///
/// The client is cheap to clone and safe to share across tasks; clones reuse the same
/// connection pool.
#[derive(Clone, Debug)]
pub struct HttpTransportClient {
	client: ClientWithMiddleware,
}

impl HttpTransportClient {
	/// Creates a new HTTP transport client
	///
	/// # Arguments
	/// * `request_timeout` - Deadline for a single request
	/// * `retry_config` - Retry policy for transient errors
	///
	/// # Returns
	/// * `Result<Self, anyhow::Error>` - New client instance or construction error
	pub fn new(
		request_timeout: Duration,
		retry_config: &HttpRetryConfig,
	) -> Result<Self, anyhow::Error> {
		let http_client =
			create_http_client(request_timeout).context("Failed to create HTTP client")?;

		let client = create_retryable_http_client(
			retry_config,
			http_client,
			Some(TransientErrorRetryStrategy),
		);

		Ok(Self { client })
	}

	/// Creates a new HTTP transport client from scanner settings
	pub fn from_config(config: &ScannerConfig) -> Result<Self, anyhow::Error> {
		Self::new(
			config.request_timeout,
			&HttpRetryConfig::with_max_retries(config.max_retries),
		)
	}
}

#[async_trait]
impl BlockchainTransport for HttpTransportClient {
	/// Posts a JSON-RPC request to `url` and decodes the JSON response body
	///
	/// # Errors
	/// - `InvalidUrl` if `url` does not parse
	/// - `Network` on connection failure or deadline expiry
	/// - `Http` on a non-success status
	/// - `ResponseParse` if the body is not JSON
	async fn send_raw_request<P>(
		&self,
		url: &str,
		method: &str,
		params: Option<P>,
	) -> Result<Value, TransportError>
	where
		P: Into<Value> + Send + Clone + Serialize,
	{
		let endpoint =
			Url::parse(url).map_err(|e| TransportError::invalid_url(url, e.to_string()))?;
		let request_body = self.customize_request(method, params).await;
		let body = serde_json::to_string(&request_body)
			.map_err(|e| TransportError::request_serialization(e.to_string()))?;

		let response = self
			.client
			.post(endpoint)
			.header("Content-Type", "application/json")
			.body(body)
			.send()
			.await?;

		let status = response.status();
		if !status.is_success() {
			let error_body = response.text().await.unwrap_or_default();
			return Err(TransportError::http(status.as_u16(), url, error_body));
		}

		let text = response
			.text()
			.await
			.map_err(|e| TransportError::network(e.to_string()))?;

		serde_json::from_str(&text).map_err(|e| TransportError::response_parse(e.to_string()))
	}
}
