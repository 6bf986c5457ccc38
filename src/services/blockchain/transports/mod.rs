//! Network transport implementations for blockchain clients.
//!
//! A transport delivers one JSON-RPC envelope to one endpoint and hands back the decoded
//! JSON body. Endpoint selection and failover live above this layer, in the scanner.
//!
//! - `BlockchainTransport`: the transport capability the RPC client is generic over
//! - `HttpTransportClient`: HTTP implementation backed by reqwest

mod error;
mod http;

pub use error::TransportError;
pub use http::HttpTransportClient;

use reqwest_middleware::Error as MiddlewareError;
use reqwest_retry::{
	default_on_request_failure, default_on_request_success, Retryable, RetryableStrategy,
};
use serde::Serialize;
use serde_json::{json, Value};

/// Base trait for all blockchain transport clients
#[async_trait::async_trait]
pub trait BlockchainTransport: Send + Sync {
	/// Sends a JSON-RPC request to `url` and returns the raw response body
	///
	/// # Arguments
	/// * `url` - Endpoint to send the request to
	/// * `method` - The JSON-RPC method name to call
	/// * `params` - Optional parameters for the method call
	///
	/// # Returns
	/// * `Result<Value, TransportError>` - The full JSON-RPC response envelope or an error
	async fn send_raw_request<P>(
		&self,
		url: &str,
		method: &str,
		params: Option<P>,
	) -> Result<Value, TransportError>
	where
		P: Into<Value> + Send + Clone + Serialize;

	/// Builds the request body for a method call
	async fn customize_request<P>(&self, method: &str, params: Option<P>) -> Value
	where
		P: Into<Value> + Send + Clone + Serialize,
	{
		json!({
			"jsonrpc": "2.0",
			"method": method,
			"params": params.map(|p| p.into()).unwrap_or_else(|| json!([])),
			"id": 1
		})
	}
}

/// Retry strategy for transient HTTP failures.
///
/// Retries connection errors, timeouts, `429 Too Many Requests` and 5xx responses;
/// everything else is final.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransientErrorRetryStrategy;

impl RetryableStrategy for TransientErrorRetryStrategy {
	fn handle(&self, res: &Result<reqwest::Response, MiddlewareError>) -> Option<Retryable> {
		match res {
			Ok(success) => default_on_request_success(success),
			Err(error) => default_on_request_failure(error),
		}
	}
}
