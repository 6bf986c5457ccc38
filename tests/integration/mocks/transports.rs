use mockall::mock;
use serde::Serialize;
use serde_json::Value;

use evm_chain_scanner::services::blockchain::{BlockchainTransport, TransportError};

// Mock implementation of a JSON-RPC transport.
// Used for testing the EVM client without a node.
// Provides functionality to simulate raw JSON-RPC request handling per endpoint.
mock! {
	pub EvmTransportClient {
		pub async fn send_raw_request(
			&self,
			url: &str,
			method: &str,
			params: Option<Value>,
		) -> Result<Value, TransportError>;
	}

	impl Clone for EvmTransportClient {
		fn clone(&self) -> Self;
	}
}

#[async_trait::async_trait]
impl BlockchainTransport for MockEvmTransportClient {
	async fn send_raw_request<P>(
		&self,
		url: &str,
		method: &str,
		params: Option<P>,
	) -> Result<Value, TransportError>
	where
		P: Into<Value> + Send + Clone + Serialize,
	{
		self.send_raw_request(url, method, params.map(|p| p.into()))
			.await
	}
}
