//! EVM-compatible blockchain client implementation.
//!
//! Queries a single node endpoint for the state of an account: native balance,
//! transaction count, deployed code and ERC-20 transfer history. Every query degrades to
//! an absent or default value when the endpoint fails, so one bad endpoint never aborts
//! a scan.

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::{
	models::AddressInfo,
	services::blockchain::{
		transports::{BlockchainTransport, HttpTransportClient},
		BlockChainError,
	},
	utils::{address::to_topic, hex::hex_to_u64, hex::wei_hex_to_eth},
};

/// keccak256("Transfer(address,address,uint256)")
pub const TRANSFER_TOPIC: &str =
	"0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef";

/// Direction of an ERC-20 transfer relative to the inspected address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferDirection {
	Incoming,
	Outgoing,
}

/// Builds the `eth_getLogs` filter matching transfers to or from `address`
pub fn transfer_log_filter(address: &str, direction: TransferDirection) -> Value {
	let topic = to_topic(address);
	let (from, to) = match direction {
		TransferDirection::Incoming => (Value::Null, json!(topic)),
		TransferDirection::Outgoing => (json!(topic), Value::Null),
	};

	json!({
		"fromBlock": "earliest",
		"toBlock": "latest",
		"topics": [TRANSFER_TOPIC, from, to]
	})
}

/// Client implementation for Ethereum Virtual Machine (EVM) compatible blockchains
///
/// Stateless apart from the transport: every query names the endpoint it goes to, so one
/// client serves all chains and all scan workers.
#[derive(Clone, Debug)]
pub struct EvmClient<T: Send + Sync + Clone> {
	/// The underlying transport client for RPC communication
	transport: T,
}

impl<T: Send + Sync + Clone> EvmClient<T> {
	/// Creates a new EVM client instance with a specific transport client
	pub fn new_with_transport(transport: T) -> Self {
		Self { transport }
	}
}

impl EvmClient<HttpTransportClient> {
	/// Creates a new EVM client over the given HTTP transport
	pub fn new(transport: HttpTransportClient) -> Self {
		Self::new_with_transport(transport)
	}
}

impl<T: Send + Sync + Clone + BlockchainTransport> EvmClient<T> {
	/// Issues one JSON-RPC call and extracts its `result` field
	///
	/// # Errors
	/// - `ConnectionError` if the transport failed
	/// - `RequestError` if the response carries no `result`
	pub async fn call(
		&self,
		rpc_url: &str,
		method: &str,
		params: Value,
	) -> Result<Value, BlockChainError> {
		let response = self
			.transport
			.send_raw_request(rpc_url, method, Some(params))
			.await?;

		match response.get("result") {
			Some(result) => Ok(result.clone()),
			None => match response.get("error") {
				Some(error) => Err(BlockChainError::request_error(format!(
					"{} failed on {}: {}",
					method, rpc_url, error
				))),
				None => Err(BlockChainError::request_error(format!(
					"{} on {}: Missing 'result' field",
					method, rpc_url
				))),
			},
		}
	}

	/// Runs a call and keeps its result only if it is a string
	async fn call_for_string(&self, rpc_url: &str, method: &str, params: Value) -> Option<String> {
		self.call(rpc_url, method, params)
			.await
			.ok()
			.and_then(|result| result.as_str().map(str::to_string))
	}

	/// Runs an `eth_getLogs` query and reports whether any log matched
	async fn has_transfer_logs(
		&self,
		rpc_url: &str,
		address: &str,
		direction: TransferDirection,
	) -> bool {
		let filter = transfer_log_filter(address, direction);
		match self.call(rpc_url, "eth_getLogs", json!([filter])).await {
			Ok(Value::Array(logs)) => !logs.is_empty(),
			_ => false,
		}
	}
}

/// Account queries against a single EVM endpoint
#[async_trait]
pub trait EvmClientTrait: Send + Sync {
	/// Retrieves the native balance in wei
	///
	/// # Returns
	/// * `Option<String>` - The hex-encoded balance, or `None` if the call failed
	async fn get_balance(&self, rpc_url: &str, address: &str) -> Option<String>;

	/// Retrieves the transaction count (nonce)
	///
	/// # Returns
	/// * `Option<u64>` - The count, or `None` if the call failed. Unparsable counts decode to 0.
	async fn get_transaction_count(&self, rpc_url: &str, address: &str) -> Option<u64>;

	/// Returns true if code is deployed at the address. Failed calls report `false`.
	async fn is_contract(&self, rpc_url: &str, address: &str) -> bool;

	/// Returns true if the address received or sent any ERC-20 `Transfer`.
	/// Failed calls report `false`.
	async fn has_token_activity(&self, rpc_url: &str, address: &str) -> bool;

	/// Collects everything the endpoint knows about the address
	///
	/// Balance, transaction count and contract status are always queried; token activity
	/// only for non-contract addresses. Each failed query falls back to its default, and
	/// an empty `balance_wei` in the returned info marks an endpoint that gave no answer.
	async fn check_address(&self, rpc_url: &str, address: &str) -> AddressInfo;
}

#[async_trait]
impl<T: Send + Sync + Clone + BlockchainTransport> EvmClientTrait for EvmClient<T> {
	async fn get_balance(&self, rpc_url: &str, address: &str) -> Option<String> {
		self.call_for_string(rpc_url, "eth_getBalance", json!([address, "latest"]))
			.await
	}

	async fn get_transaction_count(&self, rpc_url: &str, address: &str) -> Option<u64> {
		self.call_for_string(rpc_url, "eth_getTransactionCount", json!([address, "latest"]))
			.await
			.map(|count| hex_to_u64(&count))
	}

	async fn is_contract(&self, rpc_url: &str, address: &str) -> bool {
		self.call_for_string(rpc_url, "eth_getCode", json!([address, "latest"]))
			.await
			.is_some_and(|code| code.len() > 2)
	}

	async fn has_token_activity(&self, rpc_url: &str, address: &str) -> bool {
		if self
			.has_transfer_logs(rpc_url, address, TransferDirection::Incoming)
			.await
		{
			return true;
		}

		self.has_transfer_logs(rpc_url, address, TransferDirection::Outgoing)
			.await
	}

	async fn check_address(&self, rpc_url: &str, address: &str) -> AddressInfo {
		let (balance, tx_count, is_contract) = futures::join!(
			self.get_balance(rpc_url, address),
			self.get_transaction_count(rpc_url, address),
			self.is_contract(rpc_url, address),
		);

		// Log scans are expensive and say little about contracts
		let has_token_activity = if is_contract {
			false
		} else {
			self.has_token_activity(rpc_url, address).await
		};

		let (balance_wei, balance_eth) = match balance {
			Some(wei) => {
				let eth = wei_hex_to_eth(&wei);
				(wei, eth)
			}
			None => (String::new(), String::new()),
		};

		AddressInfo {
			balance_wei,
			balance_eth,
			tx_count: tx_count.unwrap_or(0),
			has_token_activity,
			is_contract,
		}
	}
}
