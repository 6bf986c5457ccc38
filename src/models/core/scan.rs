use serde::{Deserialize, Serialize};

/// Default number of concurrent scan workers
pub const DEFAULT_WORKER_COUNT: usize = 16;

/// What a single endpoint reported about an address.
///
/// An empty `balance_wei` means the endpoint produced no usable answer; a confirmed
/// zero balance is `"0x0"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AddressInfo {
	/// Balance in wei as returned by the node (hex string)
	pub balance_wei: String,
	/// Balance in whole native units (decimal string)
	pub balance_eth: String,
	/// Transaction count (nonce)
	pub tx_count: u64,
	/// Whether the address emitted or received ERC-20 transfers. Only queried for EOAs.
	pub has_token_activity: bool,
	/// Whether code is deployed at the address
	pub is_contract: bool,
}

impl AddressInfo {
	/// Returns true if the endpoint answered the balance query
	pub fn is_resolved(&self) -> bool {
		!self.balance_wei.is_empty()
	}

	/// Non-zero balance or at least one sent transaction
	pub fn has_activity(&self) -> bool {
		self.balance_eth != "0" || self.tx_count > 0
	}
}

/// One row of an aggregated scan report
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChainResult {
	pub chain_id: u64,
	pub chain_name: String,
	pub symbol: String,
	pub balance_eth: String,
	pub tx_count: u64,
	pub is_contract: bool,
	pub has_token_activity: bool,
	pub has_activity: bool,
	pub explorer_url: String,
	/// Endpoint that answered for this chain
	pub rpc_url: String,
}

/// Caller-controlled scan options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
	pub include_testnets: bool,
	/// Drop chains with zero balance and zero transactions
	pub only_with_activity: bool,
	pub worker_count: usize,
}

impl Default for ScanOptions {
	fn default() -> Self {
		Self {
			include_testnets: false,
			only_with_activity: true,
			worker_count: DEFAULT_WORKER_COUNT,
		}
	}
}
