//! Test helper utilities for chains
//!
//! - `ChainBuilder`: Builder for creating test ChainDescriptor instances
//! - `ChainResultBuilder`: Builder for creating test ChainResult instances

use crate::models::{ChainDescriptor, ChainResult};

/// Builder for creating test ChainDescriptor instances
pub struct ChainBuilder {
	chain_id: u64,
	name: String,
	symbol: String,
	rpc_urls: Vec<String>,
	explorer_url: String,
	is_testnet: bool,
}

impl Default for ChainBuilder {
	/// Default chain builder with a single mainnet endpoint
	fn default() -> Self {
		Self {
			chain_id: 1,
			name: "Ethereum Mainnet".to_string(),
			symbol: "ETH".to_string(),
			rpc_urls: vec!["https://eth.example.com".to_string()],
			explorer_url: "https://etherscan.io".to_string(),
			is_testnet: false,
		}
	}
}

impl ChainBuilder {
	/// Create a new chain builder
	pub fn new() -> Self {
		Self::default()
	}

	pub fn chain_id(mut self, chain_id: u64) -> Self {
		self.chain_id = chain_id;
		self
	}

	pub fn name(mut self, name: &str) -> Self {
		self.name = name.to_string();
		self
	}

	pub fn symbol(mut self, symbol: &str) -> Self {
		self.symbol = symbol.to_string();
		self
	}

	/// Replace the endpoint list
	pub fn rpc_urls(mut self, urls: Vec<&str>) -> Self {
		self.rpc_urls = urls.into_iter().map(String::from).collect();
		self
	}

	/// Append one endpoint
	pub fn add_rpc_url(mut self, url: &str) -> Self {
		self.rpc_urls.push(url.to_string());
		self
	}

	pub fn explorer_url(mut self, url: &str) -> Self {
		self.explorer_url = url.to_string();
		self
	}

	pub fn testnet(mut self, is_testnet: bool) -> Self {
		self.is_testnet = is_testnet;
		self
	}

	pub fn build(self) -> ChainDescriptor {
		ChainDescriptor {
			chain_id: self.chain_id,
			name: self.name,
			symbol: self.symbol,
			rpc_urls: self.rpc_urls,
			explorer_url: self.explorer_url,
			is_testnet: self.is_testnet,
		}
	}
}

/// Builder for creating test ChainResult instances
pub struct ChainResultBuilder {
	result: ChainResult,
}

impl Default for ChainResultBuilder {
	fn default() -> Self {
		Self {
			result: ChainResult {
				chain_id: 1,
				chain_name: "Ethereum Mainnet".to_string(),
				symbol: "ETH".to_string(),
				balance_eth: "0".to_string(),
				tx_count: 0,
				is_contract: false,
				has_token_activity: false,
				has_activity: false,
				explorer_url: "https://etherscan.io".to_string(),
				rpc_url: "https://eth.example.com".to_string(),
			},
		}
	}
}

impl ChainResultBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn chain_id(mut self, chain_id: u64) -> Self {
		self.result.chain_id = chain_id;
		self
	}

	pub fn chain_name(mut self, name: &str) -> Self {
		self.result.chain_name = name.to_string();
		self
	}

	pub fn symbol(mut self, symbol: &str) -> Self {
		self.result.symbol = symbol.to_string();
		self
	}

	/// Set the balance; any value other than "0" marks the chain active
	pub fn balance_eth(mut self, balance: &str) -> Self {
		self.result.balance_eth = balance.to_string();
		self.result.has_activity = balance != "0" || self.result.tx_count > 0;
		self
	}

	/// Set the transaction count; a non-zero count marks the chain active
	pub fn tx_count(mut self, tx_count: u64) -> Self {
		self.result.tx_count = tx_count;
		self.result.has_activity = self.result.balance_eth != "0" || tx_count > 0;
		self
	}

	pub fn contract(mut self, is_contract: bool) -> Self {
		self.result.is_contract = is_contract;
		self
	}

	pub fn token_activity(mut self, has_token_activity: bool) -> Self {
		self.result.has_token_activity = has_token_activity;
		self
	}

	pub fn build(self) -> ChainResult {
		self.result
	}
}
