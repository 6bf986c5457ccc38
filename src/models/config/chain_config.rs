//! Chainlist-format chain registry loading.
//!
//! Reads the JSON array published at `https://chainlist.org/rpcs.json` and converts each
//! record into a [`ChainDescriptor`]. Records that cannot be read, or that carry no chain
//! id, are skipped rather than failing the whole file.

use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

use crate::models::{
	config::{error::ConfigError, scanner_config::DEFAULT_CHAINS_PATH},
	ChainDescriptor, ConfigLoader,
};

const DEFAULT_SYMBOL: &str = "ETH";
const DEFAULT_NAME: &str = "Unknown";

#[derive(Debug, Deserialize)]
struct NativeCurrency {
	symbol: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RpcEntry {
	Url(String),
	Object { url: Option<String> },
}

#[derive(Debug, Deserialize)]
struct Explorer {
	url: Option<String>,
}

/// A single record of the chainlist registry
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChainlistRecord {
	#[serde(default)]
	chain_id: u64,
	name: Option<String>,
	#[serde(default)]
	is_testnet: bool,
	native_currency: Option<NativeCurrency>,
	#[serde(default)]
	rpc: Vec<RpcEntry>,
	#[serde(default)]
	explorers: Vec<Explorer>,
	#[serde(rename = "infoURL")]
	info_url: Option<String>,
}

impl From<ChainlistRecord> for ChainDescriptor {
	fn from(record: ChainlistRecord) -> Self {
		let rpc_urls = record
			.rpc
			.into_iter()
			.filter_map(|entry| match entry {
				RpcEntry::Url(url) => Some(url),
				RpcEntry::Object { url } => url,
			})
			.collect();

		let explorer_url = match record.explorers.into_iter().next() {
			Some(explorer) => explorer.url.unwrap_or_default(),
			None => record.info_url.unwrap_or_default(),
		};

		ChainDescriptor {
			chain_id: record.chain_id,
			name: record.name.unwrap_or_else(|| DEFAULT_NAME.to_string()),
			symbol: record
				.native_currency
				.and_then(|currency| currency.symbol)
				.unwrap_or_else(|| DEFAULT_SYMBOL.to_string()),
			rpc_urls,
			explorer_url,
			is_testnet: record.is_testnet,
		}
	}
}

impl ChainDescriptor {
	/// Parses chainlist records from an already-decoded JSON array
	pub fn from_chainlist(data: Value) -> Result<Vec<Self>, ConfigError> {
		let Value::Array(records) = data else {
			return Err(ConfigError::unparsable(
				"chain registry must be a JSON array",
			));
		};

		let mut chains = Vec::with_capacity(records.len());
		for record in records {
			match serde_json::from_value::<ChainlistRecord>(record) {
				Ok(record) => {
					let chain = ChainDescriptor::from(record);
					if let Err(reason) = chain.validate() {
						tracing::trace!(chain = %chain.name, "Skipping chain: {}", reason);
						continue;
					}
					chains.push(chain);
				}
				Err(e) => tracing::debug!("Skipping unreadable chain record: {}", e),
			}
		}

		Ok(chains)
	}
}

impl ConfigLoader for ChainDescriptor {
	type Key = u64;

	fn load_all<T>(path: Option<&Path>) -> Result<T, ConfigError>
	where
		T: FromIterator<(u64, Self)>,
	{
		let chains_file = path.unwrap_or(Path::new(DEFAULT_CHAINS_PATH));

		if !chains_file.exists() {
			return Err(ConfigError::registry_file(format!(
				"chain registry not found: {}",
				chains_file.display()
			)));
		}

		if !Self::is_json_file(chains_file) {
			return Err(ConfigError::registry_file(format!(
				"chain registry must be a .json file: {}",
				chains_file.display()
			)));
		}

		let chains = Self::load_from_path(chains_file)?;
		Ok(T::from_iter(
			chains.into_iter().map(|chain| (chain.chain_id, chain)),
		))
	}

	fn load_from_path(path: &Path) -> Result<Vec<Self>, ConfigError> {
		let file = std::fs::File::open(path)?;
		let data: Value = serde_json::from_reader(std::io::BufReader::new(file))?;
		Self::from_chainlist(data)
	}

	fn validate(&self) -> Result<(), String> {
		if self.chain_id == 0 {
			return Err("chain id must be greater than 0".to_string());
		}

		Ok(())
	}
}
