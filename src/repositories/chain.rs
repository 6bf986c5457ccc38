//! Chain registry repository implementation.
//!
//! Provides storage and lookup of chain descriptors loaded from a chainlist-format file,
//! and refreshes that file from the published registry.

use std::{collections::BTreeMap, path::Path};

use log::info;

use crate::{
	models::{ChainDescriptor, ConfigLoader},
	repositories::error::RepositoryError,
	utils::http::create_http_client,
};

/// Repository of chain descriptors keyed by chain id
pub struct ChainRepository {
	pub chains: BTreeMap<u64, ChainDescriptor>,
}

impl ChainRepository {
	/// Loads the registry from `path`, or the default location
	pub fn new(path: Option<&Path>) -> Result<Self, RepositoryError> {
		let chains = ChainDescriptor::load_all(path)
			.map_err(|e| RepositoryError::load_error(format!("Failed to load chains: {}", e)))?;
		Ok(ChainRepository { chains })
	}

	/// Builds a repository from chains already in memory
	pub fn from_chains(chains: impl IntoIterator<Item = ChainDescriptor>) -> Self {
		Self {
			chains: chains
				.into_iter()
				.map(|chain| (chain.chain_id, chain))
				.collect(),
		}
	}

	/// Downloads the registry from `url`, stores it at `path` and loads it
	///
	/// The parent directory of `path` is created if needed. The file on disk is only
	/// replaced once the download has parsed as a chain registry.
	pub async fn refresh(
		url: &str,
		path: &Path,
		request_timeout: std::time::Duration,
	) -> Result<Self, RepositoryError> {
		info!("Fetching chain registry from {}", url);

		let client = create_http_client(request_timeout)?;
		let response = client.get(url).send().await?;
		let status = response.status();
		if !status.is_success() {
			return Err(RepositoryError::download_error(format!(
				"{} answered with status {}",
				url, status
			)));
		}
		let body = response.bytes().await?;

		let data: serde_json::Value = serde_json::from_slice(&body).map_err(|e| {
			RepositoryError::validation_error(format!("Registry is not valid JSON: {}", e))
		})?;
		let chains = ChainDescriptor::from_chainlist(data)?;

		if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
			std::fs::create_dir_all(parent)?;
		}
		std::fs::write(path, &body)?;

		info!("Saved {} chains to {}", chains.len(), path.display());
		Ok(Self::from_chains(chains))
	}
}

/// Interface for chain repository implementations
pub trait ChainRepositoryTrait: Send + Sync {
	fn get(&self, chain_id: u64) -> Option<ChainDescriptor>;
	fn get_all(&self) -> BTreeMap<u64, ChainDescriptor>;
}

impl ChainRepositoryTrait for ChainRepository {
	fn get(&self, chain_id: u64) -> Option<ChainDescriptor> {
		self.chains.get(&chain_id).cloned()
	}

	fn get_all(&self) -> BTreeMap<u64, ChainDescriptor> {
		self.chains.clone()
	}
}

/// Lookups over the chain registry
pub struct ChainService<T: ChainRepositoryTrait> {
	repository: T,
}

impl<T: ChainRepositoryTrait> ChainService<T> {
	pub fn new_with_repository(repository: T) -> Self {
		ChainService { repository }
	}

	/// Every chain, ascending by chain id
	pub fn get_all(&self) -> Vec<ChainDescriptor> {
		self.repository.get_all().into_values().collect()
	}

	pub fn get_by_id(&self, chain_id: u64) -> Option<ChainDescriptor> {
		self.repository.get(chain_id)
	}

	/// Finds a chain by name, ignoring case
	pub fn get_by_name(&self, name: &str) -> Option<ChainDescriptor> {
		self.repository
			.get_all()
			.into_values()
			.find(|chain| chain.name.eq_ignore_ascii_case(name))
	}

	/// Resolves a chain from a numeric id or a name
	pub fn find(&self, id_or_name: &str) -> Option<ChainDescriptor> {
		match id_or_name.trim().parse::<u64>() {
			Ok(chain_id) => self.get_by_id(chain_id),
			Err(_) => self.get_by_name(id_or_name.trim()),
		}
	}

	pub fn count(&self) -> usize {
		self.repository.get_all().len()
	}
}
