//! Bootstrap module for initializing services.
//!
//! Wires the scanner configuration to the chain registry and the concurrent scanner.
//!
//! # Services
//! - `ChainService`: Chain registry, downloaded on first use or on request
//! - `ScannerService`: Concurrent scanner over an HTTP JSON-RPC client

use std::{error::Error, sync::Arc};

use log::info;

use crate::{
	models::{ChainDescriptor, ScannerConfig},
	repositories::{ChainRepository, ChainService},
	services::{
		blockchain::{EvmClient, HttpTransportClient},
		scanner::{ProgressReporter, ScannerService},
	},
};

/// Type alias for handling ServiceResult
pub type Result<T> = std::result::Result<T, Box<dyn Error>>;

/// Scanner backed by the HTTP transport
pub type HttpScanner = ScannerService<EvmClient<HttpTransportClient>>;

/// Loads the chain registry.
///
/// The registry is downloaded from `config.chainlist_url` when the file at
/// `config.chains_path` does not exist yet or when `force_refresh` is set.
///
/// # Errors
/// Returns an error if the registry can neither be downloaded nor read from disk
pub async fn initialize_chain_registry(
	config: &ScannerConfig,
	force_refresh: bool,
) -> Result<ChainService<ChainRepository>> {
	let repository = if force_refresh || !config.chains_path.exists() {
		ChainRepository::refresh(
			&config.chainlist_url,
			&config.chains_path,
			config.request_timeout,
		)
		.await?
	} else {
		ChainRepository::new(Some(&config.chains_path))?
	};

	let service = ChainService::new_with_repository(repository);
	info!(
		"Loaded {} chains from {}",
		service.count(),
		config.chains_path.display()
	);
	Ok(service)
}

/// Creates a scanner over `chains` using the configured transport settings
///
/// # Errors
/// Returns an error if the HTTP client cannot be built
pub fn create_scanner(
	config: &ScannerConfig,
	chains: Vec<ChainDescriptor>,
	progress: Arc<dyn ProgressReporter>,
) -> Result<HttpScanner> {
	let transport = HttpTransportClient::from_config(config)?;
	let client = EvmClient::new(transport);
	Ok(ScannerService::new(client, chains).with_progress(progress))
}
