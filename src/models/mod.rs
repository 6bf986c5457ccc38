//! Domain models and data structures for multi-chain scanning.
//!
//! - `config`: Configuration loading and validation
//! - `core`: Chain descriptors, endpoint rules and scan results

mod config;
mod core;

pub use core::{
	is_usable_endpoint, AddressInfo, ChainDescriptor, ChainResult, ScanOptions,
	DEFAULT_WORKER_COUNT,
};

pub use config::{
	ConfigError, ConfigLoader, ScannerConfig, DEFAULT_CHAINLIST_URL, DEFAULT_CHAINS_PATH,
	DEFAULT_REQUEST_TIMEOUT_SECS,
};
