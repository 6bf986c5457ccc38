//! Configuration loading.
//!
//! - `ConfigLoader`: common interface for loading configuration files
//! - `chain_config`: chainlist-format chain registry files
//! - `scanner_config`: scanner settings resolved from the environment

use std::path::Path;

mod chain_config;
mod error;
mod scanner_config;

pub use error::ConfigError;
pub use scanner_config::{
	ScannerConfig, DEFAULT_CHAINLIST_URL, DEFAULT_CHAINS_PATH, DEFAULT_REQUEST_TIMEOUT_SECS,
};

/// Common interface for loading configuration files
pub trait ConfigLoader: Sized {
	/// Key each loaded entry is indexed by
	type Key;

	/// Loads every valid entry found at `path` (or the default location)
	fn load_all<T>(path: Option<&Path>) -> Result<T, ConfigError>
	where
		T: FromIterator<(Self::Key, Self)>;

	/// Loads the entries stored in a single file
	fn load_from_path(path: &Path) -> Result<Vec<Self>, ConfigError>;

	fn validate(&self) -> Result<(), String>;

	fn is_json_file(path: &Path) -> bool {
		path.extension()
			.map(|ext| ext.to_string_lossy().to_lowercase() == "json")
			.unwrap_or(false)
	}
}
