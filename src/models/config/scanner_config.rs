//! Scanner settings.
//!
//! Values come from environment variables (optionally populated from a `.env` file) and
//! fall back to defaults when unset.

use std::{env, path::PathBuf, str::FromStr, time::Duration};

use crate::models::{config::error::ConfigError, DEFAULT_WORKER_COUNT};

/// Default location of the chain registry file
pub const DEFAULT_CHAINS_PATH: &str = "data/rpcs.json";

/// Default source of the chain registry
pub const DEFAULT_CHAINLIST_URL: &str = "https://chainlist.org/rpcs.json";

/// Default per-request deadline
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

const MAX_RETRIES_LIMIT: u32 = 10;

/// Settings shared by the registry and the scanner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannerConfig {
	/// Where the chain registry is stored (`CHAINS_FILE`)
	pub chains_path: PathBuf,
	/// Where the chain registry is downloaded from (`CHAINLIST_URL`)
	pub chainlist_url: String,
	/// Number of concurrent scan workers (`SCAN_WORKERS`)
	pub workers: usize,
	/// Deadline for a single JSON-RPC request (`RPC_TIMEOUT_SECS`)
	pub request_timeout: Duration,
	/// Transient-error retries per request (`RPC_MAX_RETRIES`)
	pub max_retries: u32,
}

impl Default for ScannerConfig {
	fn default() -> Self {
		Self {
			chains_path: PathBuf::from(DEFAULT_CHAINS_PATH),
			chainlist_url: DEFAULT_CHAINLIST_URL.to_string(),
			workers: DEFAULT_WORKER_COUNT,
			request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
			max_retries: 0,
		}
	}
}

fn env_value<T: FromStr>(key: &str) -> Result<Option<T>, ConfigError>
where
	T::Err: std::fmt::Display,
{
	match env::var(key) {
		Ok(raw) if raw.trim().is_empty() => Ok(None),
		Ok(raw) => raw
			.trim()
			.parse::<T>()
			.map(Some)
			.map_err(|e| ConfigError::unparsable(format!("invalid {} '{}': {}", key, raw, e))),
		Err(_) => Ok(None),
	}
}

impl ScannerConfig {
	/// Builds the configuration from environment variables
	pub fn from_env() -> Result<Self, ConfigError> {
		let defaults = Self::default();

		let config = Self {
			chains_path: env_value::<PathBuf>("CHAINS_FILE")?.unwrap_or(defaults.chains_path),
			chainlist_url: env_value::<String>("CHAINLIST_URL")?
				.unwrap_or(defaults.chainlist_url),
			workers: env_value::<usize>("SCAN_WORKERS")?.unwrap_or(defaults.workers),
			request_timeout: env_value::<u64>("RPC_TIMEOUT_SECS")?
				.map(Duration::from_secs)
				.unwrap_or(defaults.request_timeout),
			max_retries: env_value::<u32>("RPC_MAX_RETRIES")?.unwrap_or(defaults.max_retries),
		};

		config.validate()?;
		Ok(config)
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.workers == 0 {
			return Err(ConfigError::invalid_setting(
				"worker count must be at least 1",
			));
		}

		if self.request_timeout < Duration::from_secs(1) {
			return Err(ConfigError::invalid_setting(
				"request timeout must be at least 1 second",
			));
		}

		if self.max_retries > MAX_RETRIES_LIMIT {
			return Err(ConfigError::invalid_setting(format!(
				"max retries must not exceed {}",
				MAX_RETRIES_LIMIT
			)));
		}

		let url = &self.chainlist_url;
		if !(url.starts_with("http://") || url.starts_with("https://")) {
			return Err(ConfigError::invalid_setting(
				"chainlist URL must start with http:// or https://",
			));
		}

		Ok(())
	}
}
