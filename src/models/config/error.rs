//! Configuration error types.
//!
//! Raised while reading scanner settings from the environment or loading a chain
//! registry file from disk.

use log::error;
use std::{error::Error, fmt};

/// Errors raised by scanner settings and registry files
#[derive(Debug)]
pub enum ConfigError {
	/// A setting is out of range, e.g. `SCAN_WORKERS=0`
	InvalidSetting(String),

	/// A setting or registry document could not be decoded
	Unparsable(String),

	/// The registry file is missing, unreadable or not a `.json` file
	RegistryFile(String),
}

impl ConfigError {
	fn format_message(&self) -> String {
		match self {
			Self::InvalidSetting(msg) => format!("Invalid setting: {}", msg),
			Self::Unparsable(msg) => format!("Cannot parse: {}", msg),
			Self::RegistryFile(msg) => format!("Registry file error: {}", msg),
		}
	}

	/// Logs and returns an `InvalidSetting` error
	pub fn invalid_setting(msg: impl Into<String>) -> Self {
		let error = Self::InvalidSetting(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Logs and returns an `Unparsable` error
	pub fn unparsable(msg: impl Into<String>) -> Self {
		let error = Self::Unparsable(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Logs and returns a `RegistryFile` error
	pub fn registry_file(msg: impl Into<String>) -> Self {
		let error = Self::RegistryFile(msg.into());
		error!("{}", error.format_message());
		error
	}
}

impl fmt::Display for ConfigError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
	fn from(err: std::io::Error) -> Self {
		Self::registry_file(err.to_string())
	}
}

impl From<serde_json::Error> for ConfigError {
	fn from(err: serde_json::Error) -> Self {
		Self::unparsable(err.to_string())
	}
}
