//! Error types for repository operations.
//!
//! Errors raised while loading, downloading or querying the chain registry.

use log::error;
use std::error::Error;
use std::fmt;

use crate::models::ConfigError;

/// Errors that can occur during repository operations
#[derive(Debug)]
pub enum RepositoryError {
	/// Error that occurs when configuration validation fails
	ValidationError(String),

	/// Error that occurs when loading the registry from disk
	LoadError(String),

	/// Error that occurs when downloading the registry
	DownloadError(String),
}

impl RepositoryError {
	/// Format an error message for display
	///
	/// Creates a human-readable error message based on the error type.
	fn format_message(&self) -> String {
		match self {
			Self::ValidationError(msg) => format!("Validation error: {}", msg),
			Self::LoadError(msg) => format!("Load error: {}", msg),
			Self::DownloadError(msg) => format!("Download error: {}", msg),
		}
	}

	/// Create a new validation error with the given message
	///
	/// Also logs the error message at the error level.
	pub fn validation_error(msg: impl Into<String>) -> Self {
		let error = Self::ValidationError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Create a new load error with the given message
	///
	/// Also logs the error message at the error level.
	pub fn load_error(msg: impl Into<String>) -> Self {
		let error = Self::LoadError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Create a new download error with the given message
	///
	/// Also logs the error message at the error level.
	pub fn download_error(msg: impl Into<String>) -> Self {
		let error = Self::DownloadError(msg.into());
		error!("{}", error.format_message());
		error
	}
}

impl fmt::Display for RepositoryError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl Error for RepositoryError {}

impl From<std::io::Error> for RepositoryError {
	fn from(err: std::io::Error) -> Self {
		Self::load_error(err.to_string())
	}
}

impl From<ConfigError> for RepositoryError {
	fn from(err: ConfigError) -> Self {
		Self::load_error(err.to_string())
	}
}

impl From<reqwest::Error> for RepositoryError {
	fn from(err: reqwest::Error) -> Self {
		Self::download_error(err.to_string())
	}
}
