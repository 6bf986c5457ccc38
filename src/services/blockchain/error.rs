//! Blockchain error types and handling.
//!
//! Errors raised while querying a node. The public query methods of the RPC client
//! collapse these into absent/default values; the typed variants exist so the reason for
//! a failed call can be logged and tested.

use log::debug;

use crate::services::blockchain::transports::TransportError;

/// Represents possible errors that can occur during blockchain operations
#[derive(Debug)]
pub enum BlockChainError {
	/// The endpoint could not be reached or did not answer with JSON
	ConnectionError(String),

	/// The endpoint answered, but without a usable `result`
	RequestError(String),

	/// Internal errors within the blockchain client
	InternalError(String),
}

impl BlockChainError {
	/// Formats the error message based on the error type
	fn format_message(&self) -> String {
		match self {
			Self::ConnectionError(msg) => format!("Connection error: {}", msg),
			Self::RequestError(msg) => format!("Request error: {}", msg),
			Self::InternalError(msg) => format!("Internal error: {}", msg),
		}
	}

	/// Creates a new connection error with logging
	pub fn connection_error(msg: impl Into<String>) -> Self {
		let error = Self::ConnectionError(msg.into());
		debug!("{}", error.format_message());
		error
	}

	/// Creates a new request error with logging
	pub fn request_error(msg: impl Into<String>) -> Self {
		let error = Self::RequestError(msg.into());
		debug!("{}", error.format_message());
		error
	}

	/// Creates a new internal error with logging
	pub fn internal_error(msg: impl Into<String>) -> Self {
		let error = Self::InternalError(msg.into());
		debug!("{}", error.format_message());
		error
	}
}

impl std::fmt::Display for BlockChainError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl std::error::Error for BlockChainError {}

impl From<TransportError> for BlockChainError {
	fn from(err: TransportError) -> Self {
		match err {
			TransportError::RequestSerialization(_) => Self::internal_error(err.to_string()),
			_ => Self::connection_error(err.to_string()),
		}
	}
}
