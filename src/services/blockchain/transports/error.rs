//! Transport error types.
//!
//! Every failure to obtain a JSON body from an endpoint maps to one of these variants.
//! Callers in the scanner treat all of them alike, as "this endpoint gave no answer".

use log::debug;
use thiserror::Error;

/// Errors raised while sending a JSON-RPC request to an endpoint
#[derive(Debug, Error)]
pub enum TransportError {
	/// The endpoint URL could not be parsed
	#[error("Invalid endpoint URL '{url}': {message}")]
	InvalidUrl { url: String, message: String },

	/// Connection failures, timeouts and other errors before a response arrived
	#[error("Network error: {0}")]
	Network(String),

	/// The endpoint answered with a non-success HTTP status
	#[error("HTTP error: status {status} from {url}: {body}")]
	Http {
		status: u16,
		url: String,
		body: String,
	},

	/// The response body was not valid JSON
	#[error("Failed to parse response: {0}")]
	ResponseParse(String),

	/// The request body could not be serialized
	#[error("Failed to serialize request: {0}")]
	RequestSerialization(String),
}

impl TransportError {
	/// Creates a new invalid URL error with logging
	pub fn invalid_url(url: impl Into<String>, message: impl Into<String>) -> Self {
		let error = Self::InvalidUrl {
			url: url.into(),
			message: message.into(),
		};
		debug!("{}", error);
		error
	}

	/// Creates a new network error with logging
	pub fn network(msg: impl Into<String>) -> Self {
		let error = Self::Network(msg.into());
		debug!("{}", error);
		error
	}

	/// Creates a new HTTP status error with logging
	pub fn http(status: u16, url: impl Into<String>, body: impl Into<String>) -> Self {
		let error = Self::Http {
			status,
			url: url.into(),
			body: body.into(),
		};
		debug!("{}", error);
		error
	}

	/// Creates a new response parse error with logging
	pub fn response_parse(msg: impl Into<String>) -> Self {
		let error = Self::ResponseParse(msg.into());
		debug!("{}", error);
		error
	}

	/// Creates a new request serialization error with logging
	pub fn request_serialization(msg: impl Into<String>) -> Self {
		let error = Self::RequestSerialization(msg.into());
		debug!("{}", error);
		error
	}
}

impl From<reqwest_middleware::Error> for TransportError {
	fn from(err: reqwest_middleware::Error) -> Self {
		Self::network(err.to_string())
	}
}
