//! Blockchain client interfaces and implementations.
//!
//! Provides the pieces used to question a node about an account:
//!
//! - EVM client issuing the account queries
//! - Network transport implementations
//! - Error handling for blockchain operations

mod clients;
mod error;
mod transports;

pub use clients::{
	transfer_log_filter, EvmClient, EvmClientTrait, TransferDirection, TRANSFER_TOPIC,
};
pub use error::BlockChainError;
pub use transports::{
	BlockchainTransport, HttpTransportClient, TransientErrorRetryStrategy, TransportError,
};
