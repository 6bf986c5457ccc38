//! Blockchain client implementations.
//!
//! Contains chain-specific client implementations:
//! - EVM: Ethereum and EVM-compatible chains

mod evm {
	pub mod client;
}

pub use evm::client::{
	transfer_log_filter, EvmClient, EvmClientTrait, TransferDirection, TRANSFER_TOPIC,
};
