//! Core domain models for multi-chain address scanning.
//!
//! - Chains: chain descriptors and RPC endpoint usability
//! - Scans: per-endpoint address info, per-chain results and scan options

mod chain;
mod scan;

pub use chain::{is_usable_endpoint, ChainDescriptor};
pub use scan::{AddressInfo, ChainResult, ScanOptions, DEFAULT_WORKER_COUNT};
