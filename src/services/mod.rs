//! Core services implementing the scanner's business logic.
//!
//! - `blockchain`: JSON-RPC transport and EVM client
//! - `scanner`: Concurrent multi-chain scanner

pub mod blockchain;
pub mod scanner;
