//! Utility modules for common functionality.
//!
//! - address: Address validation and EIP-55 checksums
//! - hex: Hex quantity decoding and wei formatting
//! - http: HTTP client construction and retry policy
//! - logging: Logging utilities
//! - tests: Builders for test instances of models

pub mod address;
pub mod hex;
pub mod http;
pub mod logging;

pub use hex::*;
