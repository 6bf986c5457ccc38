//! EVM Chain Scanner library.
//!
//! Inspects an account on every EVM-compatible chain known to the chain registry: for each
//! chain it queries a node for balance, transaction count and contract status, failing over
//! between the chain's candidate RPC endpoints, and aggregates the answers into a single
//! report ordered by chain id.
//!
//! # Modules
//! - `bootstrap`: Wires configuration, registry and scanner together
//! - `models`: Chain descriptors, scan results and configuration
//! - `repositories`: Chain registry storage and lookups
//! - `services`: JSON-RPC client, transports and the concurrent scanner
//! - `utils`: Numeric codec, address helpers, logging and HTTP helpers

pub mod bootstrap;
pub mod models;
pub mod repositories;
pub mod services;
pub mod utils;
