//! Multi-chain address scanning.
//!
//! - `service`: Worker pool that resolves each chain through endpoint failover
//! - `context`: State shared by the workers of one scan
//! - `progress`: Progress reporting hooks
//! - `report`: Rendering of results for the command line

mod context;
mod progress;
mod report;
mod service;

pub use context::{QueuedChain, ScanContext};
pub use progress::{ChainOutcome, ProgressReporter, SilentProgress, WriterProgress};
pub use report::{render_chain_list, render_json, render_table};
pub use service::{classify, filter_chains, ScannerService};
