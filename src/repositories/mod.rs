//! Repository implementations for the chain registry.
//!
//! - `ChainRepository`: chain descriptors loaded from a chainlist-format file
//! - `ChainService`: id and name lookups over any `ChainRepositoryTrait`

mod chain;
mod error;

pub use chain::{ChainRepository, ChainRepositoryTrait, ChainService};
pub use error::RepositoryError;
