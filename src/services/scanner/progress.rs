//! Scan progress reporting.
//!
//! Workers report every endpoint attempt and every finished chain. Reporters are shared
//! by all workers, so implementations must serialize their own output.

use std::{
	io::Write,
	sync::{Mutex, MutexGuard},
};

use crate::models::ChainDescriptor;

/// How a chain's investigation ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainOutcome {
	/// An endpoint answered and the chain made it into the results
	Found,
	/// An endpoint answered but the chain showed no activity and was filtered out
	Inactive,
	/// No endpoint answered
	Unresolved,
}

impl ChainOutcome {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Found => "found",
			Self::Inactive => "no activity",
			Self::Unresolved => "no response",
		}
	}
}

/// Observer of scan progress
pub trait ProgressReporter: Send + Sync {
	/// An endpoint is about to be queried
	///
	/// # Arguments
	/// * `position` - 1-based position of the chain in the caller's list
	/// * `listed` - Number of chains in the caller's list
	fn endpoint_attempt(
		&self,
		position: usize,
		listed: usize,
		chain: &ChainDescriptor,
		rpc_url: &str,
	);

	/// An endpoint gave no usable answer; the next one will be tried if any remain
	fn endpoint_failed(&self, chain: &ChainDescriptor, rpc_url: &str);

	/// A chain's investigation ended
	///
	/// # Arguments
	/// * `completed` - Chains finished so far, this one included
	/// * `total` - Chains dispatched in this scan
	fn chain_finished(
		&self,
		completed: usize,
		total: usize,
		chain: &ChainDescriptor,
		outcome: ChainOutcome,
	);

	/// Every worker has finished
	fn scan_finished(&self, found: usize, total: usize);
}

/// Reporter that discards all progress
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
	fn endpoint_attempt(&self, _: usize, _: usize, _: &ChainDescriptor, _: &str) {}

	fn endpoint_failed(&self, _: &ChainDescriptor, _: &str) {}

	fn chain_finished(&self, _: usize, _: usize, _: &ChainDescriptor, _: ChainOutcome) {}

	fn scan_finished(&self, _: usize, _: usize) {}
}

/// Reporter that prints human-readable progress lines to a writer.
///
/// Each event is written and flushed while holding a lock, so lines from concurrent
/// workers never interleave.
pub struct WriterProgress {
	writer: Mutex<Box<dyn Write + Send>>,
}

impl WriterProgress {
	pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
		Self {
			writer: Mutex::new(Box::new(writer)),
		}
	}

	/// Progress on standard error, leaving standard output for results
	pub fn stderr() -> Self {
		Self::new(std::io::stderr())
	}

	fn lock(&self) -> MutexGuard<'_, Box<dyn Write + Send>> {
		self.writer
			.lock()
			.unwrap_or_else(|poisoned| poisoned.into_inner())
	}

	fn write_line(&self, line: &str) {
		let mut writer = self.lock();
		// Best effort
		let _ = writeln!(writer, "{}", line);
		let _ = writer.flush();
	}
}

impl ProgressReporter for WriterProgress {
	fn endpoint_attempt(
		&self,
		position: usize,
		listed: usize,
		chain: &ChainDescriptor,
		rpc_url: &str,
	) {
		self.write_line(&format!(
			"[{}/{}] {} -> {}",
			position, listed, chain.name, rpc_url
		));
	}

	fn endpoint_failed(&self, chain: &ChainDescriptor, rpc_url: &str) {
		self.write_line(&format!(
			"  (no response from {} for {}, trying next RPC...)",
			rpc_url, chain.name
		));
	}

	fn chain_finished(
		&self,
		completed: usize,
		total: usize,
		chain: &ChainDescriptor,
		outcome: ChainOutcome,
	) {
		self.write_line(&format!(
			"  {}/{} done: {} ({})",
			completed,
			total,
			chain.name,
			outcome.as_str()
		));
	}

	fn scan_finished(&self, found: usize, total: usize) {
		self.write_line(&format!(
			"\nScan complete: {} of {} chain(s) reported.",
			found, total
		));
	}
}
