//! Shared state of a single scan.
//!
//! One `ScanContext` is created per scan and handed to every worker behind an `Arc`.
//! Workers claim chains through an atomic cursor and publish results through a mutex
//! held only for the push. Finishing a chain bumps the completed counter and reports it
//! under one lock, so reported counts never go backwards.

use std::sync::{
	atomic::{AtomicUsize, Ordering},
	Arc, Mutex, MutexGuard,
};

use crate::{
	models::{ChainDescriptor, ChainResult},
	services::scanner::progress::{ChainOutcome, ProgressReporter},
};

/// A chain queued for investigation and its 1-based position in the caller's list
#[derive(Debug, Clone)]
pub struct QueuedChain {
	pub position: usize,
	pub chain: ChainDescriptor,
}

pub struct ScanContext {
	/// Address being inspected
	pub address: String,
	/// Drop chains without balance or transactions
	pub only_with_activity: bool,
	/// Number of chains in the caller's list, for display
	pub listed: usize,
	pub progress: Arc<dyn ProgressReporter>,
	queue: Vec<QueuedChain>,
	cursor: AtomicUsize,
	completed: Mutex<usize>,
	results: Mutex<Vec<ChainResult>>,
}

impl ScanContext {
	pub fn new(
		address: String,
		only_with_activity: bool,
		listed: usize,
		queue: Vec<QueuedChain>,
		progress: Arc<dyn ProgressReporter>,
	) -> Self {
		Self {
			address,
			only_with_activity,
			listed,
			progress,
			results: Mutex::new(Vec::with_capacity(queue.len())),
			queue,
			cursor: AtomicUsize::new(0),
			completed: Mutex::new(0),
		}
	}

	/// Number of chains dispatched in this scan
	pub fn total(&self) -> usize {
		self.queue.len()
	}

	/// Claims the next unclaimed chain, or `None` once the queue is exhausted
	pub fn claim(&self) -> Option<&QueuedChain> {
		let index = self.cursor.fetch_add(1, Ordering::Relaxed);
		self.queue.get(index)
	}

	fn lock_completed(&self) -> MutexGuard<'_, usize> {
		self.completed
			.lock()
			.unwrap_or_else(|poisoned| poisoned.into_inner())
	}

	/// Counts `chain` as finished, reports it and returns the new count
	///
	/// The reporter is called while the counter is still locked.
	pub fn finish(&self, chain: &ChainDescriptor, outcome: ChainOutcome) -> usize {
		let mut completed = self.lock_completed();
		*completed += 1;
		self.progress
			.chain_finished(*completed, self.total(), chain, outcome);
		*completed
	}

	pub fn completed(&self) -> usize {
		*self.lock_completed()
	}

	fn lock_results(&self) -> MutexGuard<'_, Vec<ChainResult>> {
		self.results
			.lock()
			.unwrap_or_else(|poisoned| poisoned.into_inner())
	}

	/// Publishes a chain's result
	pub fn record(&self, result: ChainResult) {
		self.lock_results().push(result);
	}

	/// Takes the collected results, sorted ascending by chain id
	pub fn take_results(&self) -> Vec<ChainResult> {
		let mut results = std::mem::take(&mut *self.lock_results());
		results.sort_by_key(|result| result.chain_id);
		results
	}
}
