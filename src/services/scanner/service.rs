//! Concurrent multi-chain scanner.
//!
//! Fans one investigation per chain out over a fixed pool of tokio workers. Each worker
//! claims the next chain from a shared cursor, walks the chain's usable endpoints until one
//! answers, classifies the answer and publishes at most one result. The collected results
//! are sorted by chain id once every worker has joined.

use std::{collections::HashSet, sync::Arc};

use tracing::{debug, error, info, instrument};

use crate::{
	models::{AddressInfo, ChainDescriptor, ChainResult, ScanOptions},
	services::{
		blockchain::EvmClientTrait,
		scanner::{
			context::{QueuedChain, ScanContext},
			progress::{ChainOutcome, ProgressReporter, SilentProgress},
		},
	},
	utils::address::to_lower,
};

/// Scans an address across many chains
pub struct ScannerService<C: EvmClientTrait + 'static> {
	client: Arc<C>,
	chains: Arc<Vec<ChainDescriptor>>,
	progress: Arc<dyn ProgressReporter>,
}

impl<C: EvmClientTrait + 'static> ScannerService<C> {
	/// Creates a scanner over `chains` that reports no progress
	pub fn new(client: C, chains: Vec<ChainDescriptor>) -> Self {
		Self {
			client: Arc::new(client),
			chains: Arc::new(chains),
			progress: Arc::new(SilentProgress),
		}
	}

	/// Replaces the progress reporter
	pub fn with_progress(mut self, progress: Arc<dyn ProgressReporter>) -> Self {
		self.progress = progress;
		self
	}

	/// Chains this scanner was built with
	pub fn chains(&self) -> &[ChainDescriptor] {
		&self.chains
	}

	/// Scans `address` on every chain this scanner was built with
	pub async fn scan(&self, address: &str, options: &ScanOptions) -> Vec<ChainResult> {
		let chains = Arc::clone(&self.chains);
		self.scan_chains(address, &chains, options).await
	}

	/// Scans `address` on the given chains
	///
	/// # Arguments
	/// * `address` - Address to inspect; queried in lowercase form
	/// * `chains` - Candidate chains in display order
	/// * `options` - Testnet inclusion, activity filter and worker count
	///
	/// # Returns
	/// * `Vec<ChainResult>` - At most one result per chain id, ascending by chain id.
	///   Chains without a usable or responsive endpoint are omitted.
	#[instrument(skip_all, fields(address = %address, chains = chains.len()))]
	pub async fn scan_chains(
		&self,
		address: &str,
		chains: &[ChainDescriptor],
		options: &ScanOptions,
	) -> Vec<ChainResult> {
		let queue = filter_chains(chains, options.include_testnets);
		if queue.is_empty() {
			info!("No chains with a usable endpoint to scan");
			self.progress.scan_finished(0, 0);
			return Vec::new();
		}

		let workers = options.worker_count.clamp(1, queue.len());
		let ctx = Arc::new(ScanContext::new(
			to_lower(address),
			options.only_with_activity,
			chains.len(),
			queue,
			Arc::clone(&self.progress),
		));

		info!(
			"Scanning {} chain(s) with {} worker(s)",
			ctx.total(),
			workers
		);

		let tasks: Vec<_> = (0..workers)
			.map(|_| {
				let client = Arc::clone(&self.client);
				let ctx = Arc::clone(&ctx);
				tokio::spawn(async move { run_worker(client, ctx).await })
			})
			.collect();

		for result in futures::future::join_all(tasks).await {
			if let Err(e) = result {
				error!("Scan worker failed: {}", e);
			}
		}

		let results = ctx.take_results();
		info!(
			"Scan complete: {} of {} chain(s) reported",
			results.len(),
			ctx.total()
		);
		self.progress.scan_finished(results.len(), ctx.total());
		results
	}
}

/// Selects the chains a scan will dispatch
///
/// Keeps chains with at least one usable endpoint, drops testnets unless included and
/// keeps only the first occurrence of a repeated chain id. Each entry carries its 1-based
/// position in `chains`.
pub fn filter_chains(chains: &[ChainDescriptor], include_testnets: bool) -> Vec<QueuedChain> {
	let mut seen = HashSet::new();
	chains
		.iter()
		.enumerate()
		.filter(|(_, chain)| chain.has_usable_endpoint())
		.filter(|(_, chain)| include_testnets || !chain.is_testnet)
		.filter(|(_, chain)| seen.insert(chain.chain_id))
		.map(|(index, chain)| QueuedChain {
			position: index + 1,
			chain: chain.clone(),
		})
		.collect()
}

/// Builds the report row for an answered chain
///
/// Returns `None` when `only_with_activity` is set and the chain has neither balance nor
/// transactions.
pub fn classify(
	chain: &ChainDescriptor,
	rpc_url: &str,
	info: AddressInfo,
	only_with_activity: bool,
) -> Option<ChainResult> {
	let has_activity = info.has_activity();
	if only_with_activity && !has_activity {
		return None;
	}

	Some(ChainResult {
		chain_id: chain.chain_id,
		chain_name: chain.name.clone(),
		symbol: chain.symbol.clone(),
		balance_eth: info.balance_eth,
		tx_count: info.tx_count,
		is_contract: info.is_contract,
		has_token_activity: info.has_token_activity,
		has_activity,
		explorer_url: chain.explorer_url.clone(),
		rpc_url: rpc_url.to_string(),
	})
}

async fn run_worker<C: EvmClientTrait>(client: Arc<C>, ctx: Arc<ScanContext>) {
	while let Some(queued) = ctx.claim() {
		let outcome = match resolve_chain(client.as_ref(), &ctx, queued).await {
			Some((rpc_url, info)) => {
				match classify(&queued.chain, &rpc_url, info, ctx.only_with_activity) {
					Some(result) => {
						ctx.record(result);
						ChainOutcome::Found
					}
					None => ChainOutcome::Inactive,
				}
			}
			None => ChainOutcome::Unresolved,
		};

		debug!(
			chain_id = queued.chain.chain_id,
			chain = %queued.chain.name,
			outcome = outcome.as_str(),
			"Chain finished"
		);
		ctx.finish(&queued.chain, outcome);
	}
}

/// Tries the chain's usable endpoints in order and returns the first that answers
async fn resolve_chain<C: EvmClientTrait>(
	client: &C,
	ctx: &ScanContext,
	queued: &QueuedChain,
) -> Option<(String, AddressInfo)> {
	for rpc_url in queued.chain.usable_endpoints() {
		ctx.progress
			.endpoint_attempt(queued.position, ctx.listed, &queued.chain, rpc_url);

		let info = client.check_address(rpc_url, &ctx.address).await;
		if info.is_resolved() {
			return Some((rpc_url.to_string(), info));
		}

		debug!(
			chain_id = queued.chain.chain_id,
			rpc_url = rpc_url,
			"No answer from endpoint"
		);
		ctx.progress.endpoint_failed(&queued.chain, rpc_url);
	}
	None
}
