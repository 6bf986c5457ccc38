use std::collections::HashSet;

use crate::properties::strategies::chain_list_strategy;

use async_trait::async_trait;
use evm_chain_scanner::{
	models::{AddressInfo, ChainDescriptor, ScanOptions},
	services::{
		blockchain::EvmClientTrait,
		scanner::{filter_chains, ScannerService},
	},
	utils::hex::wei_hex_to_eth,
};
use proptest::{prelude::*, test_runner::Config};

const ADDRESS: &str = "0x742d35cc6634c0532925a3b844bc454e4438f44e";

/// Deterministic client: the answer depends only on the endpoint
struct HashedClient;

#[async_trait]
impl EvmClientTrait for HashedClient {
	async fn get_balance(&self, _: &str, _: &str) -> Option<String> {
		None
	}

	async fn get_transaction_count(&self, _: &str, _: &str) -> Option<u64> {
		None
	}

	async fn is_contract(&self, _: &str, _: &str) -> bool {
		false
	}

	async fn has_token_activity(&self, _: &str, _: &str) -> bool {
		false
	}

	async fn check_address(&self, rpc_url: &str, _: &str) -> AddressInfo {
		let seed = rpc_url
			.bytes()
			.fold(0u64, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u64));
		match seed % 3 {
			0 => AddressInfo::default(),
			1 => AddressInfo {
				balance_wei: "0x0".to_string(),
				balance_eth: "0".to_string(),
				..Default::default()
			},
			_ => {
				let balance_wei = format!("{:#x}", seed % 1_000_000);
				AddressInfo {
					balance_eth: wei_hex_to_eth(&balance_wei),
					balance_wei,
					tx_count: seed % 5,
					..Default::default()
				}
			}
		}
	}
}

fn scan(
	chains: &[ChainDescriptor],
	options: &ScanOptions,
) -> Vec<evm_chain_scanner::models::ChainResult> {
	let runtime = tokio::runtime::Builder::new_multi_thread()
		.worker_threads(4)
		.enable_all()
		.build()
		.unwrap();
	runtime.block_on(async {
		ScannerService::new(HashedClient, Vec::new())
			.scan_chains(ADDRESS, chains, options)
			.await
	})
}

proptest! {
	#![proptest_config(Config {
		cases: 64,
		failure_persistence: None,
		..Config::default()
	})]

	#[test]
	fn test_results_sorted_unique_and_from_usable_chains(
		chains in chain_list_strategy(),
		include_testnets in any::<bool>(),
		only_with_activity in any::<bool>(),
		workers in 1usize..32,
	) {
		let options = ScanOptions { include_testnets, only_with_activity, worker_count: workers };
		let results = scan(&chains, &options);

		let ids: Vec<u64> = results.iter().map(|r| r.chain_id).collect();
		let mut sorted = ids.clone();
		sorted.sort_unstable();
		sorted.dedup();
		prop_assert_eq!(&ids, &sorted);

		let eligible: HashSet<u64> = filter_chains(&chains, include_testnets)
			.iter()
			.map(|queued| queued.chain.chain_id)
			.collect();
		for result in &results {
			prop_assert!(eligible.contains(&result.chain_id));
			if only_with_activity {
				prop_assert!(result.has_activity);
			}
		}
	}

	#[test]
	fn test_worker_count_does_not_change_results(
		chains in chain_list_strategy(),
		workers in 2usize..64,
	) {
		let single = ScanOptions {
			include_testnets: true,
			only_with_activity: false,
			worker_count: 1,
		};
		let many = ScanOptions { worker_count: workers, ..single.clone() };
		prop_assert_eq!(scan(&chains, &single), scan(&chains, &many));
	}

	#[test]
	fn test_filter_keeps_first_occurrence(chains in chain_list_strategy()) {
		let queued = filter_chains(&chains, true);
		let mut seen = HashSet::new();
		for entry in &queued {
			prop_assert!(seen.insert(entry.chain.chain_id));
			prop_assert!(entry.chain.has_usable_endpoint());
			prop_assert_eq!(&chains[entry.position - 1], &entry.chain);
			let first = chains
				.iter()
				.position(|c| c.chain_id == entry.chain.chain_id && c.has_usable_endpoint())
				.unwrap();
			prop_assert_eq!(first + 1, entry.position);
		}
	}
}
