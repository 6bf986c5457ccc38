use std::sync::{Arc, Mutex};

use evm_chain_scanner::{
	models::{AddressInfo, ChainDescriptor, ScanOptions},
	services::scanner::{ChainOutcome, ProgressReporter, ScannerService, WriterProgress},
	utils::tests::builders::chain::ChainBuilder,
};

use crate::integration::mocks::MockEvmClientTrait;

const ADDRESS: &str = "0x742d35cc6634c0532925a3b844bc454e4438f44e";

fn answered(balance_wei: &str, balance_eth: &str, tx_count: u64) -> AddressInfo {
	AddressInfo {
		balance_wei: balance_wei.to_string(),
		balance_eth: balance_eth.to_string(),
		tx_count,
		..Default::default()
	}
}

#[derive(Default)]
struct RecordingProgress {
	events: Mutex<Vec<String>>,
}

impl ProgressReporter for RecordingProgress {
	fn endpoint_attempt(
		&self,
		position: usize,
		listed: usize,
		_: &ChainDescriptor,
		rpc_url: &str,
	) {
		self.events
			.lock()
			.unwrap()
			.push(format!("attempt {}/{} {}", position, listed, rpc_url));
	}

	fn endpoint_failed(&self, _: &ChainDescriptor, rpc_url: &str) {
		self.events.lock().unwrap().push(format!("failed {}", rpc_url));
	}

	fn chain_finished(
		&self,
		completed: usize,
		total: usize,
		chain: &ChainDescriptor,
		outcome: ChainOutcome,
	) {
		self.events.lock().unwrap().push(format!(
			"finished {}/{} {} {}",
			completed,
			total,
			chain.chain_id,
			outcome.as_str()
		));
	}

	fn scan_finished(&self, found: usize, total: usize) {
		self.events
			.lock()
			.unwrap()
			.push(format!("scan {}/{}", found, total));
	}
}

#[tokio::test]
async fn test_failover_queries_first_endpoint_once() {
	let mut client = MockEvmClientTrait::new();
	client
		.expect_check_address()
		.withf(|url, address| url == "https://e1.example" && address == ADDRESS)
		.times(1)
		.returning(|_, _| AddressInfo::default());
	client
		.expect_check_address()
		.withf(|url, _| url == "https://e2.example")
		.times(1)
		.returning(|_, _| answered("0x64", "0.0000000000000001", 0));

	let chains = vec![ChainBuilder::new()
		.chain_id(1)
		.rpc_urls(vec!["https://e1.example", "https://e2.example"])
		.build()];
	let progress = Arc::new(RecordingProgress::default());
	let scanner = ScannerService::new(client, chains).with_progress(progress.clone());

	let results = scanner.scan(ADDRESS, &ScanOptions::default()).await;

	assert_eq!(results.len(), 1);
	assert_eq!(results[0].rpc_url, "https://e2.example");
	assert_eq!(results[0].balance_eth, "0.0000000000000001");
	assert!(results[0].has_activity);

	let events = progress.events.lock().unwrap();
	assert_eq!(
		*events,
		vec![
			"attempt 1/1 https://e1.example".to_string(),
			"failed https://e1.example".to_string(),
			"attempt 1/1 https://e2.example".to_string(),
			"finished 1/1 1 found".to_string(),
			"scan 1/1".to_string(),
		]
	);
}

#[tokio::test]
async fn test_positions_follow_caller_list() {
	let mut client = MockEvmClientTrait::new();
	client
		.expect_check_address()
		.returning(|_, _| answered("0x0", "0", 0));

	let chains = vec![
		ChainBuilder::new()
			.chain_id(3)
			.rpc_urls(vec!["wss://only.example"])
			.build(),
		ChainBuilder::new()
			.chain_id(4)
			.rpc_urls(vec!["https://four.example"])
			.build(),
	];
	let progress = Arc::new(RecordingProgress::default());
	let scanner = ScannerService::new(client, chains).with_progress(progress.clone());

	let results = scanner.scan(ADDRESS, &ScanOptions::default()).await;
	assert!(results.is_empty());

	let events = progress.events.lock().unwrap();
	assert_eq!(events[0], "attempt 2/2 https://four.example");
	assert_eq!(events[1], "finished 1/1 4 no activity");
	assert_eq!(events[2], "scan 0/1");
}

#[tokio::test]
async fn test_all_endpoints_silent_omits_chain() {
	let mut client = MockEvmClientTrait::new();
	client
		.expect_check_address()
		.times(3)
		.returning(|_, _| AddressInfo::default());

	let chains = vec![ChainBuilder::new()
		.rpc_urls(vec!["https://a.example", "https://b.example", "https://c.example"])
		.build()];
	let scanner = ScannerService::new(client, chains);

	let mut options = ScanOptions::default();
	options.only_with_activity = false;
	assert!(scanner.scan(ADDRESS, &options).await.is_empty());
}

#[tokio::test]
async fn test_scan_chains_with_explicit_list_and_writer_progress() {
	let mut client = MockEvmClientTrait::new();
	client
		.expect_check_address()
		.returning(|url, _| match url {
			"https://poly.example" => answered("0xde0b6b3a7640000", "1", 4),
			_ => answered("0x0", "0", 0),
		});

	let scanner = ScannerService::new(client, Vec::new())
		.with_progress(Arc::new(WriterProgress::new(std::io::sink())));
	let chains = vec![
		ChainBuilder::new()
			.chain_id(137)
			.name("Polygon")
			.symbol("POL")
			.rpc_urls(vec!["https://poly.example"])
			.build(),
		ChainBuilder::new()
			.chain_id(1)
			.rpc_urls(vec!["https://eth.example"])
			.build(),
	];

	let options = ScanOptions {
		include_testnets: false,
		only_with_activity: false,
		worker_count: 8,
	};
	let results = scanner.scan_chains(ADDRESS, &chains, &options).await;

	let summary: Vec<(u64, bool)> = results.iter().map(|r| (r.chain_id, r.has_activity)).collect();
	assert_eq!(summary, vec![(1, false), (137, true)]);
	assert_eq!(results[1].symbol, "POL");
	assert_eq!(results[1].tx_count, 4);
}
