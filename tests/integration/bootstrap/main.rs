use std::sync::Arc;

use evm_chain_scanner::{
	bootstrap::{create_scanner, initialize_chain_registry},
	models::{ScanOptions, ScannerConfig},
	services::scanner::SilentProgress,
};
use mockito::{Matcher, Server};
use serde_json::json;
use tempfile::TempDir;

const ADDRESS: &str = "0x742d35Cc6634C0532925a3b844Bc454e4438f44e";

#[tokio::test]
async fn test_registry_to_scan_end_to_end() {
	let mut rpc = Server::new_async().await;
	let mut chainlist = Server::new_async().await;

	let registry = json!([
		{ "name": "Alive", "chainId": 10, "rpc": [rpc.url()] },
		{ "name": "Dead", "chainId": 5, "rpc": ["http://127.0.0.1:9"] },
		{ "name": "Socket only", "chainId": 7, "rpc": ["wss://socket.example"] }
	]);
	chainlist
		.mock("GET", "/rpcs.json")
		.with_body(registry.to_string())
		.create_async()
		.await;

	rpc.mock("POST", "/")
		.match_body(Matcher::PartialJson(json!({ "method": "eth_getBalance" })))
		.with_body(r#"{"jsonrpc":"2.0","id":1,"result":"0x0"}"#)
		.create_async()
		.await;
	rpc.mock("POST", "/")
		.match_body(Matcher::PartialJson(json!({ "method": "eth_getTransactionCount" })))
		.with_body(r#"{"jsonrpc":"2.0","id":1,"result":"0x9"}"#)
		.create_async()
		.await;
	rpc.mock("POST", "/")
		.match_body(Matcher::PartialJson(json!({ "method": "eth_getCode" })))
		.with_body(r#"{"jsonrpc":"2.0","id":1,"result":"0x"}"#)
		.create_async()
		.await;
	rpc.mock("POST", "/")
		.match_body(Matcher::PartialJson(json!({ "method": "eth_getLogs" })))
		.with_body(r#"{"jsonrpc":"2.0","id":1,"result":[]}"#)
		.create_async()
		.await;

	let dir = TempDir::new().unwrap();
	let config = ScannerConfig {
		chains_path: dir.path().join("rpcs.json"),
		chainlist_url: format!("{}/rpcs.json", chainlist.url()),
		request_timeout: std::time::Duration::from_secs(2),
		..Default::default()
	};

	let registry = initialize_chain_registry(&config, false).await.unwrap();
	assert_eq!(registry.count(), 3);

	let scanner = create_scanner(&config, registry.get_all(), Arc::new(SilentProgress)).unwrap();
	let results = scanner.scan(ADDRESS, &ScanOptions::default()).await;

	assert_eq!(results.len(), 1);
	assert_eq!(results[0].chain_id, 10);
	assert_eq!(results[0].chain_name, "Alive");
	assert_eq!(results[0].tx_count, 9);
	assert_eq!(results[0].balance_eth, "0");
	assert!(results[0].has_activity);
}
