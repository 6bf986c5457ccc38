//! Text and JSON rendering of scan results and chain lists.

use std::fmt::Write;

use crate::models::{ChainDescriptor, ChainResult};

const RULE_WIDTH: usize = 90;
const NAME_WIDTH: usize = 24;

/// Shortens `value` to at most `max` characters, marking the cut with "..."
fn truncate(value: &str, max: usize) -> String {
	if value.chars().count() <= max {
		return value.to_string();
	}
	let kept: String = value.chars().take(max.saturating_sub(3)).collect();
	format!("{}...", kept)
}

/// Renders scan results as a fixed-width table
pub fn render_table(results: &[ChainResult]) -> String {
	if results.is_empty() {
		return "No activity found on any chain.\n".to_string();
	}

	let rule = "-".repeat(RULE_WIDTH);
	let mut out = String::new();
	let _ = writeln!(out, "Found activity on {} chain(s):", results.len());
	let _ = writeln!(out, "{}", rule);
	let _ = writeln!(
		out,
		"{:<8}{:<25}{:<8}{:<25}{:<10}{}",
		"ChainID", "Network", "Symbol", "Balance", "TX Count", "Contract"
	);
	let _ = writeln!(out, "{}", rule);

	for result in results {
		let balance = format!("{} {}", result.balance_eth, result.symbol);
		let _ = writeln!(
			out,
			"{:<8}{:<25}{:<8}{:<25}{:<10}{}",
			result.chain_id,
			truncate(&result.chain_name, NAME_WIDTH),
			result.symbol,
			truncate(&balance, NAME_WIDTH),
			result.tx_count,
			if result.is_contract { "yes" } else { "no" }
		);
	}

	let _ = writeln!(out, "{}", rule);
	out
}

/// Renders scan results as a pretty-printed JSON array
pub fn render_json(results: &[ChainResult]) -> Result<String, serde_json::Error> {
	serde_json::to_string_pretty(results)
}

/// Renders the chain registry, one chain per line
pub fn render_chain_list(chains: &[ChainDescriptor]) -> String {
	let mut out = String::new();
	let _ = writeln!(out, "Supported EVM Chains ({})", chains.len());
	let _ = writeln!(out, "{}", "-".repeat(50));
	for chain in chains {
		let _ = writeln!(
			out,
			"{:<12}{:<25}{:<8}{}",
			chain.chain_id,
			truncate(&chain.name, NAME_WIDTH),
			truncate(&chain.symbol, 7),
			if chain.is_testnet { "Testnet" } else { "Mainnet" }
		);
	}
	out
}
