//! EVM chain scanner entry point.
//!
//! Validates an EVM address, optionally verifies or fixes its EIP-55 checksum, and scans
//! every chain of the chain registry for balance, transactions and deployed code.
//!
//! # Flow
//! 1. Loads `.env` and applies command line overrides for unset variables
//! 2. Sets up logging
//! 3. Refreshes or lists the chain registry when asked to
//! 4. Validates the address and handles checksum options
//! 5. Scans the selected chains and prints a table or JSON

use evm_chain_scanner::{
	bootstrap::{create_scanner, initialize_chain_registry, Result},
	models::{ChainDescriptor, ScanOptions, ScannerConfig},
	services::scanner::{render_chain_list, render_json, render_table, WriterProgress},
	utils::{address, logging::setup_logging},
};

use clap::{Arg, ArgAction, ArgMatches, Command};
use dotenvy::dotenv;
use std::env::{set_var, var};
use std::sync::Arc;
use tracing::{error, info};

fn build_cli() -> Command {
	Command::new("evm-chain-scanner")
		.version(env!("CARGO_PKG_VERSION"))
		.about(
			"Validates EVM addresses and scans every known EVM chain for balances, \
			 transactions and deployed code.",
		)
		.arg(
			Arg::new("address")
				.help("EVM address (0x followed by 40 hex digits)")
				.value_name("ADDRESS"),
		)
		.arg(
			Arg::new("checksum")
				.short('c')
				.long("checksum")
				.help("Verify the EIP-55 checksum")
				.action(ArgAction::SetTrue),
		)
		.arg(
			Arg::new("fix")
				.short('f')
				.long("fix")
				.help("Print the checksummed address")
				.action(ArgAction::SetTrue),
		)
		.arg(
			Arg::new("list-chains")
				.short('l')
				.long("list-chains")
				.help("List supported chains")
				.action(ArgAction::SetTrue),
		)
		.arg(
			Arg::new("update-rpcs")
				.short('u')
				.long("update-rpcs")
				.help("Update RPCs from chainlist.org")
				.action(ArgAction::SetTrue),
		)
		.arg(
			Arg::new("scan")
				.short('s')
				.long("scan")
				.help("Scan all chains for activity")
				.action(ArgAction::SetTrue),
		)
		.arg(
			Arg::new("testnets")
				.long("testnets")
				.help("Include testnets in the scan")
				.action(ArgAction::SetTrue),
		)
		.arg(
			Arg::new("all")
				.long("all")
				.help("Report chains without balance or transactions too")
				.action(ArgAction::SetTrue),
		)
		.arg(
			Arg::new("chain")
				.long("chain")
				.help("Scan a single chain, by id or name")
				.value_name("ID|NAME"),
		)
		.arg(
			Arg::new("workers")
				.short('w')
				.long("workers")
				.help("Number of concurrent workers (default: 16)")
				.value_name("N"),
		)
		.arg(
			Arg::new("timeout")
				.long("timeout")
				.help("Per-request timeout in seconds (default: 10)")
				.value_name("SECS"),
		)
		.arg(
			Arg::new("json")
				.long("json")
				.help("Print scan results as JSON")
				.action(ArgAction::SetTrue),
		)
		.arg(
			Arg::new("chains-file")
				.long("chains-file")
				.help("Path of the chain registry (default: data/rpcs.json)")
				.value_name("PATH"),
		)
		.arg(
			Arg::new("log-file")
				.long("log-file")
				.help("Write logs to file instead of stderr")
				.action(ArgAction::SetTrue),
		)
		.arg(
			Arg::new("log-level")
				.long("log-level")
				.help("Set log level (trace, debug, info, warn, error)")
				.value_name("LEVEL"),
		)
		.arg(
			Arg::new("log-path")
				.long("log-path")
				.help("Path to store log files (default: logs/)")
				.value_name("PATH"),
		)
}

/// Sets `key` from a command line value unless the environment already defines it
fn apply_override(matches: &ArgMatches, arg: &str, key: &str) {
	if let Some(value) = matches.get_one::<String>(arg) {
		if var(key).is_err() {
			set_var(key, value);
		}
	}
}

/// Selects the chains to scan; `None` if `--chain` names an unknown chain
fn select_chains(
	all: Vec<ChainDescriptor>,
	selector: Option<&String>,
	find: impl Fn(&str) -> Option<ChainDescriptor>,
) -> Option<Vec<ChainDescriptor>> {
	match selector {
		Some(selector) => find(selector).map(|chain| vec![chain]),
		None => Some(all),
	}
}

/// Main entry point for the EVM chain scanner.
///
/// # Errors
/// Returns an error if configuration, the chain registry or the HTTP client cannot be set up.
#[tokio::main]
async fn main() -> Result<()> {
	let mut cli = build_cli();
	let matches = cli.clone().get_matches();

	// Load environment variables from .env file
	dotenv().ok();

	// Only apply CLI options if the corresponding environment variables are NOT already set
	if matches.get_flag("log-file") && var("LOG_MODE").is_err() {
		set_var("LOG_MODE", "file");
	}
	apply_override(&matches, "log-level", "LOG_LEVEL");
	apply_override(&matches, "log-path", "LOG_DATA_DIR");
	apply_override(&matches, "chains-file", "CHAINS_FILE");
	apply_override(&matches, "workers", "SCAN_WORKERS");
	apply_override(&matches, "timeout", "RPC_TIMEOUT_SECS");

	setup_logging().unwrap_or_else(|e| {
		eprintln!("Failed to setup logging: {}", e);
	});

	let config = ScannerConfig::from_env()?;

	let update = matches.get_flag("update-rpcs");
	let list = matches.get_flag("list-chains");
	let scan = matches.get_flag("scan") || matches.get_one::<String>("chain").is_some();
	let address_arg = matches.get_one::<String>("address");

	let registry = if update || list || scan {
		Some(initialize_chain_registry(&config, update).await?)
	} else {
		None
	};

	if list {
		if let Some(registry) = &registry {
			print!("{}", render_chain_list(&registry.get_all()));
		}
		return Ok(());
	}

	let Some(raw_address) = address_arg else {
		if update {
			return Ok(());
		}
		cli.print_help()?;
		println!();
		std::process::exit(1);
	};

	if !address::is_valid(raw_address) {
		eprintln!("Invalid address format: {}", raw_address);
		std::process::exit(1);
	}
	println!("Valid EVM address");

	if address::is_zero(raw_address) {
		println!("Warning: zero address (burn)");
	}

	if matches.get_flag("checksum") {
		if address::verify_checksum(raw_address) {
			println!("Valid checksum");
		} else {
			println!("Invalid checksum");
			std::process::exit(1);
		}
	}

	if matches.get_flag("fix") {
		if let Some(checksummed) = address::to_checksum(raw_address) {
			println!("{}", checksummed);
		}
	}

	if !scan {
		return Ok(());
	}
	let Some(registry) = registry else {
		return Ok(());
	};

	let selector = matches.get_one::<String>("chain");
	let Some(chains) = select_chains(registry.get_all(), selector, |s| registry.find(s)) else {
		eprintln!(
			"Unknown chain: {}",
			selector.map(String::as_str).unwrap_or_default()
		);
		std::process::exit(1);
	};

	let options = ScanOptions {
		include_testnets: matches.get_flag("testnets") || selector.is_some(),
		only_with_activity: !matches.get_flag("all"),
		worker_count: config.workers,
	};

	info!(
		address = %raw_address,
		chains = chains.len(),
		workers = options.worker_count,
		"Starting scan"
	);

	let scanner = create_scanner(&config, chains, Arc::new(WriterProgress::stderr()))?;
	let results = scanner.scan(raw_address, &options).await;

	if matches.get_flag("json") {
		match render_json(&results) {
			Ok(json) => println!("{}", json),
			Err(e) => {
				error!("Failed to serialize results: {}", e);
				std::process::exit(1);
			}
		}
	} else {
		print!("{}", render_table(&results));
	}

	Ok(())
}
