//! Logging utilities for the application
//!
//! Sets up a `tracing_subscriber` registry with an `EnvFilter` and a compact formatter.
//! The destination is chosen by `LOG_MODE`:
//!
//! - `stdout` (default): log lines go to standard error so standard output stays free for
//!   scan results
//! - `file`: daily rolling files named `evm-chain-scanner.log.<date>` in `LOG_DATA_DIR`
//!   (default `logs/`)
//!
//! The level comes from `RUST_LOG`, then `LOG_LEVEL`, then `info`.
use std::path::PathBuf;

use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Default directory for file logs
pub const DEFAULT_LOG_DIR: &str = "logs/";

/// Prefix of rolling log files
pub const LOG_FILE_PREFIX: &str = "evm-chain-scanner.log";

/// Where log lines are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogMode {
	Stdout,
	File(PathBuf),
}

impl LogMode {
	/// Reads `LOG_MODE` and `LOG_DATA_DIR`; unknown modes fall back to `Stdout`
	pub fn from_env() -> Self {
		match std::env::var("LOG_MODE") {
			Ok(mode) if mode.eq_ignore_ascii_case("file") => {
				let dir = std::env::var("LOG_DATA_DIR").unwrap_or_else(|_| DEFAULT_LOG_DIR.into());
				Self::File(PathBuf::from(dir))
			}
			_ => Self::Stdout,
		}
	}
}

/// Builds the level filter from `RUST_LOG`, then `LOG_LEVEL`, then `info`
pub fn env_filter() -> EnvFilter {
	filter_from(
		std::env::var("RUST_LOG").ok(),
		std::env::var("LOG_LEVEL").ok(),
	)
}

/// Picks the first directive string that parses
fn filter_from(rust_log: Option<String>, log_level: Option<String>) -> EnvFilter {
	[rust_log, log_level]
		.into_iter()
		.flatten()
		.find_map(|directives| EnvFilter::try_new(directives).ok())
		.unwrap_or_else(|| EnvFilter::new("info"))
}

/// Setup logging for the application
///
/// Writes to standard error or to rolling files depending on `LOG_MODE`.
pub fn setup_logging() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
	match LogMode::from_env() {
		LogMode::Stdout => setup_logging_with_writer(std::io::stderr),
		LogMode::File(dir) => {
			std::fs::create_dir_all(&dir)?;
			let appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
			setup_logging_with_writer(appender)
		}
	}
}

/// Setup logging for the application with a custom writer
pub fn setup_logging_with_writer<W>(
	writer: W,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>>
where
	W: for<'writer> tracing_subscriber::fmt::MakeWriter<'writer> + Send + Sync + 'static,
{
	tracing_subscriber::registry()
		.with(env_filter())
		.with(
			fmt::layer()
				.with_writer(writer)
				.event_format(
					fmt::format()
						.with_level(true)
						.with_target(true)
						.with_thread_ids(false)
						.with_thread_names(false)
						.with_ansi(false)
						.compact(),
				)
				.fmt_fields(fmt::format::PrettyFields::new()),
		)
		.try_init()?;
	Ok(())
}
