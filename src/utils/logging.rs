//! Logging utilities for the application
//!
//! This module sets up `tracing_subscriber` for the listener. Two output modes are
//! supported:
//!
//! - stdout (default): error-level events go to stderr, everything else to stdout
//! - file: all events go to a daily rolling file under the log directory (default `logs/`)
//!
//! Options come from `LOG_MODE`, `LOG_LEVEL` and `LOG_DATA_DIR`, layered with command
//! line flags. `RUST_LOG` takes precedence over the configured level.

use std::path::Path;

use tracing::Level;
use tracing_subscriber::{
	filter::EnvFilter,
	fmt::{self, writer::MakeWriterExt},
	prelude::*,
};

/// Default directory for log files in file mode
pub const DEFAULT_LOG_DIR: &str = "logs/";

/// File name prefix of the rolling log files
const LOG_FILE_PREFIX: &str = "listener.log";

/// Logging options
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoggingOptions {
	/// Write to a rolling file instead of the console
	pub to_file: bool,
	/// Level filter directive, e.g. `info` or `contract_event_listener=debug`
	pub level: Option<String>,
	/// Directory for log files
	pub log_dir: Option<String>,
}

impl LoggingOptions {
	/// Reads options from `LOG_MODE`, `LOG_LEVEL` and `LOG_DATA_DIR`
	pub fn from_env() -> Self {
		let var = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());
		Self {
			to_file: var("LOG_MODE")
				.map(|mode| mode.eq_ignore_ascii_case("file"))
				.unwrap_or(false),
			level: var("LOG_LEVEL"),
			log_dir: var("LOG_DATA_DIR"),
		}
	}

	/// Layers `other` on top of `self`; values present in `other` win
	pub fn merge(self, other: LoggingOptions) -> Self {
		Self {
			to_file: self.to_file || other.to_file,
			level: other.level.or(self.level),
			log_dir: other.log_dir.or(self.log_dir),
		}
	}

	/// Directory log files are written to
	pub fn log_dir(&self) -> &str {
		self.log_dir.as_deref().unwrap_or(DEFAULT_LOG_DIR)
	}
}

/// Builds the level filter from `RUST_LOG`, then `level`, falling back to `info`
fn build_filter(level: Option<&str>) -> EnvFilter {
	EnvFilter::try_from_default_env()
		.or_else(|_| EnvFilter::try_new(level.unwrap_or("info")))
		.unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Setup logging for the application
///
/// Installs a global subscriber according to `options`. Calling this more than once
/// keeps the first subscriber; the later calls are ignored.
pub fn setup_logging(
	options: &LoggingOptions,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
	let filter = build_filter(options.level.as_deref());
	let format = fmt::format()
		.with_level(true)
		.with_target(true)
		.with_thread_ids(false)
		.with_thread_names(false)
		.compact();

	if options.to_file {
		let log_dir = options.log_dir();
		std::fs::create_dir_all(Path::new(log_dir))?;
		let appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);

		let subscriber = tracing_subscriber::registry().with(filter).with(
			fmt::layer()
				.with_writer(appender)
				.event_format(format.with_ansi(false)),
		);
		let _ = subscriber.try_init();
	} else {
		// Errors on stderr, the rest on stdout
		let writer = std::io::stderr
			.with_max_level(Level::ERROR)
			.or_else(std::io::stdout);

		let subscriber = tracing_subscriber::registry().with(filter).with(
			fmt::layer()
				.with_writer(writer)
				.event_format(format.with_ansi(true)),
		);
		let _ = subscriber.try_init();
	}

	Ok(())
}
