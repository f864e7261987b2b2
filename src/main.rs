//! Contract event listener entry point.
//!
//! This binary subscribes to a single event of a smart contract and logs every
//! notification it receives.
//!
//! The service follows these main steps:
//! 1. Loads `.env`, the configuration file and command line overrides
//! 2. Sets up logging
//! 3. Connects to the node and registers the event subscription
//! 4. Logs each event payload or subscription error until the node closes the stream

use std::path::PathBuf;

use clap::Parser;
use contract_event_listener::{
	bootstrap::{initialize_listener, load_config},
	models::ConfigOverrides,
	services::listener::create_logging_handler,
	utils::{
		format_error_chain,
		logging::{setup_logging, LoggingOptions},
	},
};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(
	name = "contract-event-listener",
	version,
	about = "Subscribes to a smart contract event and logs every notification"
)]
struct Cli {
	/// Path to the listener configuration file
	#[arg(long, default_value = "config/listener.json")]
	config: PathBuf,

	/// RPC endpoint of the node (http, https, ws or wss)
	#[arg(long)]
	rpc_url: Option<String>,

	/// Address of the contract to watch
	#[arg(long)]
	address: Option<String>,

	/// Path to the contract ABI file
	#[arg(long)]
	abi: Option<PathBuf>,

	/// Name of the event to subscribe to
	#[arg(long)]
	event: Option<String>,

	/// Write logs to a rolling file instead of the console
	#[arg(long)]
	log_file: bool,

	/// Log level filter (e.g. info, debug)
	#[arg(long)]
	log_level: Option<String>,

	/// Directory for log files
	#[arg(long)]
	log_path: Option<String>,
}

impl Cli {
	fn logging_options(&self) -> LoggingOptions {
		LoggingOptions {
			to_file: self.log_file,
			level: self.log_level.clone(),
			log_dir: self.log_path.clone(),
		}
	}

	fn overrides(&self) -> ConfigOverrides {
		ConfigOverrides {
			rpc_url: self.rpc_url.clone(),
			contract_address: self.address.clone(),
			abi_path: self.abi.clone(),
			event_name: self.event.clone(),
		}
	}
}

fn main() -> anyhow::Result<()> {
	// The environment is only written here, before any runtime thread exists
	dotenvy::dotenv().ok();
	let cli = Cli::parse();

	tokio::runtime::Builder::new_multi_thread()
		.enable_all()
		.build()?
		.block_on(run(cli))
}

async fn run(cli: Cli) -> anyhow::Result<()> {
	let logging = LoggingOptions::from_env().merge(cli.logging_options());
	setup_logging(&logging).map_err(|e| anyhow::anyhow!("Failed to setup logging: {}", e))?;

	let overrides = ConfigOverrides::from_env().merge(cli.overrides());
	let config = match load_config(&cli.config, overrides) {
		Ok(config) => config,
		Err(e) => {
			error!("Failed to load configuration: {}", format_error_chain(&e));
			std::process::exit(1);
		}
	};

	let mut listener = match initialize_listener(&config).await {
		Ok(listener) => listener,
		Err(e) => {
			error!("Failed to initialize listener: {}", format_error_chain(&e));
			std::process::exit(1);
		}
	};

	info!(
		event = %config.event_name,
		rpc_url = %config.rpc_url,
		"Listening for contract events"
	);

	if let Err(e) = listener.run(create_logging_handler()).await {
		error!("Listener stopped: {}", format_error_chain(&e));
		std::process::exit(1);
	}

	Ok(())
}
