//! Listener initialization.
//!
//! Builds every value the listener needs exactly once at startup: the configuration,
//! the node transport and the contract descriptor. The resulting [`EventListener`] is
//! owned by the caller; nothing is kept in process-wide state.

use std::{path::Path, sync::Arc};

use crate::{
	models::{ConfigLoader, ConfigOverrides, ListenerConfig},
	services::{
		blockchain::{EvmTransportClient, LogTransport, TransportConfig},
		listener::{EventListener, ListenerError},
	},
};

/// Loads and validates the listener configuration.
///
/// The configuration file is optional: when `path` does not exist the defaults are used
/// and the overrides must supply the contract. Overrides are applied before validation.
///
/// # Arguments
/// * `path` - Path to the JSON configuration file
/// * `overrides` - Values taken from the environment and the command line
///
/// # Errors
/// Returns `ListenerError::Config` if the file cannot be read or parsed, or if the
/// resulting configuration is invalid
pub fn load_config(
	path: &Path,
	overrides: ConfigOverrides,
) -> Result<ListenerConfig, ListenerError> {
	let mut config = if path.exists() {
		ListenerConfig::load_from_path(path)?
	} else {
		tracing::info!(
			path = %path.display(),
			"Configuration file not found, using defaults"
		);
		ListenerConfig::default()
	};

	config.apply_overrides(overrides);
	config.validate()?;

	Ok(config)
}

/// Initializes the listener over an already connected transport.
///
/// # Arguments
/// * `config` - Validated listener configuration
/// * `transport` - Connection to the node
///
/// # Errors
/// Returns an error if the contract descriptor cannot be built or the configured event is
/// not declared in the ABI
pub fn initialize_listener_with_transport<T: LogTransport>(
	config: &ListenerConfig,
	transport: Arc<T>,
) -> Result<EventListener<T>, ListenerError> {
	let contract = config.contract_spec()?;
	EventListener::new(transport, contract, &config.event_name)
}

/// Initializes the listener: connects to the node and resolves the contract event.
///
/// # Errors
/// Returns an error if the configuration is invalid, the node cannot be reached, or the
/// event is not declared in the ABI
pub async fn initialize_listener(
	config: &ListenerConfig,
) -> Result<EventListener<EvmTransportClient>, ListenerError> {
	let transport_config = TransportConfig::from_listener_config(config)?;
	let transport = EvmTransportClient::new(&transport_config).await?;

	initialize_listener_with_transport(config, Arc::new(transport))
}
