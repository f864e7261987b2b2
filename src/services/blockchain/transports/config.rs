//! Transport configuration
//!
//! Connection settings for the node transport: the endpoint, how long to wait for the
//! initial connection and how often HTTP endpoints are polled for new logs.

use std::time::Duration;
use url::Url;

use crate::models::{
	ConfigError, ListenerConfig, DEFAULT_CONNECTION_TIMEOUT_MS, DEFAULT_POLL_INTERVAL_MS,
};

/// Connection settings for blockchain transports
#[derive(Clone, Debug, PartialEq)]
pub struct TransportConfig {
	/// RPC endpoint to connect to
	pub rpc_url: Url,
	/// How long to wait for the initial connection
	pub connection_timeout: Duration,
	/// How often to poll for new logs on HTTP endpoints
	pub poll_interval: Duration,
}

impl TransportConfig {
	/// Creates a configuration with default timings for the given endpoint
	pub fn new(rpc_url: Url) -> Self {
		Self {
			rpc_url,
			connection_timeout: Duration::from_millis(DEFAULT_CONNECTION_TIMEOUT_MS),
			poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
		}
	}

	/// Creates a transport configuration from the listener configuration
	///
	/// # Errors
	/// Returns a validation error if the configured RPC URL is invalid
	pub fn from_listener_config(config: &ListenerConfig) -> Result<Self, Box<ConfigError>> {
		Ok(Self {
			rpc_url: config.endpoint()?,
			connection_timeout: Duration::from_millis(config.connection_timeout_ms),
			poll_interval: Duration::from_millis(config.poll_interval_ms),
		})
	}

	/// Whether the endpoint supports push subscriptions
	pub fn is_pubsub(&self) -> bool {
		matches!(self.rpc_url.scheme(), "ws" | "wss")
	}
}
