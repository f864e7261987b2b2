//! Listener configuration model.
//!
//! Describes which node to connect to, which contract to watch and which of its
//! events to subscribe to.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Event subscribed to when no other name is configured
pub const DEFAULT_EVENT_NAME: &str = "Done";

/// RPC endpoint used when no other URL is configured
pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8545";

/// Default timeout for establishing the node connection
pub const DEFAULT_CONNECTION_TIMEOUT_MS: u64 = 10_000;

/// Default interval between filter polls on HTTP endpoints
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1_000;

/// Configuration for a single contract event listener
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ListenerConfig {
	/// RPC endpoint of the node (http, https, ws or wss)
	#[serde(default = "default_rpc_url")]
	pub rpc_url: String,

	/// Contract whose event is watched
	#[serde(default)]
	pub contract: ContractConfig,

	/// Name of the event to subscribe to
	#[serde(default = "default_event_name")]
	pub event_name: String,

	/// Timeout for the initial connection to the node, in milliseconds
	#[serde(default = "default_connection_timeout_ms")]
	pub connection_timeout_ms: u64,

	/// Interval between filter polls on HTTP endpoints, in milliseconds
	#[serde(default = "default_poll_interval_ms")]
	pub poll_interval_ms: u64,
}

/// Contract descriptor as written in configuration
///
/// The ABI is either given inline or read from `abi_path`. Both forms accept a plain
/// ABI array or a compiler artifact object holding the array under `abi`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ContractConfig {
	/// Deployed contract address
	#[serde(default)]
	pub address: String,

	/// Inline ABI definition
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub abi: Option<serde_json::Value>,

	/// Path to a file containing the ABI definition
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub abi_path: Option<PathBuf>,
}

impl Default for ListenerConfig {
	fn default() -> Self {
		Self {
			rpc_url: default_rpc_url(),
			contract: ContractConfig::default(),
			event_name: default_event_name(),
			connection_timeout_ms: default_connection_timeout_ms(),
			poll_interval_ms: default_poll_interval_ms(),
		}
	}
}

fn default_rpc_url() -> String {
	DEFAULT_RPC_URL.to_string()
}

fn default_event_name() -> String {
	DEFAULT_EVENT_NAME.to_string()
}

fn default_connection_timeout_ms() -> u64 {
	DEFAULT_CONNECTION_TIMEOUT_MS
}

fn default_poll_interval_ms() -> u64 {
	DEFAULT_POLL_INTERVAL_MS
}

/// Values that replace those read from the configuration file
///
/// Overrides come from the environment and from command line flags. `None` leaves the
/// configured value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
	pub rpc_url: Option<String>,
	pub contract_address: Option<String>,
	pub abi_path: Option<PathBuf>,
	pub event_name: Option<String>,
}

impl ConfigOverrides {
	pub const RPC_URL_VAR: &str = "LISTENER_RPC_URL";
	pub const CONTRACT_ADDRESS_VAR: &str = "LISTENER_CONTRACT_ADDRESS";
	pub const ABI_PATH_VAR: &str = "LISTENER_CONTRACT_ABI_PATH";
	pub const EVENT_NAME_VAR: &str = "LISTENER_EVENT_NAME";

	/// Reads overrides from the process environment
	pub fn from_env() -> Self {
		let var = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());
		Self {
			rpc_url: var(Self::RPC_URL_VAR),
			contract_address: var(Self::CONTRACT_ADDRESS_VAR),
			abi_path: var(Self::ABI_PATH_VAR).map(PathBuf::from),
			event_name: var(Self::EVENT_NAME_VAR),
		}
	}

	/// Layers `other` on top of `self`; values present in `other` win
	pub fn merge(self, other: ConfigOverrides) -> Self {
		Self {
			rpc_url: other.rpc_url.or(self.rpc_url),
			contract_address: other.contract_address.or(self.contract_address),
			abi_path: other.abi_path.or(self.abi_path),
			event_name: other.event_name.or(self.event_name),
		}
	}
}

impl ListenerConfig {
	/// Applies overrides to the configuration
	///
	/// An ABI path override replaces any inline ABI so the two sources never conflict.
	pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
		if let Some(rpc_url) = overrides.rpc_url {
			self.rpc_url = rpc_url;
		}
		if let Some(address) = overrides.contract_address {
			self.contract.address = address;
		}
		if let Some(abi_path) = overrides.abi_path {
			self.contract.abi = None;
			self.contract.abi_path = Some(abi_path);
		}
		if let Some(event_name) = overrides.event_name {
			self.event_name = event_name;
		}
	}
}
