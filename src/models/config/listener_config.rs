//! Listener configuration loading and validation.
//!
//! This module implements the ConfigLoader trait for ListenerConfig and turns the raw
//! configuration values into the typed endpoint, address and ABI the listener uses.

use alloy::{json_abi::JsonAbi, primitives::Address};
use serde_json::Value;
use std::{collections::HashMap, fs, path::Path, str::FromStr};
use url::Url;

use crate::models::{config::error::ConfigError, ConfigLoader, ContractSpec, ListenerConfig};

/// URL schemes the transport layer can connect to
pub const SUPPORTED_SCHEMES: [&str; 4] = ["http", "https", "ws", "wss"];

impl ConfigLoader for ListenerConfig {
	/// Load the listener configuration from a specific file
	///
	/// The file is parsed but not validated; callers validate after applying overrides.
	fn load_from_path(path: &Path) -> Result<Self, Box<ConfigError>> {
		let metadata = HashMap::from([("path".to_string(), path.display().to_string())]);
		let content = fs::read_to_string(path).map_err(|e| {
			ConfigError::file_error_with_source("Failed to read config file", e, Some(metadata.clone()))
		})?;

		serde_json::from_str(&content).map_err(|e| {
			Box::new(ConfigError::parse_error_with_source(
				"Failed to parse config file",
				e,
				Some(metadata),
			))
		})
	}

	/// Validate the listener configuration
	///
	/// Ensures that:
	/// - The RPC URL parses and uses a supported scheme
	/// - The contract address is present and well formed
	/// - A non-empty ABI is available inline or on disk
	/// - An event name is set
	/// - Timeouts are non-zero
	fn validate(&self) -> Result<(), Box<ConfigError>> {
		self.endpoint()?;
		self.contract_address()?;
		self.load_abi()?;

		if self.event_name.trim().is_empty() {
			return Err(Box::new(ConfigError::validation_error(
				"Event name cannot be empty",
				None,
			)));
		}

		if self.connection_timeout_ms == 0 {
			return Err(Box::new(ConfigError::validation_error(
				"Connection timeout must be greater than zero",
				None,
			)));
		}

		if self.poll_interval_ms == 0 {
			return Err(Box::new(ConfigError::validation_error(
				"Poll interval must be greater than zero",
				None,
			)));
		}

		Ok(())
	}
}

impl ListenerConfig {
	/// Parses the configured RPC endpoint
	pub fn endpoint(&self) -> Result<Url, Box<ConfigError>> {
		let metadata = HashMap::from([("rpc_url".to_string(), self.rpc_url.clone())]);

		if self.rpc_url.trim().is_empty() {
			return Err(Box::new(ConfigError::validation_error(
				"RPC URL cannot be empty",
				None,
			)));
		}

		let url = Url::parse(self.rpc_url.trim()).map_err(|e| {
			ConfigError::validation_error_with_source("Invalid RPC URL", e, Some(metadata.clone()))
		})?;

		if !SUPPORTED_SCHEMES.contains(&url.scheme()) {
			return Err(Box::new(ConfigError::validation_error(
				format!(
					"Unsupported RPC URL scheme '{}', expected one of {}",
					url.scheme(),
					SUPPORTED_SCHEMES.join(", ")
				),
				Some(metadata),
			)));
		}

		Ok(url)
	}

	/// Parses the configured contract address
	pub fn contract_address(&self) -> Result<Address, Box<ConfigError>> {
		let address = self.contract.address.trim();
		if address.is_empty() {
			return Err(Box::new(ConfigError::validation_error(
				"Contract address cannot be empty",
				None,
			)));
		}

		Address::from_str(address).map_err(|e| {
			Box::new(ConfigError::validation_error_with_source(
				"Invalid contract address",
				e,
				Some(HashMap::from([("address".to_string(), address.to_string())])),
			))
		})
	}

	/// Loads the contract ABI from the inline value or from `abi_path`
	pub fn load_abi(&self) -> Result<JsonAbi, Box<ConfigError>> {
		match (&self.contract.abi, &self.contract.abi_path) {
			(Some(value), _) => abi_from_value(value.clone(), "inline"),
			(None, Some(path)) => {
				let origin = path.display().to_string();
				let metadata = HashMap::from([("abi_path".to_string(), origin.clone())]);
				let content = fs::read_to_string(path).map_err(|e| {
					ConfigError::file_error_with_source(
						"Failed to read ABI file",
						e,
						Some(metadata.clone()),
					)
				})?;
				let value: Value = serde_json::from_str(&content).map_err(|e| {
					ConfigError::parse_error_with_source("Failed to parse ABI file", e, Some(metadata))
				})?;
				abi_from_value(value, &origin)
			}
			(None, None) => Err(Box::new(ConfigError::validation_error(
				"Contract ABI is required (set contract.abi or contract.abi_path)",
				None,
			))),
		}
	}

	/// Builds the typed contract descriptor from the configuration
	pub fn contract_spec(&self) -> Result<ContractSpec, Box<ConfigError>> {
		Ok(ContractSpec::new(self.contract_address()?, self.load_abi()?))
	}
}

/// Accepts a plain ABI array or an artifact object carrying it under `abi`
fn abi_from_value(value: Value, origin: &str) -> Result<JsonAbi, Box<ConfigError>> {
	let metadata = HashMap::from([("abi".to_string(), origin.to_string())]);

	let items = match value {
		Value::Array(items) => items,
		Value::Object(mut artifact) => match artifact.remove("abi") {
			Some(Value::Array(items)) => items,
			_ => {
				return Err(Box::new(ConfigError::validation_error(
					"ABI artifact has no 'abi' array",
					Some(metadata),
				)))
			}
		},
		_ => {
			return Err(Box::new(ConfigError::validation_error(
				"Contract ABI must be a JSON array",
				Some(metadata),
			)))
		}
	};

	if items.is_empty() {
		return Err(Box::new(ConfigError::validation_error(
			"Contract ABI cannot be empty",
			Some(metadata),
		)));
	}

	serde_json::from_value(Value::Array(items)).map_err(|e| {
		Box::new(ConfigError::parse_error_with_source(
			"Invalid contract ABI",
			e,
			Some(metadata),
		))
	})
}
