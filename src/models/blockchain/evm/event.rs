//! Decoded contract event payload.

use alloy::primitives::{Address, B256};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A contract event as delivered to event handlers
///
/// The field layout follows the event objects familiar from web3 tooling, so the
/// JSON rendering reads the same: decoded arguments live under `returnValues`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContractEvent {
	/// Event name from the ABI
	pub event: String,
	/// Signature hash (topic 0), absent for anonymous events
	pub signature: Option<B256>,
	/// Address of the emitting contract
	pub address: Address,
	pub block_number: Option<u64>,
	pub block_hash: Option<B256>,
	pub transaction_hash: Option<B256>,
	pub transaction_index: Option<u64>,
	pub log_index: Option<u64>,
	/// True when the log was removed by a chain reorganization
	pub removed: bool,
	/// Decoded event arguments keyed by parameter name
	pub return_values: Map<String, Value>,
}

impl fmt::Display for ContractEvent {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match serde_json::to_string(self) {
			Ok(json) => f.write_str(&json),
			Err(_) => write!(f, "{:?}", self),
		}
	}
}
