//! Contract descriptor for EVM chains.

use alloy::{
	json_abi::{Event, JsonAbi},
	primitives::Address,
};

/// A deployed contract together with its interface definition
#[derive(Debug, Clone, PartialEq)]
pub struct ContractSpec {
	/// Address the contract is deployed at
	pub address: Address,
	/// Interface definition used to resolve and decode events
	pub abi: JsonAbi,
}

impl ContractSpec {
	pub fn new(address: Address, abi: JsonAbi) -> Self {
		Self { address, abi }
	}

	/// Looks up an event by name
	///
	/// When the ABI declares several overloads under the same name, the first
	/// declaration is returned.
	pub fn event(&self, name: &str) -> Option<&Event> {
		self.abi.event(name).and_then(|overloads| overloads.first())
	}

	/// Names of all events declared in the ABI
	pub fn event_names(&self) -> Vec<String> {
		self.abi.events().map(|event| event.name.clone()).collect()
	}
}
