//! Blockchain-specific model implementations.

pub mod evm {
	pub mod contract;
	pub mod event;
}
