//! Integration tests for the contract event listener.
//!
//! Contains tests for configuration loading, listener initialization, event delivery and
//! the node transport, together with the mock implementations they share.

mod integration {
	mod blockchain {
		mod transports {
			mod evm;
		}
	}
	mod bootstrap;
	mod fixtures;
	mod listener;
	mod mocks;
}
