//! Listener error types.

use thiserror::Error;

use crate::{models::ConfigError, services::blockchain::BlockChainError};

/// Errors that stop the listener from starting or running
#[derive(Debug, Error)]
pub enum ListenerError {
	/// The configuration is missing or malformed
	#[error(transparent)]
	Config(#[from] Box<ConfigError>),

	/// The node could not be reached or the subscription could not be registered
	#[error(transparent)]
	BlockChain(#[from] BlockChainError),

	/// The requested event is not declared in the contract ABI
	#[error("Event '{event}' not found in contract ABI (available: {available})")]
	EventNotFound { event: String, available: String },

	/// A subscription was already registered by this listener
	#[error("Listener is already subscribed to event '{0}'")]
	AlreadySubscribed(String),
}
