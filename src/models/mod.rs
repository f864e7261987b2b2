//! Domain models and data structures for contract event listening.
//!
//! This module contains all the core data structures used throughout the application:
//!
//! - `blockchain`: EVM contract descriptor and decoded event payload
//! - `config`: Configuration loading and validation
//! - `core`: Listener configuration model

mod blockchain;
mod config;
mod core;

pub use blockchain::evm::{contract::ContractSpec, event::ContractEvent};
pub use config::{ConfigError, ConfigLoader};
pub use self::core::{
	ConfigOverrides, ContractConfig, ListenerConfig, DEFAULT_CONNECTION_TIMEOUT_MS,
	DEFAULT_EVENT_NAME, DEFAULT_POLL_INTERVAL_MS, DEFAULT_RPC_URL,
};
