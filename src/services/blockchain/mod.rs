//! Blockchain client interfaces and implementations.
//!
//! Provides the node-facing half of the listener:
//! - Transport implementations that register log subscriptions on a node
//! - Error types for connection, subscription and decoding failures

mod error;
mod transports;

pub use error::BlockChainError;
pub use transports::{EvmTransportClient, LogStream, LogTransport, TransportConfig};
