//! Network transport implementations for blockchain clients.
//!
//! Provides the log subscription seam used by the listener and its EVM implementation:
//! - `LogTransport` trait for registering log subscriptions
//! - `EvmTransportClient` backed by an alloy provider (WebSocket push or HTTP polling)
//! - `TransportConfig` holding connection settings

mod config;
mod evm {
	pub mod provider;
}

pub use config::TransportConfig;
pub use evm::provider::EvmTransportClient;

use alloy::rpc::types::{Filter, Log};
use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::services::blockchain::BlockChainError;

/// Stream of logs delivered by a subscription
///
/// Each item is either a log matching the registered filter or an error reported by the
/// subscription. The stream ends when the node closes the subscription.
pub type LogStream = BoxStream<'static, Result<Log, BlockChainError>>;

/// Transport capable of registering log subscriptions on a node
#[async_trait]
pub trait LogTransport: Send + Sync {
	/// Returns the URL of the endpoint this transport is connected to
	async fn get_current_url(&self) -> String;

	/// Registers a subscription for logs matching `filter`
	///
	/// Every call registers a new subscription on the node.
	async fn subscribe_logs(&self, filter: &Filter) -> Result<LogStream, BlockChainError>;
}
