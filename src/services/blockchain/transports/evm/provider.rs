//! Alloy provider transport for EVM blockchain interactions.
//!
//! This module connects to EVM-compatible nodes through an alloy provider and exposes log
//! subscriptions. WebSocket endpoints use `eth_subscribe` push notifications; HTTP
//! endpoints install a log filter and poll it for changes.

use alloy::{
	primitives::U256,
	providers::{DynProvider, Provider, ProviderBuilder, WsConnect},
	rpc::types::{Filter, Log},
	transports::TransportError,
};
use async_trait::async_trait;
use futures::{Stream, StreamExt};
use tokio::time::{timeout, Interval, MissedTickBehavior};
use url::Url;

use crate::services::blockchain::{
	transports::{LogStream, LogTransport, TransportConfig},
	BlockChainError,
};

/// A client for subscribing to logs on EVM-compatible blockchain nodes
#[derive(Clone)]
pub struct EvmTransportClient {
	/// The underlying alloy provider
	provider: DynProvider,
	/// Connection settings the client was created with
	config: TransportConfig,
}

impl EvmTransportClient {
	/// Creates a new transport client and verifies the node is reachable
	///
	/// The connection is checked with an `eth_chainId` request. Both the connection and
	/// the check are bounded by the configured connection timeout.
	///
	/// # Arguments
	/// * `config` - Transport configuration holding the endpoint and timings
	///
	/// # Returns
	/// * `Result<Self, BlockChainError>` - A connected client or connection error
	pub async fn new(config: &TransportConfig) -> Result<Self, BlockChainError> {
		let url = &config.rpc_url;

		let provider = timeout(config.connection_timeout, Self::connect(url))
			.await
			.map_err(|_| {
				BlockChainError::connection_error(format!("Timed out connecting to {}", url))
			})??;

		match timeout(config.connection_timeout, provider.get_chain_id()).await {
			Ok(Ok(chain_id)) => {
				tracing::debug!(rpc_url = %url, chain_id, "Connected to node");
			}
			Ok(Err(e)) => {
				return Err(BlockChainError::connection_error_with_source(
					format!("Failed to reach node at {}", url),
					e,
				));
			}
			Err(_) => {
				return Err(BlockChainError::connection_error(format!(
					"Timed out waiting for node at {}",
					url
				)));
			}
		}

		Ok(Self {
			provider,
			config: config.clone(),
		})
	}

	/// Builds a provider for the endpoint based on its URL scheme
	async fn connect(url: &Url) -> Result<DynProvider, BlockChainError> {
		match url.scheme() {
			"ws" | "wss" => {
				// No reconnects: a dropped socket ends the subscription
				let connect = WsConnect::new(url.as_str()).with_max_retries(0);
				let provider = ProviderBuilder::new()
					.connect_ws(connect)
					.await
					.map_err(|e| {
						BlockChainError::connection_error_with_source(
							format!("Failed to open WebSocket connection to {}", url),
							e,
						)
					})?;
				Ok(provider.erased())
			}
			"http" | "https" => Ok(ProviderBuilder::new().connect_http(url.clone()).erased()),
			scheme => Err(BlockChainError::connection_error(format!(
				"Unsupported RPC URL scheme '{}'",
				scheme
			))),
		}
	}

	/// Returns the underlying provider
	pub fn provider(&self) -> &DynProvider {
		&self.provider
	}
}

#[async_trait]
impl LogTransport for EvmTransportClient {
	async fn get_current_url(&self) -> String {
		self.config.rpc_url.to_string()
	}

	/// Registers a log subscription on the node
	///
	/// Errors reported while the subscription is active are yielded as
	/// `BlockChainError::SubscriptionError` items rather than ending the stream. A
	/// dropped WebSocket connection or a log filter removed by the node ends it.
	async fn subscribe_logs(&self, filter: &Filter) -> Result<LogStream, BlockChainError> {
		if self.config.is_pubsub() {
			let subscription = self.provider.subscribe_logs(filter).await.map_err(|e| {
				BlockChainError::subscription_error_with_source("Failed to subscribe to logs", e)
			})?;

			let stream = subscription.into_result_stream().map(|item| {
				item.map_err(|e| {
					BlockChainError::subscription_error_with_source(
						"Failed to receive log notification",
						e,
					)
				})
			});
			Ok(stream.boxed())
		} else {
			let filter_id = self.provider.new_filter(filter).await.map_err(|e| {
				BlockChainError::subscription_error_with_source("Failed to install log filter", e)
			})?;

			let mut interval = tokio::time::interval(self.config.poll_interval);
			interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

			Ok(poll_filter_changes(self.provider.clone(), filter_id, interval).boxed())
		}
	}
}

/// Polls an installed log filter, one `eth_getFilterChanges` request per tick
///
/// Each failed poll is yielded as an error. The stream ends after the node reports
/// that the filter no longer exists.
fn poll_filter_changes(
	provider: DynProvider,
	filter_id: U256,
	interval: Interval,
) -> impl Stream<Item = Result<Log, BlockChainError>> + Send + 'static {
	futures::stream::unfold(Some((provider, interval)), move |state| async move {
		let Some((provider, mut interval)) = state else {
			return None;
		};
		interval.tick().await;

		match provider.get_filter_changes::<Log>(filter_id).await {
			Ok(logs) => {
				let batch: Vec<Result<Log, BlockChainError>> = logs.into_iter().map(Ok).collect();
				Some((batch, Some((provider, interval))))
			}
			Err(e) => {
				let dropped = is_filter_not_found(&e);
				let message = if dropped {
					"Log filter was removed by the node"
				} else {
					"Failed to poll log filter"
				};
				let error = BlockChainError::subscription_error_with_source(message, e);
				Some((vec![Err(error)], (!dropped).then_some((provider, interval))))
			}
		}
	})
	.flat_map(futures::stream::iter)
}

fn is_filter_not_found(error: &TransportError) -> bool {
	error
		.as_error_resp()
		.map(|payload| payload.message.to_lowercase().contains("filter not found"))
		.unwrap_or(false)
}
