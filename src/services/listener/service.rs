//! Contract event listener service.
//!
//! Registers a single log subscription for one contract event and forwards every
//! notification it produces to an event handler. There is no retry or reconnection:
//! when the node closes the subscription, the listener returns.

use alloy::{json_abi::Event, rpc::types::Filter};
use futures::StreamExt;
use std::sync::Arc;

use crate::{
	models::ContractSpec,
	services::{
		blockchain::LogTransport,
		listener::{
			decoder::build_event_filter, error::ListenerError, handler::EventHandlerFn,
			subscription::EventSubscription,
		},
	},
};

/// Subscription state of a listener
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerState {
	/// No subscription has been registered yet
	Unsubscribed,
	/// The subscription is registered and stays active for the rest of the process
	Subscribed,
}

/// Listener for a single event of a single contract
pub struct EventListener<T: LogTransport> {
	/// Connection to the node
	transport: Arc<T>,
	/// Contract being watched
	contract: ContractSpec,
	/// Definition of the watched event, resolved from the contract ABI
	event: Event,
	state: ListenerState,
}

impl<T: LogTransport> EventListener<T> {
	/// Creates a listener for `event_name` on `contract`
	///
	/// # Errors
	/// Returns `ListenerError::EventNotFound` if the ABI does not declare the event
	pub fn new(
		transport: Arc<T>,
		contract: ContractSpec,
		event_name: &str,
	) -> Result<Self, ListenerError> {
		let event = contract
			.event(event_name)
			.cloned()
			.ok_or_else(|| ListenerError::EventNotFound {
				event: event_name.to_string(),
				available: contract.event_names().join(", "),
			})?;

		Ok(Self {
			transport,
			contract,
			event,
			state: ListenerState::Unsubscribed,
		})
	}

	pub fn state(&self) -> ListenerState {
		self.state
	}

	pub fn event(&self) -> &Event {
		&self.event
	}

	pub fn contract(&self) -> &ContractSpec {
		&self.contract
	}

	/// The filter registered with the node
	pub fn filter(&self) -> Filter {
		build_event_filter(self.contract.address, &self.event)
	}

	/// Registers the event subscription on the node
	///
	/// A listener registers at most one subscription; the returned handle serves every
	/// later notification.
	///
	/// # Errors
	/// - `ListenerError::AlreadySubscribed` if called a second time
	/// - `ListenerError::BlockChain` if the node rejects the subscription
	pub async fn subscribe(&mut self) -> Result<EventSubscription, ListenerError> {
		if self.state == ListenerState::Subscribed {
			return Err(ListenerError::AlreadySubscribed(self.event.name.clone()));
		}

		let logs = self.transport.subscribe_logs(&self.filter()).await?;
		self.state = ListenerState::Subscribed;

		let rpc_url = self.transport.get_current_url().await;
		tracing::info!(
			event = %self.event.signature(),
			address = %self.contract.address,
			rpc_url = %rpc_url,
			"Subscribed to contract event"
		);

		Ok(EventSubscription::new(self.event.clone(), logs))
	}

	/// Subscribes and passes every notification to `handler` until the stream ends
	pub async fn run(&mut self, handler: EventHandlerFn) -> Result<(), ListenerError> {
		let mut subscription = self.subscribe().await?;

		while let Some(notification) = subscription.next().await {
			handler(notification);
		}

		tracing::warn!(
			event = %self.event.name,
			"Subscription closed by the node, no further events will be received"
		);
		Ok(())
	}
}
