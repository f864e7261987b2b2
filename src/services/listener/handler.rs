//! Event notification handling.
//!
//! A notification is either a decoded event payload or the error that took its place.
//! Handlers receive every notification of a subscription in delivery order.

use std::sync::Arc;

use crate::{models::ContractEvent, services::blockchain::BlockChainError};

/// A single delivery from an event subscription: the payload or an error, never both
pub type EventNotification = Result<ContractEvent, BlockChainError>;

/// Callback invoked for every notification of a subscription
pub type EventHandlerFn = Arc<dyn Fn(EventNotification) + Send + Sync>;

/// Writes a notification to the log
///
/// Payloads are logged at info level as `<event> event: <payload>`; errors at error
/// level as `Error: <error>`.
pub fn log_notification(notification: &EventNotification) {
	match notification {
		Ok(event) => tracing::info!("{} event: {}", event.event, event),
		Err(error) => tracing::error!("Error: {}", error),
	}
}

/// Creates the default handler, which logs every notification
pub fn create_logging_handler() -> EventHandlerFn {
	Arc::new(|notification: EventNotification| log_notification(&notification))
}
