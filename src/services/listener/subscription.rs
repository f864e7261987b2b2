//! Active event subscription.

use alloy::json_abi::Event;
use futures::{Stream, StreamExt};
use std::{
	pin::Pin,
	task::{Context, Poll},
};

use crate::services::{
	blockchain::LogStream,
	listener::{decoder::decode_event, handler::EventNotification},
};

/// A registered subscription for one contract event
///
/// Yields one [`EventNotification`] per log delivered by the node. Logs that cannot be
/// decoded and errors reported by the transport are yielded as `Err` items; the
/// subscription keeps running after them. The stream ends only when the node closes
/// the underlying subscription.
pub struct EventSubscription {
	event: Event,
	logs: LogStream,
}

impl EventSubscription {
	pub fn new(event: Event, logs: LogStream) -> Self {
		Self { event, logs }
	}

	/// The event definition notifications are decoded against
	pub fn event(&self) -> &Event {
		&self.event
	}
}

impl Stream for EventSubscription {
	type Item = EventNotification;

	fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
		let this = self.get_mut();
		this.logs.poll_next_unpin(cx).map(|item| {
			item.map(|result| result.and_then(|log| decode_event(&this.event, &log)))
		})
	}
}
