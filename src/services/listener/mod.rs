//! Contract event listening service.
//!
//! Ties the transport and the contract descriptor together:
//! - `EventListener` registers the subscription and drives it
//! - `EventSubscription` decodes incoming logs into notifications
//! - handlers consume notifications; the default one logs them

pub mod decoder;
mod error;
mod handler;
mod service;
mod subscription;

pub use decoder::{build_event_filter, decode_event, sol_value_to_json};
pub use error::ListenerError;
pub use handler::{create_logging_handler, log_notification, EventHandlerFn, EventNotification};
pub use service::{EventListener, ListenerState};
pub use subscription::EventSubscription;
