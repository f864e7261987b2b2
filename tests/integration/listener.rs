use std::sync::{Arc, Mutex};

use alloy::rpc::types::{Filter, Log};
use futures::StreamExt;
use serde_json::json;

use contract_event_listener::services::{
	blockchain::{BlockChainError, LogStream},
	listener::{EventHandlerFn, EventListener, EventNotification, ListenerError, ListenerState},
};

use crate::integration::{
	fixtures::{done_contract, done_log, CONTRACT_ADDRESS},
	mocks::MockLogTransportClient,
};

fn stream_of(items: Vec<Result<Log, BlockChainError>>) -> LogStream {
	futures::stream::iter(items).boxed()
}

fn transport_delivering(items: Vec<Result<Log, BlockChainError>>) -> MockLogTransportClient {
	let mut transport = MockLogTransportClient::new();
	transport
		.expect_get_current_url()
		.returning(|| "http://localhost:8545".to_string());
	transport
		.expect_subscribe_logs()
		.times(1)
		.return_once(move |_| Ok(stream_of(items)));
	transport
}

fn collecting_handler() -> (EventHandlerFn, Arc<Mutex<Vec<EventNotification>>>) {
	let received = Arc::new(Mutex::new(Vec::new()));
	let sink = received.clone();
	let handler: EventHandlerFn = Arc::new(move |notification| {
		sink.lock().unwrap().push(notification);
	});
	(handler, received)
}

#[tokio::test]
async fn test_subscribe_registers_filter_for_done_event_only() {
	let contract = done_contract();
	let done = contract.event("Done").unwrap().clone();
	let expected = Filter::new()
		.address(CONTRACT_ADDRESS)
		.event_signature(done.selector());

	let mut transport = MockLogTransportClient::new();
	transport
		.expect_get_current_url()
		.returning(|| "http://localhost:8545".to_string());
	transport
		.expect_subscribe_logs()
		.withf(move |filter| *filter == expected)
		.times(1)
		.return_once(|_| Ok(stream_of(Vec::new())));

	let mut listener = EventListener::new(Arc::new(transport), contract, "Done").unwrap();
	assert_eq!(listener.state(), ListenerState::Unsubscribed);

	let subscription = listener.subscribe().await.unwrap();
	assert_eq!(subscription.event().name, "Done");
	assert_eq!(listener.state(), ListenerState::Subscribed);
}

#[tokio::test]
async fn test_second_subscribe_is_rejected() {
	let transport = transport_delivering(Vec::new());
	let mut listener = EventListener::new(Arc::new(transport), done_contract(), "Done").unwrap();

	assert!(listener.subscribe().await.is_ok());

	match listener.subscribe().await {
		Err(ListenerError::AlreadySubscribed(event)) => assert_eq!(event, "Done"),
		Err(e) => panic!("Unexpected error: {}", e),
		Ok(_) => panic!("Second subscription should be rejected"),
	}
	assert_eq!(listener.state(), ListenerState::Subscribed);
}

#[tokio::test]
async fn test_unknown_event_is_rejected() {
	let transport = MockLogTransportClient::new();

	match EventListener::new(Arc::new(transport), done_contract(), "Finished") {
		Err(ListenerError::EventNotFound { event, available }) => {
			assert_eq!(event, "Finished");
			assert!(available.contains("Done"));
			assert!(available.contains("Started"));
		}
		Err(e) => panic!("Unexpected error: {}", e),
		Ok(_) => panic!("Listener should not be created for an undeclared event"),
	}
}

#[tokio::test]
async fn test_failed_subscription_leaves_listener_unsubscribed() {
	let mut transport = MockLogTransportClient::new();
	transport
		.expect_subscribe_logs()
		.times(1)
		.return_once(|_| Err(BlockChainError::subscription_error("filter rejected")));

	let mut listener = EventListener::new(Arc::new(transport), done_contract(), "Done").unwrap();

	match listener.subscribe().await {
		Err(ListenerError::BlockChain(e)) => {
			assert_eq!(e.to_string(), "Subscription Error: filter rejected")
		}
		Err(e) => panic!("Unexpected error: {}", e),
		Ok(_) => panic!("Subscription should fail"),
	}
	assert_eq!(listener.state(), ListenerState::Unsubscribed);
}

#[tokio::test]
async fn test_run_delivers_every_notification_in_order() {
	let transport = transport_delivering(vec![
		Ok(done_log(1, 10)),
		Ok(done_log(2, 11)),
		Ok(done_log(3, 12)),
	]);
	let mut listener = EventListener::new(Arc::new(transport), done_contract(), "Done").unwrap();
	let (handler, received) = collecting_handler();

	listener.run(handler).await.unwrap();

	let received = received.lock().unwrap();
	assert_eq!(received.len(), 3);
	for (index, notification) in received.iter().enumerate() {
		let event = notification.as_ref().unwrap();
		assert_eq!(event.event, "Done");
		assert_eq!(event.return_values.get("x"), Some(&json!(index as u64 + 1)));
		assert_eq!(event.block_number, Some(10 + index as u64));
	}
}

#[tokio::test]
async fn test_run_continues_after_error_notification() {
	let transport = transport_delivering(vec![
		Ok(done_log(1, 10)),
		Err(BlockChainError::subscription_error("connection timeout")),
		Ok(done_log(2, 11)),
	]);
	let mut listener = EventListener::new(Arc::new(transport), done_contract(), "Done").unwrap();
	let (handler, received) = collecting_handler();

	listener.run(handler).await.unwrap();

	let received = received.lock().unwrap();
	assert_eq!(received.len(), 3);
	assert!(received[0].is_ok());
	match &received[1] {
		Err(e) => assert_eq!(e.to_string(), "Subscription Error: connection timeout"),
		Ok(_) => panic!("Expected an error notification"),
	}
	assert!(received[2].is_ok());
}

#[tokio::test]
async fn test_undecodable_log_becomes_error_notification() {
	let mut malformed = done_log(1, 10);
	malformed.inner.data = alloy::primitives::LogData::new_unchecked(
		malformed.inner.data.topics().to_vec(),
		Default::default(),
	);
	let transport = transport_delivering(vec![Ok(malformed)]);
	let mut listener = EventListener::new(Arc::new(transport), done_contract(), "Done").unwrap();
	let (handler, received) = collecting_handler();

	listener.run(handler).await.unwrap();

	let received = received.lock().unwrap();
	assert_eq!(received.len(), 1);
	assert!(matches!(received[0], Err(BlockChainError::DecodeError(_))));
}
