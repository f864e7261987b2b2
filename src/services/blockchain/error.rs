//! Blockchain error types and handling.
//!
//! This module provides the error type for node interactions: connecting to the RPC
//! endpoint, registering log subscriptions, receiving notifications and decoding them.

use crate::utils::{EnhancedContext, ErrorContext};

/// Represents possible errors that can occur during blockchain operations
#[derive(Debug)]
pub enum BlockChainError {
	/// Errors related to network connectivity issues
	ConnectionError(ErrorContext<String>),

	/// Errors related to malformed requests or invalid responses
	RequestError(ErrorContext<String>),

	/// Errors reported by an active log subscription
	SubscriptionError(ErrorContext<String>),

	/// A received log could not be decoded against the event definition
	DecodeError(ErrorContext<String>),

	/// Internal errors within the blockchain client
	InternalError(ErrorContext<String>),
}

impl BlockChainError {
	const TARGET: &str = "blockchain::error";

	fn context(name: &str, msg: impl Into<String>) -> ErrorContext<String> {
		ErrorContext::new(msg.into(), EnhancedContext::new(name)).with_target(Self::TARGET)
	}

	/// Creates a new connection error
	pub fn connection_error(msg: impl Into<String>) -> Self {
		Self::ConnectionError(Self::context("Connection Error", msg))
	}

	/// Creates a new connection error with source error
	pub fn connection_error_with_source(
		msg: impl Into<String>,
		source: impl std::error::Error + Send + Sync + 'static,
	) -> Self {
		Self::ConnectionError(Self::context("Connection Error", msg).with_source(source))
	}

	/// Creates a new request error
	pub fn request_error(msg: impl Into<String>) -> Self {
		Self::RequestError(Self::context("Request Error", msg))
	}

	/// Creates a new request error with source error
	pub fn request_error_with_source(
		msg: impl Into<String>,
		source: impl std::error::Error + Send + Sync + 'static,
	) -> Self {
		Self::RequestError(Self::context("Request Error", msg).with_source(source))
	}

	/// Creates a new subscription error
	pub fn subscription_error(msg: impl Into<String>) -> Self {
		Self::SubscriptionError(Self::context("Subscription Error", msg))
	}

	/// Creates a new subscription error with source error
	pub fn subscription_error_with_source(
		msg: impl Into<String>,
		source: impl std::error::Error + Send + Sync + 'static,
	) -> Self {
		Self::SubscriptionError(Self::context("Subscription Error", msg).with_source(source))
	}

	/// Creates a new decode error
	pub fn decode_error(msg: impl Into<String>) -> Self {
		Self::DecodeError(Self::context("Decode Error", msg))
	}

	/// Creates a new decode error with source error
	pub fn decode_error_with_source(
		msg: impl Into<String>,
		source: impl std::error::Error + Send + Sync + 'static,
	) -> Self {
		Self::DecodeError(Self::context("Decode Error", msg).with_source(source))
	}

	/// Creates a new internal error
	pub fn internal_error(msg: impl Into<String>) -> Self {
		Self::InternalError(Self::context("Internal Error", msg))
	}

	/// Creates a new internal error with source error
	pub fn internal_error_with_source(
		msg: impl Into<String>,
		source: impl std::error::Error + Send + Sync + 'static,
	) -> Self {
		Self::InternalError(Self::context("Internal Error", msg).with_source(source))
	}

	/// Returns the wrapped error context
	pub fn error_context(&self) -> &ErrorContext<String> {
		match self {
			Self::ConnectionError(ctx)
			| Self::RequestError(ctx)
			| Self::SubscriptionError(ctx)
			| Self::DecodeError(ctx)
			| Self::InternalError(ctx) => ctx,
		}
	}
}

impl std::error::Error for BlockChainError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		std::error::Error::source(self.error_context())
	}
}

impl std::fmt::Display for BlockChainError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		std::fmt::Display::fmt(self.error_context(), f)
	}
}

/// Conversion from alloy transport errors to BlockChainError
impl From<alloy::transports::TransportError> for BlockChainError {
	fn from(err: alloy::transports::TransportError) -> Self {
		Self::request_error_with_source("RPC request failed", err)
	}
}
