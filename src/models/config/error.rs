//! Configuration error types.
//!
//! Errors raised while loading the listener configuration from disk, the
//! environment or the command line, and while validating it.

use std::collections::HashMap;

use crate::utils::{EnhancedContext, ErrorContext};

/// Errors that can occur during configuration operations
#[derive(Debug)]
#[allow(clippy::enum_variant_names)]
pub enum ConfigError {
	/// Configuration validation failed
	ValidationError(ErrorContext<String>),

	/// Failed to parse a configuration file or value
	ParseError(ErrorContext<String>),

	/// File system error during configuration loading
	FileError(ErrorContext<String>),
}

impl ConfigError {
	const TARGET: &str = "config::error";

	fn context(
		name: &str,
		msg: impl Into<String>,
		metadata: Option<HashMap<String, String>>,
	) -> ErrorContext<String> {
		ErrorContext::new(msg.into(), EnhancedContext::new(name).with_metadata(metadata))
			.with_target(Self::TARGET)
	}

	/// Create a new validation error
	pub fn validation_error(
		msg: impl Into<String>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::ValidationError(Self::context("Validation Error", msg, metadata))
	}

	/// Create a new validation error with source
	pub fn validation_error_with_source(
		msg: impl Into<String>,
		source: impl std::error::Error + Send + Sync + 'static,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::ValidationError(Self::context("Validation Error", msg, metadata).with_source(source))
	}

	/// Create a new parse error
	pub fn parse_error(msg: impl Into<String>, metadata: Option<HashMap<String, String>>) -> Self {
		Self::ParseError(Self::context("Parse Error", msg, metadata))
	}

	/// Create a new parse error with source
	pub fn parse_error_with_source(
		msg: impl Into<String>,
		source: impl std::error::Error + Send + Sync + 'static,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::ParseError(Self::context("Parse Error", msg, metadata).with_source(source))
	}

	/// Create a new file error
	pub fn file_error(msg: impl Into<String>, metadata: Option<HashMap<String, String>>) -> Self {
		Self::FileError(Self::context("File Error", msg, metadata))
	}

	/// Create a new file error with source
	pub fn file_error_with_source(
		msg: impl Into<String>,
		source: impl std::error::Error + Send + Sync + 'static,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::FileError(Self::context("File Error", msg, metadata).with_source(source))
	}

	/// Returns the wrapped error context
	pub fn error_context(&self) -> &ErrorContext<String> {
		match self {
			Self::ValidationError(ctx) | Self::ParseError(ctx) | Self::FileError(ctx) => ctx,
		}
	}
}

impl std::error::Error for ConfigError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		std::error::Error::source(self.error_context())
	}
}

impl std::fmt::Display for ConfigError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		std::fmt::Display::fmt(self.error_context(), f)
	}
}

impl From<std::io::Error> for ConfigError {
	fn from(err: std::io::Error) -> Self {
		Self::file_error_with_source("I/O failure", err, None)
	}
}

impl From<serde_json::Error> for ConfigError {
	fn from(err: serde_json::Error) -> Self {
		Self::parse_error_with_source("Invalid JSON", err, None)
	}
}
