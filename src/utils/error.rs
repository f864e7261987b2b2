//! Error handling utilities for the application.
//!
//! This module provides a structured approach to error handling with context and metadata.
//! The primary type is [`ErrorContext`], which wraps an error payload together with an
//! [`EnhancedContext`] describing the kind of failure, an optional source error, and
//! bookkeeping such as a timestamp and a trace ID.
//!
//! # Examples
//!
//! ```
//! use std::collections::HashMap;
//! use contract_event_listener::utils::{EnhancedContext, ErrorContext};
//!
//! let metadata = HashMap::from([("rpc_url".to_string(), "ws://localhost:8546".to_string())]);
//! let error = ErrorContext::new(
//! 	"Failed to reach node".to_string(),
//! 	EnhancedContext::new("Connection Error").with_metadata(Some(metadata)),
//! );
//!
//! assert_eq!(error.to_string(), "Connection Error: Failed to reach node");
//! assert_eq!(
//! 	error.format_with_metadata(),
//! 	"Connection Error: Failed to reach node [rpc_url=ws://localhost:8546]"
//! );
//! ```

use chrono::Utc;
use std::{collections::HashMap, fmt};
use uuid::Uuid;

/// Describes the kind of failure an [`ErrorContext`] carries.
#[derive(Debug, Clone, Default)]
pub struct EnhancedContext {
	/// Human readable name of the error kind, e.g. "Connection Error"
	pub name: String,
	/// Additional key-value pairs describing the failure
	pub metadata: Option<HashMap<String, String>>,
}

impl EnhancedContext {
	/// Creates a new context with the given error kind name
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			metadata: None,
		}
	}

	/// Attaches metadata to the context, replacing any existing metadata
	pub fn with_metadata(mut self, metadata: Option<HashMap<String, String>>) -> Self {
		self.metadata = metadata;
		self
	}
}

/// A context wrapper for errors with additional metadata.
///
/// Each error context includes:
///
/// - The error payload (usually a message)
/// - The [`EnhancedContext`] naming the error kind
/// - An optional source error
/// - An optional target naming the module that produced the error
/// - A timestamp (automatically generated)
/// - A unique trace ID (automatically generated)
#[derive(Debug)]
pub struct ErrorContext<T> {
	/// The error payload
	pub inner: T,
	/// The kind of error and its metadata
	pub context: EnhancedContext,
	/// The source error that caused this error
	pub source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
	/// The module that produced the error
	pub target: Option<&'static str>,
	/// The timestamp of the error in RFC 3339 format
	pub timestamp: String,
	/// The unique identifier for the error (UUID v4)
	pub trace_id: String,
}

impl<T: fmt::Display> ErrorContext<T> {
	/// Creates a new error context with an automatically generated timestamp and trace ID.
	pub fn new(inner: T, context: EnhancedContext) -> Self {
		Self {
			inner,
			context,
			source: None,
			target: None,
			timestamp: Utc::now().to_rfc3339(),
			trace_id: Uuid::new_v4().to_string(),
		}
	}

	/// Attaches the error that caused this one
	pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
		self.source = Some(Box::new(source));
		self
	}

	/// Records the module that produced the error
	pub fn with_target(mut self, target: &'static str) -> Self {
		self.target = Some(target);
		self
	}

	/// Formats the error message with its metadata appended in a readable format.
	///
	/// The format is: `"Name: message [key1=value1, key2=value2, ...]"`.
	/// Metadata keys are sorted alphabetically for consistent output.
	pub fn format_with_metadata(&self) -> String {
		let mut result = self.to_string();

		if let Some(metadata) = &self.context.metadata {
			let mut keys: Vec<_> = metadata.keys().collect();
			keys.sort();

			let parts: Vec<String> = keys
				.into_iter()
				.filter_map(|key| metadata.get(key).map(|value| format!("{}={}", key, value)))
				.collect();

			if !parts.is_empty() {
				result.push_str(&format!(" [{}]", parts.join(", ")));
			}
		}

		result
	}
}

impl<T: fmt::Display> fmt::Display for ErrorContext<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}: {}", self.context.name, self.inner)?;
		if let Some(source) = &self.source {
			write!(f, " ({})", source)?;
		}
		Ok(())
	}
}

impl<T: fmt::Display + fmt::Debug> std::error::Error for ErrorContext<T> {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		self.source
			.as_ref()
			.map(|source| source.as_ref() as &(dyn std::error::Error + 'static))
	}
}

/// Formats the complete error chain, one cause per line
pub fn format_error_chain(err: &(dyn std::error::Error + 'static)) -> String {
	let mut result = err.to_string();
	let mut source = err.source();

	while let Some(err) = source {
		result.push_str(&format!("\n  Caused by: {}", err));
		source = err.source();
	}

	result
}
