//! Configuration loading and validation.
//!
//! Configuration is read from a JSON file and then layered with overrides from the
//! environment and the command line before it is validated.

use std::path::Path;

mod error;
mod listener_config;

pub use error::ConfigError;

/// Common operations for configuration types loaded from disk
pub trait ConfigLoader: Sized {
	/// Load a configuration from a specific file
	fn load_from_path(path: &Path) -> Result<Self, Box<ConfigError>>;

	/// Validate the configuration
	fn validate(&self) -> Result<(), Box<ConfigError>>;
}
