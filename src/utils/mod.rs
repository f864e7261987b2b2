//! Utility modules for common functionality.
//!
//! - error: Error context wrapper used by every domain error type
//! - logging: Subscriber setup for stdout and rolling file output

mod error;
pub mod logging;

pub use error::*;
