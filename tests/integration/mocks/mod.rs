//! Mock implementations for testing purposes.


pub use transports::*;
