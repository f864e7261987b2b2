//! Core services implementing the listener.
//!
//! - `blockchain`: Node transports and blockchain errors
//! - `listener`: Event subscription, decoding and notification handling

pub mod blockchain;
pub mod listener;
