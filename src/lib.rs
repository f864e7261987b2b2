//! Contract event listener.
//!
//! Subscribes to one event of one smart contract on an EVM node and logs every
//! notification: the decoded event payload, or the error reported in its place.
//!
//! # Architecture
//!
//! - `bootstrap`: Builds the listener from configuration
//! - `models`: Configuration, contract descriptor and event payload types
//! - `services`: Node transports and the listener service
//! - `utils`: Error context and logging setup

pub mod bootstrap;
pub mod models;
pub mod services;
pub mod utils;
