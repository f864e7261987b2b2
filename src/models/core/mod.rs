//! Core models shared by configuration and services.

mod listener;

pub use listener::*;
