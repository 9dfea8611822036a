//! Sink adapters.
//!
//! Implements the `port::outbound::sink::Sink` trait for the supported outputs.

pub mod csv;
pub mod log;

#[cfg(feature = "telegram")]
pub mod telegram;
