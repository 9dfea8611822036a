//! Outbound adapters: the feed transport and the record sinks.

pub mod dextools;
pub mod sink;
