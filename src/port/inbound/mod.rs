//! Inbound (driving) ports consumed by inbound adapters.
//!
//! - [`operator`]: operator-facing use cases for running the feed and
//!   managing configuration

pub mod operator;
