//! Adapter implementations.
//!
//! - `inbound` - the command line
//! - `outbound` - feed transport and sinks

pub mod inbound;
pub mod outbound;
