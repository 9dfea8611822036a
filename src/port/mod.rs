//! Port definitions (hexagonal architecture).
//!
//! - `inbound` - use cases driven by the command line
//! - `outbound` - what the ingestion core needs from the outside world

pub mod inbound;
pub mod outbound;
