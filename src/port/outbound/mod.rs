//! Outbound ports: what the ingestion core needs from the outside world.

pub mod protocol;
pub mod reporter;
pub mod sink;
pub mod transport;
