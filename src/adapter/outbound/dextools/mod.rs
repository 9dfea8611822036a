//! DEXTools pool feed adapter.
//!
//! - [`dto::message`] - subscribe request encoding and frame decoding
//! - [`extract`] - pool record extraction and filtering
//! - [`protocol`] - the two above behind the `FeedProtocol` port
//! - [`stream`] - WebSocket transport

pub mod dto;
pub mod extract;
pub mod protocol;
pub mod stream;
