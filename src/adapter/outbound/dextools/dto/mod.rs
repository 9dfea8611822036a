//! DEXTools wire types.

pub mod message;
