//! Feed-agnostic domain types.

pub mod chain;
pub mod coin;
pub mod number;
