//! Application services.
//!
//! - [`listener`] - connection lifecycle and the ingestion loop
//! - [`dispatch`] - ordered, fault-isolated sink delivery

pub mod dispatch;
pub mod listener;
