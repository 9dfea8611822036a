//! dexfeed - a streaming client for newly created DEX pools.
//!
//! Subscribes to the DEXTools pool feed for one chain, turns every pool
//! creation message into a [`domain::coin::CoinInfo`] and hands it to the
//! configured sinks.
//!
//! # Architecture
//!
//! - **`domain`** - chain registry and the normalized pool record
//! - **`port`** - operator use-cases inbound; protocol, transport, sink and
//!   fault reporter traits outbound
//! - **`application`** - the listener state machine and the dispatcher
//! - **`adapter`** - WebSocket transport, CSV/Telegram/log sinks, CLI
//! - **`infrastructure`** - configuration and runtime wiring
//!
//! # Features
//!
//! - `telegram` - Telegram notification sink (default)
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use dexfeed::infrastructure::bootstrap::build_listener;
//! use dexfeed::infrastructure::config::settings::Config;
//! use dexfeed::port::outbound::reporter::TracingReporter;
//!
//! # async fn run() -> dexfeed::error::Result<()> {
//! let config = Config::load("config.toml")?;
//! let listener = build_listener(&config, Arc::new(TracingReporter))?;
//! let report = listener.run().await;
//! println!("{:?}", report.outcome);
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
