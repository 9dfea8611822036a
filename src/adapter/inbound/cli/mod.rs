//! CLI module graph.

pub mod chains;
pub mod command;
pub mod config;
pub mod entry;
pub mod operator;
pub mod run;
