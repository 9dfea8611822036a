//! Infrastructure configuration modules.

pub mod csv;
pub mod feed;
pub mod logging;
pub mod settings;
pub mod telegram;
