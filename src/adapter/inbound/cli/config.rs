//! Handlers for `config` subcommands.

use std::path::Path;

use crate::adapter::inbound::cli::operator;
use crate::error::Result;

/// Print the effective configuration with secrets masked.
pub fn execute_show(path: &Path) -> Result<()> {
    let config_toml = operator::read_config_toml_or_default(path)?;
    println!("{}", operator::operator().show_config(&config_toml)?);
    Ok(())
}

/// Validate the configuration file and report the result.
pub fn execute_validate(path: &Path) -> Result<()> {
    let config_toml = operator::read_config_toml(path)?;
    let report = operator::operator().validate_config(&config_toml)?;
    println!(
        "{} is valid (chain: {}, url: {}, sinks: {})",
        path.display(),
        report.chain,
        report.url,
        report.sinks.join(", ")
    );
    Ok(())
}
