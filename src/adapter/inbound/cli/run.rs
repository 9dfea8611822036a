//! Handler for the `run` command.

use std::path::Path;

use crate::adapter::inbound::cli::command::RunArgs;
use crate::adapter::inbound::cli::operator;
use crate::error::Result;
use crate::port::inbound::operator::runtime::RunRequest;

/// Execute the run command.
///
/// Configuration problems (including an unknown chain) are returned before
/// any connection is attempted. Once the listener runs, its end is logged and
/// the command returns normally.
pub async fn execute(config_path: &Path, args: &RunArgs) -> Result<()> {
    let config_toml = operator::read_config_toml_or_default(config_path)?;
    let request = build_run_request(args, config_toml);
    operator::operator().execute_run(request).await
}

fn build_run_request(args: &RunArgs, config_toml: String) -> RunRequest {
    RunRequest {
        config_toml,
        chain: args.chain.clone(),
        log_file: args
            .log_file
            .as_ref()
            .map(|path| path.to_string_lossy().into_owned()),
        url: args.url.clone(),
        log_level: args.log_level.clone(),
        csv_path: args
            .csv
            .as_ref()
            .map(|path| path.to_string_lossy().into_owned()),
    }
}
