//! Command dispatch for the parsed command line.

use crate::adapter::inbound::cli::command::{Cli, Commands, ConfigCommand};
use crate::adapter::inbound::cli::{chains, config, run};
use crate::error::Result;

/// Run the parsed command line.
///
/// # Errors
///
/// Returns configuration errors and anything that stops a command before it
/// completes.
pub async fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Run(args) => run::execute(&cli.config, &args).await,
        Commands::Chains => {
            chains::execute();
            Ok(())
        }
        Commands::Config(ConfigCommand::Show) => config::execute_show(&cli.config),
        Commands::Config(ConfigCommand::Validate) => config::execute_validate(&cli.config),
    }
}
