//! Runtime operator implementation.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::signal;
use tracing::{info, warn};

use crate::application::listener::RunOutcome;
use crate::error::Result;
use crate::infrastructure::bootstrap::build_listener;
use crate::infrastructure::config::settings::Config;
use crate::port::inbound::operator::runtime::{RunRequest, RuntimeOperator};
use crate::port::outbound::reporter::{FaultReporter, TracingReporter};

use super::entry::Operator;

#[async_trait]
impl RuntimeOperator for Operator {
    async fn execute_run(&self, request: RunRequest) -> Result<()> {
        let config = self.load_run_config(&request)?;
        config.init_logging()?;

        let reporter: Arc<dyn FaultReporter> = Arc::new(TracingReporter);
        let listener = build_listener(&config, reporter)?;

        info!(version = env!("CARGO_PKG_VERSION"), "dexfeed starting");

        tokio::select! {
            report = listener.run() => match report.outcome {
                RunOutcome::Closed { code, reason } => {
                    info!(code = ?code, reason = %reason, "Feed closed");
                }
                RunOutcome::Errored { error } => {
                    warn!(error = %error, "Feed ended with an error");
                }
            },
            _ = signal::ctrl_c() => {
                info!("Shutdown signal received");
            }
        }

        info!("dexfeed stopped");
        Ok(())
    }
}

impl Operator {
    /// File and environment first, then the request's overrides, then one
    /// validation pass over the result.
    fn load_run_config(&self, request: &RunRequest) -> Result<Config> {
        let mut config = Config::from_toml(&request.config_toml)?;
        Self::apply_run_overrides(&mut config, request);
        config.validate()?;
        Ok(config)
    }

    fn apply_run_overrides(config: &mut Config, request: &RunRequest) {
        if let Some(ref chain) = request.chain {
            config.feed.chain = chain.clone();
        }

        if let Some(ref path) = request.log_file {
            config.logging.file = Some(PathBuf::from(path));
        }

        if let Some(ref url) = request.url {
            config.feed.url = url.clone();
        }

        if let Some(ref level) = request.log_level {
            config.logging.level = level.clone();
        }

        if let Some(ref path) = request.csv_path {
            config.csv.enabled = true;
            config.csv.path = PathBuf::from(path);
        }
    }
}
