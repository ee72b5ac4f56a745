//! Shared configuration types for CLI commands

use clap::Args;
use serde::{Deserialize, Serialize};

/// Common configuration shared across commands
#[derive(Args, Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommonConfig {
    /// Random seed for reproducibility
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Verbose output (debug logging unless RUST_LOG is set)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

impl CommonConfig {
    /// Default log filter for `env_logger`.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}
