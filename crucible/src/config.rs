//! Command-line flags and the resolved run configuration.

use std::path::PathBuf;

use clap::Parser;
use runpath_paths::RunPolicy;

/// Minimum heat loss of a crucible crossing the city, per run-length policy.
#[derive(Debug, Parser)]
#[command(name = "crucible", version)]
pub struct Cli {
    /// Grid file: one row of cost digits per line
    #[arg(env = "CRUCIBLE_INPUT", default_value = "input.txt")]
    pub input: PathBuf,

    /// Run-length policy as MIN,MAX; repeat to solve several
    #[arg(
        short,
        long = "policy",
        value_name = "MIN,MAX",
        default_values = ["1,3", "4,10"]
    )]
    pub policies: Vec<RunPolicy>,

    /// Log search statistics
    #[arg(short, long)]
    pub verbose: bool,
}

/// Everything a run needs, resolved from [`Cli`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub policies: Vec<RunPolicy>,
    pub verbose: bool,
}

impl Config {
    /// Default `EnvFilter` directive when `RUST_LOG` is unset.
    pub fn log_directive(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("input.txt"),
            policies: vec![RunPolicy::CRUCIBLE, RunPolicy::ULTRA_CRUCIBLE],
            verbose: false,
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            input: cli.input,
            policies: cli.policies,
            verbose: cli.verbose,
        }
    }
}
