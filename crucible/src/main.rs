//! Crucible — command-line runner.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crucible_lib::{Cli, Config};

fn main() -> anyhow::Result<()> {
    let config = Config::from(Cli::parse());

    // RUST_LOG wins over --verbose when set.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_directive())),
        )
        .with_writer(std::io::stderr)
        .init();

    for outcome in crucible_lib::run(&config)? {
        println!("{outcome}");
    }
    Ok(())
}
