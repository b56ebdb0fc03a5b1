//! Crucible — minimum heat loss through a city grid for a set of run-length
//! policies, built on runpath-core and runpath-paths.

pub mod config;
pub mod run;

pub use config::{Cli, Config};
pub use run::{Outcome, load_grid, run, solve};
