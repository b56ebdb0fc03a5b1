//! Loading the grid and solving each configured policy.

use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::Context;
use rayon::prelude::*;
use runpath_core::CostGrid;
use runpath_paths::{RunPolicy, min_run_cost};

use crate::config::Config;

/// Result of one policy: the minimum cost, or `None` if the far corner
/// cannot be reached under that policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub policy: RunPolicy,
    pub cost: Option<u32>,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cost {
            Some(cost) => write!(f, "result {}: {cost}", self.policy),
            None => write!(f, "result {}: unreachable", self.policy),
        }
    }
}

/// Read and parse a grid file.
pub fn load_grid(path: &Path) -> anyhow::Result<CostGrid> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("couldn't open input file '{}'", path.display()))?;
    let grid = CostGrid::parse(&text)
        .with_context(|| format!("malformed grid in '{}'", path.display()))?;
    tracing::info!(
        width = grid.width(),
        height = grid.height(),
        "loaded {}",
        path.display()
    );
    Ok(grid)
}

/// Solve every policy over the shared grid, in parallel.
///
/// Outcomes come back in the order of `policies`.
pub fn solve(grid: &CostGrid, policies: &[RunPolicy]) -> Vec<Outcome> {
    policies
        .par_iter()
        .map(|&policy| {
            let _span = tracing::info_span!("solve", %policy).entered();
            let cost = min_run_cost(grid, policy);
            tracing::info!(?cost, "done");
            Outcome { policy, cost }
        })
        .collect()
}

/// Load the configured grid and solve all configured policies.
pub fn run(config: &Config) -> anyhow::Result<Vec<Outcome>> {
    let grid = load_grid(&config.input)?;
    Ok(solve(&grid, &config.policies))
}
