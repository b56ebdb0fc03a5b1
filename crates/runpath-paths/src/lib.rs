//! Least-cost search on cost grids under run-length movement rules.
//!
//! Movement happens in *runs*: straight lines of between `min_move` and
//! `max_move` cells, each followed by a 90° turn. Reversing is never allowed.
//! Searching therefore works on an expanded state space where a node is a
//! cell paired with the direction of the run that arrived there.
//!
//! - **Run-constrained search** ([`shortest_cost`], [`min_run_cost`])
//! - **Generic least-cost engine** ([`Search`]) driven by any [`Expander`]
//! - **Dijkstra** multi-source distance maps over single steps ([`DijkstraMap`])
//!
//! [`Search`] and [`DijkstraMap`] own their open lists and visited sets and
//! reuse them, so repeated queries do not reallocate after warm-up.

mod dijkstra;
mod expand;
mod policy;
mod search;
mod traits;

pub use dijkstra::{DijkstraMap, PathNode, UNREACHABLE};
pub use expand::{RunExpander, SearchState, StepExpander};
pub use policy::{PolicyError, RunPolicy};
pub use search::{Search, SearchStats, min_run_cost, shortest_cost};
pub use traits::Expander;
