//! Least-cost-first search over an [`Expander`]'s state graph.

use std::collections::{BinaryHeap, HashSet};

use runpath_core::{CostGrid, Point};

use crate::expand::{RunExpander, SearchState};
use crate::policy::RunPolicy;
use crate::traits::Expander;

/// Frontier entry, ordered by accumulated cost for use in `BinaryHeap`.
#[derive(Clone, Copy)]
struct Entry<S> {
    state: S,
    cost: u32,
}

impl<S> PartialEq for Entry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
    }
}

impl<S> Eq for Entry<S> {}

impl<S> Ord for Entry<S> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest cost first.
        other.cost.cmp(&self.cost)
    }
}

impl<S> PartialOrd for Entry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Counters for the most recent [`Search::least_cost`] query.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Entries pushed onto the frontier, seeds included.
    pub pushed: usize,
    /// Entries popped, stale ones included.
    pub popped: usize,
    /// Distinct states expanded.
    pub finalized: usize,
}

/// Dijkstra-style search engine driven by an [`Expander`].
///
/// `Search` owns the frontier, the visited set and the successor scratch
/// buffer, so repeated queries incur no allocations after warm-up.
pub struct Search<E: Expander> {
    expander: E,
    open: BinaryHeap<Entry<E::State>>,
    visited: HashSet<E::State>,
    succ: Vec<(E::State, u32)>,
    stats: SearchStats,
}

impl<E: Expander> Search<E> {
    pub fn new(expander: E) -> Self {
        Self {
            expander,
            open: BinaryHeap::new(),
            visited: HashSet::new(),
            succ: Vec::with_capacity(8),
            stats: SearchStats::default(),
        }
    }

    /// The expander driving this search.
    #[inline]
    pub fn expander(&self) -> &E {
        &self.expander
    }

    /// Counters from the last query.
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Cost of the cheapest path from any of `seeds` to a state satisfying
    /// `is_goal`, or `None` if the frontier runs dry first.
    ///
    /// Seeds start at cost 0. A state is finalized the first time it is
    /// popped; later, costlier entries for it are skipped rather than
    /// decreased in place. The goal is tested on pop, so the returned cost
    /// is minimal.
    pub fn least_cost(
        &mut self,
        seeds: impl IntoIterator<Item = E::State>,
        is_goal: impl Fn(&E::State) -> bool,
    ) -> Option<u32> {
        self.open.clear();
        self.visited.clear();
        self.stats = SearchStats::default();

        for state in seeds {
            self.open.push(Entry { state, cost: 0 });
            self.stats.pushed += 1;
        }

        let mut succ = std::mem::take(&mut self.succ);

        let found = loop {
            let Some(Entry { state, cost }) = self.open.pop() else {
                break None;
            };
            self.stats.popped += 1;

            if is_goal(&state) {
                break Some(cost);
            }
            // Skip stale entries.
            if !self.visited.insert(state) {
                continue;
            }

            succ.clear();
            self.expander.expand(&state, &mut succ);

            for &(next, step) in succ.iter() {
                if self.visited.contains(&next) {
                    continue;
                }
                self.open.push(Entry {
                    state: next,
                    cost: cost + step,
                });
                self.stats.pushed += 1;
            }
        };

        self.succ = succ;
        self.stats.finalized = self.visited.len();
        log::debug!(
            "search {}: pushed {}, popped {}, finalized {}",
            match found {
                Some(c) => format!("reached goal at cost {c}"),
                None => "exhausted frontier".to_string(),
            },
            self.stats.pushed,
            self.stats.popped,
            self.stats.finalized,
        );
        found
    }
}

/// Minimum cost of moving from `start` to any cell satisfying `is_goal`,
/// with movement restricted to runs allowed by `policy`.
///
/// The goal is accepted whatever direction the final run arrives from.
/// Returns `None` when no legal sequence of runs reaches the goal, or when
/// `start` lies outside the grid.
pub fn shortest_cost(
    grid: &CostGrid,
    start: Point,
    is_goal: impl Fn(Point) -> bool,
    policy: RunPolicy,
) -> Option<u32> {
    if !grid.contains(start) {
        return None;
    }
    let mut search = Search::new(RunExpander::new(grid, policy));
    search.least_cost(RunExpander::seeds(start), |s: &SearchState| is_goal(s.pos))
}

/// [`shortest_cost`] from the grid's top-left cell to its bottom-right cell.
pub fn min_run_cost(grid: &CostGrid, policy: RunPolicy) -> Option<u32> {
    let end = grid.end();
    shortest_cost(grid, grid.start(), |p| p == end, policy)
}
