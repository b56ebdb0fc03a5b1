//! Expanders over a [`CostGrid`].

use runpath_core::{CostGrid, Direction, Point};

use crate::policy::RunPolicy;
use crate::traits::Expander;

/// A cell paired with the direction of the run that ended there.
///
/// The same cell reached along different axes has different legal
/// continuations, so both fields take part in identity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchState {
    pub pos: Point,
    pub dir: Direction,
}

impl SearchState {
    #[inline]
    pub const fn new(pos: Point, dir: Direction) -> Self {
        Self { pos, dir }
    }
}

/// Expands states by whole runs under a [`RunPolicy`].
///
/// From a state that arrived heading `dir`, the next run heads along one of
/// the two directions perpendicular to `dir`, for `min_move..=max_move`
/// cells. Going straight on or reversing is never offered. The cost of a run
/// is the sum of the costs of the cells it enters, the departure cell
/// excluded.
#[derive(Copy, Clone, Debug)]
pub struct RunExpander<'g> {
    grid: &'g CostGrid,
    policy: RunPolicy,
}

impl<'g> RunExpander<'g> {
    pub fn new(grid: &'g CostGrid, policy: RunPolicy) -> Self {
        Self { grid, policy }
    }

    /// Initial states at `start`.
    ///
    /// There is no previous run at the start, so it is seeded once per axis:
    /// arriving east offers north/south runs, arriving south offers
    /// east/west runs.
    pub fn seeds(start: Point) -> [SearchState; 2] {
        [
            SearchState::new(start, Direction::East),
            SearchState::new(start, Direction::South),
        ]
    }

    pub fn grid(&self) -> &'g CostGrid {
        self.grid
    }

    pub fn policy(&self) -> RunPolicy {
        self.policy
    }
}

impl Expander for RunExpander<'_> {
    type State = SearchState;

    fn expand(&self, state: &SearchState, buf: &mut Vec<(SearchState, u32)>) {
        for dir in state.dir.perpendicular() {
            let mut pos = state.pos;
            let mut cost = 0;
            for k in 1..=self.policy.max_move() {
                pos = pos + dir.offset();
                // Every longer run in this direction leaves the grid too.
                let Some(c) = self.grid.cell_cost(pos) else {
                    break;
                };
                cost += c;
                if k >= self.policy.min_move() {
                    buf.push((SearchState::new(pos, dir), cost));
                }
            }
        }
    }
}

/// Expands single cardinal steps with no run constraint.
///
/// States are plain cells; entering a cell costs its grid value.
#[derive(Copy, Clone, Debug)]
pub struct StepExpander<'g> {
    grid: &'g CostGrid,
}

impl<'g> StepExpander<'g> {
    pub fn new(grid: &'g CostGrid) -> Self {
        Self { grid }
    }
}

impl Expander for StepExpander<'_> {
    type State = Point;

    fn expand(&self, p: &Point, buf: &mut Vec<(Point, u32)>) {
        for n in p.neighbors_4() {
            if let Some(c) = self.grid.cell_cost(n) {
                buf.push((n, c));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn successors<E: Expander>(e: &E, s: E::State) -> Vec<(E::State, u32)> {
        let mut buf = Vec::new();
        e.expand(&s, &mut buf);
        buf
    }

    #[test]
    fn runs_turn_and_accumulate_cost() {
        let grid = CostGrid::parse("12345\n67890\n13579\n24680").unwrap();
        let e = RunExpander::new(&grid, RunPolicy::CRUCIBLE);
        let from = SearchState::new(Point::new(0, 0), Direction::South);
        // Arrived heading south: only east/west runs; west leaves the grid.
        let succ = successors(&e, from);
        assert_eq!(
            succ,
            vec![
                (SearchState::new(Point::new(1, 0), Direction::East), 2),
                (SearchState::new(Point::new(2, 0), Direction::East), 5),
                (SearchState::new(Point::new(3, 0), Direction::East), 9),
            ]
        );
    }

    #[test]
    fn min_move_skips_short_runs() {
        let grid = CostGrid::parse("11111\n11111").unwrap();
        let e = RunExpander::new(&grid, RunPolicy::new(2, 3).unwrap());
        let from = SearchState::new(Point::new(0, 0), Direction::South);
        let dests: Vec<_> = successors(&e, from).into_iter().map(|(s, _)| s.pos).collect();
        assert_eq!(dests, vec![Point::new(2, 0), Point::new(3, 0)]);
    }

    #[test]
    fn run_stops_at_grid_edge() {
        let grid = CostGrid::parse("111\n111\n111").unwrap();
        let e = RunExpander::new(&grid, RunPolicy::ULTRA_CRUCIBLE);
        let from = SearchState::new(Point::new(1, 1), Direction::East);
        // Every candidate run of 4+ cells leaves a 3x3 grid.
        assert!(successors(&e, from).is_empty());
    }

    #[test]
    fn never_straight_or_reverse() {
        let grid = CostGrid::parse(&"5555555\n".repeat(7)).unwrap();
        let e = RunExpander::new(&grid, RunPolicy::CRUCIBLE);
        for dir in Direction::ALL {
            let from = SearchState::new(Point::new(3, 3), dir);
            let succ = successors(&e, from);
            assert_eq!(succ.len(), 6);
            for (s, cost) in succ {
                assert_ne!(s.dir, dir);
                assert_ne!(s.dir, dir.opposite());
                let d = s.pos - from.pos;
                let k = d.x.abs() + d.y.abs();
                assert_eq!(cost, 5 * k as u32);
            }
        }
    }

    #[test]
    fn seeds_cover_both_axes() {
        let grid = CostGrid::parse("19\n91").unwrap();
        let e = RunExpander::new(&grid, RunPolicy::new(1, 1).unwrap());
        let mut dests: Vec<_> = RunExpander::seeds(Point::ZERO)
            .into_iter()
            .flat_map(|s| successors(&e, s))
            .collect();
        dests.sort_by_key(|(s, _)| s.pos);
        assert_eq!(
            dests,
            vec![
                (SearchState::new(Point::new(1, 0), Direction::East), 9),
                (SearchState::new(Point::new(0, 1), Direction::South), 9),
            ]
        );
    }

    #[test]
    fn step_expander_four_way() {
        let grid = CostGrid::parse("123\n456\n789").unwrap();
        let e = StepExpander::new(&grid);
        let mut succ = successors(&e, Point::new(1, 1));
        succ.sort();
        assert_eq!(
            succ,
            vec![
                (Point::new(1, 0), 2),
                (Point::new(0, 1), 4),
                (Point::new(2, 1), 6),
                (Point::new(1, 2), 8),
            ]
        );
        assert_eq!(successors(&e, Point::new(0, 0)).len(), 2);
    }
}
