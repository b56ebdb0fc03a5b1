use std::collections::BinaryHeap;

use runpath_core::{CostGrid, Point, Range};

/// A position with an associated cost, returned from [`DijkstraMap::compute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Point,
    pub cost: u32,
}

/// Sentinel value meaning "unreachable" in distance maps.
pub const UNREACHABLE: u32 = u32::MAX;

#[derive(Clone, Default)]
struct Node {
    g: u32,
    generation: u32,
    open: bool,
}

/// Reference into the node array, ordered by `g` for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
struct NodeRef {
    idx: usize,
    g: u32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest g first.
        other.g.cmp(&self.g)
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Single-step, four-way Dijkstra distance maps over a [`CostGrid`].
///
/// Moves are unrestricted: any cardinal neighbour can be entered, at the
/// cost of the entered cell. Node caches are kept between calls and only
/// reallocated when a larger grid comes along.
#[derive(Default)]
pub struct DijkstraMap {
    bounds: Range,
    nodes: Vec<Node>,
    generation: u32,
    results: Vec<PathNode>,
    map: Vec<u32>,
}

impl DijkstraMap {
    /// Create a map with caches sized for `bounds`.
    pub fn new(bounds: Range) -> Self {
        let mut dm = Self::default();
        dm.fit(bounds);
        dm
    }

    /// Compute a multi-source distance map over `grid`.
    ///
    /// Every source inside the grid starts at cost 0. Expansion stops when
    /// the cumulative cost exceeds `max_cost`. Returns all reached nodes in
    /// the order they were settled.
    pub fn compute(&mut self, grid: &CostGrid, sources: &[Point], max_cost: u32) -> &[PathNode] {
        self.fit(grid.bounds());
        for v in self.map.iter_mut() {
            *v = UNREACHABLE;
        }
        self.results.clear();

        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();

        for &src in sources {
            if let Some(si) = grid.index(src) {
                let n = &mut self.nodes[si];
                n.g = 0;
                n.generation = cur_gen;
                n.open = true;
                self.map[si] = 0;
                open.push(NodeRef { idx: si, g: 0 });
            }
        }

        while let Some(current) = open.pop() {
            let ci = current.idx;
            let cn = &self.nodes[ci];
            if cn.generation != cur_gen || !cn.open || current.g != cn.g {
                continue;
            }
            let current_g = cn.g;
            self.nodes[ci].open = false;

            let cp = self.point(ci);
            self.results.push(PathNode {
                pos: cp,
                cost: current_g,
            });

            for np in cp.neighbors_4() {
                let (Some(ni), Some(step)) = (grid.index(np), grid.cell_cost(np)) else {
                    continue;
                };
                let tentative = current_g.saturating_add(step);
                if tentative > max_cost {
                    continue;
                }

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    if tentative >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                }

                n.g = tentative;
                n.open = true;
                self.map[ni] = tentative;
                open.push(NodeRef {
                    idx: ni,
                    g: tentative,
                });
            }
        }

        &self.results
    }

    /// Query the cost at a specific point.
    ///
    /// Returns [`UNREACHABLE`] if the point is outside the last computed
    /// grid or was not reached.
    pub fn at(&self, p: Point) -> u32 {
        if !self.bounds.contains(p) {
            return UNREACHABLE;
        }
        let w = self.bounds.width() as usize;
        self.map[(p.y as usize) * w + (p.x as usize)]
    }

    /// The grid rectangle of the last computed map.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Resize caches for `bounds`. Existing capacity is kept when it is
    /// large enough; bumping the generation makes stale nodes ignored.
    fn fit(&mut self, bounds: Range) {
        let len = bounds.len();
        self.bounds = bounds;
        if len <= self.nodes.len() {
            self.generation = self.generation.wrapping_add(1);
            self.map.resize(len, UNREACHABLE);
            return;
        }
        self.nodes.clear();
        self.nodes.resize(len, Node::default());
        self.generation = 0;
        self.map.clear();
        self.map.resize(len, UNREACHABLE);
    }

    #[inline]
    fn point(&self, idx: usize) -> Point {
        let w = self.bounds.width() as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn pathnode_round_trip() {
        let node = PathNode {
            pos: Point::new(3, 7),
            cost: 42,
        };
        let json = serde_json::to_string(&node).unwrap();
        let back: PathNode = serde_json::from_str(&json).unwrap();
        assert_eq!(node, back);
    }
}
