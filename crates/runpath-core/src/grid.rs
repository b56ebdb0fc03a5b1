//! The [`CostGrid`] type: an immutable 2D grid of cell entry costs.
//!
//! Unlike a drawable grid, a `CostGrid` owns its storage outright and has no
//! mutators, so it is `Send + Sync` and can be shared by reference between
//! concurrent searches.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::geom::{Point, Range};

/// Largest cost a single cell may carry.
pub const MAX_CELL_COST: u8 = 9;

/// Errors raised while building a [`CostGrid`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseGridError {
    /// The input has no rows.
    #[error("grid: input is empty")]
    Empty,
    /// A character other than `'0'..='9'` was found.
    #[error("grid: invalid cost character {ch:?} at {pos}")]
    InvalidDigit { ch: char, pos: Point },
    /// A row's width differs from the first row's.
    #[error("grid: row {row} has width {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A programmatic cost above [`MAX_CELL_COST`].
    #[error("grid: cost {cost} at {pos} is above 9")]
    InvalidCost { cost: u8, pos: Point },
    /// The number of costs does not match `width * height`.
    #[error("grid: expected {expected} costs, got {found}")]
    SizeMismatch { expected: usize, found: usize },
}

/// An immutable grid of per-cell entry costs.
///
/// The start is always the top-left cell and the end is the
/// maximum-coordinate (bottom-right) cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostGrid {
    costs: Vec<u8>,
    bounds: Range,
}

impl CostGrid {
    /// Build a grid from row-major costs.
    pub fn from_costs(width: i32, height: i32, costs: Vec<u8>) -> Result<Self, ParseGridError> {
        if width <= 0 || height <= 0 {
            return Err(ParseGridError::Empty);
        }
        let expected = (width as usize) * (height as usize);
        if costs.len() != expected {
            return Err(ParseGridError::SizeMismatch {
                expected,
                found: costs.len(),
            });
        }
        if let Some(i) = costs.iter().position(|&c| c > MAX_CELL_COST) {
            let w = width as usize;
            return Err(ParseGridError::InvalidCost {
                cost: costs[i],
                pos: Point::new((i % w) as i32, (i / w) as i32),
            });
        }
        Ok(Self {
            costs,
            bounds: Range::new(0, 0, width, height),
        })
    }

    /// Parse a grid from text: one row per line, one ASCII digit per cell.
    ///
    /// Carriage returns before a newline and trailing blank lines are
    /// ignored. Every other line must have the width of the first.
    pub fn parse(s: &str) -> Result<Self, ParseGridError> {
        let mut lines: Vec<&str> = s
            .split('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .collect();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        let Some(first) = lines.first() else {
            return Err(ParseGridError::Empty);
        };

        let width = first.chars().count();
        let mut costs = Vec::with_capacity(width * lines.len());
        for (y, line) in lines.iter().enumerate() {
            let mut found = 0;
            for (x, ch) in line.chars().enumerate() {
                let Some(d) = ch.to_digit(10) else {
                    return Err(ParseGridError::InvalidDigit {
                        ch,
                        pos: Point::new(x as i32, y as i32),
                    });
                };
                costs.push(d as u8);
                found += 1;
            }
            if found != width {
                return Err(ParseGridError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }
        }

        log::trace!("parsed {}x{} cost grid", width, lines.len());
        Self::from_costs(width as i32, lines.len() as i32, costs)
    }

    /// The bounding range `[(0, 0), (width, height))`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Size of the grid as a `Point`.
    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    /// Width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// The top-left cell.
    #[inline]
    pub fn start(&self) -> Point {
        self.bounds.min
    }

    /// The maximum-coordinate (bottom-right) cell.
    #[inline]
    pub fn end(&self) -> Point {
        self.bounds.max.shift(-1, -1)
    }

    /// Cost of entering the cell at `p`, or `None` if `p` is outside.
    #[inline]
    pub fn cell_cost(&self, p: Point) -> Option<u32> {
        self.index(p).map(|i| u32::from(self.costs[i]))
    }

    /// Row-major iterator over `(Point, cost)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, u32)> + '_ {
        self.bounds
            .iter()
            .zip(self.costs.iter())
            .map(|(p, &c)| (p, u32::from(c)))
    }

    /// Flat row-major index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some((p.y as usize) * (self.width() as usize) + (p.x as usize))
    }
}

impl FromStr for CostGrid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for CostGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.costs.chunks(self.width() as usize) {
            for &c in row {
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_size() {
        let g = CostGrid::parse("123\n456\n").unwrap();
        assert_eq!(g.size(), Point::new(3, 2));
        assert_eq!(g.start(), Point::new(0, 0));
        assert_eq!(g.end(), Point::new(2, 1));
        assert_eq!(g.cell_cost(Point::new(0, 0)), Some(1));
        assert_eq!(g.cell_cost(Point::new(2, 1)), Some(6));
        assert_eq!(g.cell_cost(Point::new(3, 0)), None);
        assert_eq!(g.cell_cost(Point::new(0, -1)), None);
    }

    #[test]
    fn parse_tolerates_crlf_and_trailing_blank_lines() {
        let g: CostGrid = "01\r\n23\r\n\n\n".parse().unwrap();
        assert_eq!(g.size(), Point::new(2, 2));
        assert_eq!(g.cell_cost(Point::new(1, 1)), Some(3));
    }

    #[test]
    fn parse_rejects_non_digit() {
        let err = CostGrid::parse("123\n4x6").unwrap_err();
        assert_eq!(
            err,
            ParseGridError::InvalidDigit {
                ch: 'x',
                pos: Point::new(1, 1)
            }
        );
    }

    #[test]
    fn parse_rejects_ragged_rows() {
        let err = CostGrid::parse("123\n45\n678").unwrap_err();
        assert_eq!(
            err,
            ParseGridError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            }
        );
        // A blank line in the middle is a row of width zero.
        assert!(matches!(
            CostGrid::parse("12\n\n34"),
            Err(ParseGridError::RaggedRow { row: 1, .. })
        ));
    }

    #[test]
    fn parse_rejects_empty_input() {
        assert_eq!(CostGrid::parse(""), Err(ParseGridError::Empty));
        assert_eq!(CostGrid::parse("\n\n"), Err(ParseGridError::Empty));
    }

    #[test]
    fn from_costs_validates() {
        assert_eq!(
            CostGrid::from_costs(2, 2, vec![1, 2, 3]),
            Err(ParseGridError::SizeMismatch {
                expected: 4,
                found: 3
            })
        );
        assert_eq!(
            CostGrid::from_costs(2, 1, vec![1, 12]),
            Err(ParseGridError::InvalidCost {
                cost: 12,
                pos: Point::new(1, 0)
            })
        );
        assert_eq!(CostGrid::from_costs(0, 3, vec![]), Err(ParseGridError::Empty));
    }

    #[test]
    fn iter_is_row_major() {
        let g = CostGrid::parse("12\n34").unwrap();
        let cells: Vec<_> = g.iter().collect();
        assert_eq!(
            cells,
            vec![
                (Point::new(0, 0), 1),
                (Point::new(1, 0), 2),
                (Point::new(0, 1), 3),
                (Point::new(1, 1), 4),
            ]
        );
    }

    #[test]
    fn display_renders_digits() {
        let text = "2413\n3215\n";
        let g = CostGrid::parse(text).unwrap();
        assert_eq!(g.to_string(), text);
    }

    #[test]
    fn error_messages() {
        let err = CostGrid::parse("1x").unwrap_err();
        assert_eq!(err.to_string(), "grid: invalid cost character 'x' at (1, 0)");
    }

    #[test]
    fn grid_is_shareable_across_threads() {
        fn assert_sync<T: Send + Sync>() {}
        assert_sync::<CostGrid>();
    }
}
