//! **runpath-core** — core types for run-constrained grid search.
//!
//! This crate provides the value types shared by the search crates:
//! geometry primitives ([`Point`], [`Range`], [`Direction`]) and the
//! immutable [`CostGrid`] loaded from digit text.

pub mod geom;
pub mod grid;

pub use geom::{Direction, Point, Range, RangeIter};
pub use grid::{CostGrid, MAX_CELL_COST, ParseGridError};
