/*
grid.rs

Copyright 2026 Hervé Quatremain

This file is part of Zipgrid.

Zipgrid is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Zipgrid is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Zipgrid. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Coordinates on the square game grid.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a cell on the grid.
///
/// A point carries no grid size; bounds are relative to the
/// [`crate::level::LevelDefinition`] the point is used with.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridPoint {
    /// Row, starting at 0 from the top of the grid.
    pub row: usize,

    /// Column, starting at 0 from the left of the grid.
    pub col: usize,
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

impl GridPoint {
    /// Create a [`GridPoint`] object.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether the two points are orthogonal neighbors.
    ///
    /// Two points are adjacent when their Manhattan distance is exactly one.
    /// Diagonal cells are not adjacent, and a point is never adjacent to
    /// itself.
    pub fn is_adjacent(&self, other: GridPoint) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }

    /// Return the in-bounds orthogonal neighbors of the point on a
    /// `size`×`size` grid.
    pub fn neighbors(&self, size: usize) -> Vec<GridPoint> {
        let mut neighbors: Vec<GridPoint> = Vec::with_capacity(4);

        if self.row > 0 {
            neighbors.push(GridPoint::new(self.row - 1, self.col));
        }
        if self.row + 1 < size {
            neighbors.push(GridPoint::new(self.row + 1, self.col));
        }
        if self.col > 0 {
            neighbors.push(GridPoint::new(self.row, self.col - 1));
        }
        if self.col + 1 < size {
            neighbors.push(GridPoint::new(self.row, self.col + 1));
        }
        neighbors
    }

    /// Return the linear index of the point on a `size`×`size` grid.
    ///
    /// The index is used for flat scratch arrays such as the visited set of
    /// the path search.
    pub fn index(&self, size: usize) -> usize {
        self.row * size + self.col
    }

    /// Whether the point lies on a `size`×`size` grid.
    pub fn in_bounds(&self, size: usize) -> bool {
        self.row < size && self.col < size
    }
}
