/*
level.rs

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

//! Immutable description of a puzzle level.
//!
//! A level is the grid size, the numbered waypoint cells that the drawn path
//! must visit in ascending order, and, for generated levels, the reference
//! solution path that covers the grid. Levels are built once, by
//! [`crate::generator`] or from the built-in catalog in
//! [`crate::generator::puzzles`], and are then shared read-only by any number
//! of [`crate::game::Game`] sessions.

use serde::{Deserialize, Serialize};

use crate::grid::GridPoint;

/// Immutable puzzle description.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LevelDefinition {
    /// The grid is `size`×`size` cells.
    size: usize,

    /// Waypoint cells, indexed by waypoint number minus one.
    ///
    /// Waypoint numbers are always the dense range `1..=max_number`, so a
    /// vector indexed by `number - 1` replaces a map keyed by the number.
    /// The vector must not be empty: waypoint 1 is the starting cell of
    /// every path.
    waypoints: Vec<GridPoint>,

    /// Solution path covering every grid cell exactly once.
    ///
    /// Present for generated levels, where it backs hints and verification.
    /// Hand-authored levels from the catalog do not carry one.
    solution_path: Option<Vec<GridPoint>>,
}

impl LevelDefinition {
    /// Create a [`LevelDefinition`] object.
    ///
    /// `waypoints[0]` is waypoint number 1 and must be the cell every drawn
    /// path starts from. When `solution_path` is provided, the waypoint
    /// coordinates must occur in it in strictly increasing index order.
    pub fn new(
        size: usize,
        waypoints: Vec<GridPoint>,
        solution_path: Option<Vec<GridPoint>>,
    ) -> Self {
        Self {
            size,
            waypoints,
            solution_path,
        }
    }

    /// Return the grid size. The grid is `size`×`size` cells.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Return the total number of cells in the grid.
    pub fn total_cells(&self) -> usize {
        self.size * self.size
    }

    /// Return the number of waypoints.
    pub fn max_number(&self) -> usize {
        self.waypoints.len()
    }

    /// Return the cell of the given waypoint number, or None if the number
    /// is out of the `1..=max_number` range.
    pub fn waypoint(&self, number: usize) -> Option<GridPoint> {
        if number == 0 {
            None
        } else {
            self.waypoints.get(number - 1).copied()
        }
    }

    /// Return the cell of waypoint 1, which is where every path starts.
    pub fn start_position(&self) -> GridPoint {
        self.waypoints[0]
    }

    /// Return the waypoint number at the given cell, or None for an
    /// unnumbered cell.
    pub fn number_at(&self, point: GridPoint) -> Option<usize> {
        self.waypoints
            .iter()
            .position(|w| *w == point)
            .map(|i| i + 1)
    }

    /// Whether the given cell is a numbered waypoint.
    pub fn is_waypoint(&self, point: GridPoint) -> bool {
        self.number_at(point).is_some()
    }

    /// Return the reference solution path, or None for hand-authored levels.
    pub fn solution_path(&self) -> Option<&[GridPoint]> {
        self.solution_path.as_deref()
    }
}
