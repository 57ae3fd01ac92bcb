/*
puzzles.rs

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

//! Difficulty tiers and the built-in puzzle catalog.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::grid::GridPoint;
use crate::level::LevelDefinition;

/// Puzzle difficulty level.
///
/// Easier tiers place more waypoints on the grid, which guides the player
/// along the solution; harder tiers leave longer unnumbered stretches.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, PartialOrd, PartialEq, Eq, Hash, ValueEnum, Default,
)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

impl Difficulty {
    /// Return the waypoint count for the tier on a `size`×`size` grid.
    ///
    /// Counts grow with the grid area and never drop below 2, the minimum
    /// the generator accepts. On the canonical 6×6 grid the tiers yield 12,
    /// 8, and 5 waypoints.
    pub fn node_count(&self, size: usize) -> usize {
        let area: usize = size * size;
        let count: usize = match self {
            Difficulty::Easy => area / 3,
            Difficulty::Medium => area * 2 / 9,
            Difficulty::Hard => area / 7,
        };
        count.max(2)
    }
}

/// Return the catalog of hand-authored levels, ordered by difficulty.
///
/// The catalog levels are 6×6 grids whose waypoints follow a known
/// Hamiltonian drawing (snakes, spirals, and a double-back pattern). They
/// carry no reference solution path, so hints are not available for them.
pub fn builtin_levels() -> Vec<LevelDefinition> {
    vec![
        // Horizontal snake: each row drawn in alternating directions
        LevelDefinition::new(
            6,
            vec![
                GridPoint::new(0, 0),
                GridPoint::new(0, 4),
                GridPoint::new(1, 3),
                GridPoint::new(2, 1),
                GridPoint::new(3, 4),
                GridPoint::new(4, 2),
                GridPoint::new(5, 4),
                GridPoint::new(5, 0),
            ],
            None,
        ),
        // Clockwise spiral: outer edge first, then inward
        LevelDefinition::new(
            6,
            vec![
                GridPoint::new(0, 0),
                GridPoint::new(0, 3),
                GridPoint::new(1, 5),
                GridPoint::new(4, 5),
                GridPoint::new(5, 4),
                GridPoint::new(5, 0),
                GridPoint::new(2, 1),
                GridPoint::new(2, 3),
                GridPoint::new(4, 3),
                GridPoint::new(3, 2),
            ],
            None,
        ),
        // Vertical snake: each column drawn in alternating directions
        LevelDefinition::new(
            6,
            vec![
                GridPoint::new(0, 0),
                GridPoint::new(3, 0),
                GridPoint::new(2, 1),
                GridPoint::new(5, 2),
                GridPoint::new(2, 3),
                GridPoint::new(0, 4),
                GridPoint::new(5, 5),
                GridPoint::new(0, 5),
            ],
            None,
        ),
        // Double-back pattern: three-column sections with turns
        LevelDefinition::new(
            6,
            vec![
                GridPoint::new(0, 0),
                GridPoint::new(0, 2),
                GridPoint::new(1, 0),
                GridPoint::new(2, 3),
                GridPoint::new(0, 4),
                GridPoint::new(2, 5),
                GridPoint::new(3, 3),
                GridPoint::new(3, 0),
                GridPoint::new(4, 4),
                GridPoint::new(5, 0),
            ],
            None,
        ),
        // Counter-clockwise spiral: down the left edge first, then inward
        LevelDefinition::new(
            6,
            vec![
                GridPoint::new(0, 0),
                GridPoint::new(2, 0),
                GridPoint::new(5, 0),
                GridPoint::new(5, 3),
                GridPoint::new(4, 5),
                GridPoint::new(1, 5),
                GridPoint::new(0, 2),
                GridPoint::new(3, 1),
                GridPoint::new(4, 3),
                GridPoint::new(2, 4),
                GridPoint::new(1, 2),
                GridPoint::new(2, 3),
            ],
            None,
        ),
    ]
}
