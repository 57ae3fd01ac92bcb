/*
generator.rs

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

//! Generate random but always solvable puzzle levels.
//!
//! A level is built in two stages:
//!
//! * A random Hamiltonian path over the grid, represented as a vector of
//!   [`GridPoint`] cells. You create this path with a
//!   [`hamiltonian::HamiltonianPath`] object and its
//!   [`hamiltonian::HamiltonianPath::generate`] method. The search
//!   backtracks out of dead ends and reports [`GeneratorError::NoPath`]
//!   when no path exists.
//!
//! * The numbered waypoints placed along that path by
//!   [`waypoints::place_waypoints`]. Waypoint 1 is the first cell of the
//!   path and the last waypoint is its final cell; the remaining waypoints
//!   are spread evenly over the interior. This stage is deterministic:
//!   identical paths and waypoint counts always produce identical
//!   placements.
//!
//! [`generate_level`] chains the two stages and is the usual entry point.
//! [`generate_level_with_rng`] is the same operation driven by a caller
//! supplied random source, which the daily challenge in [`crate::daily`]
//! uses to make generation reproducible. The [`puzzles`] module provides
//! the difficulty tiers and the catalog of hand-authored levels.

pub mod hamiltonian;
pub mod puzzles;
pub mod waypoints;

use log::debug;
use rand::Rng;
use std::error::Error;
use std::fmt;

use crate::grid::GridPoint;
use crate::level::LevelDefinition;

/// Type of level generation errors.
#[derive(Debug, PartialEq, Eq)]
pub enum GeneratorError {
    /// The grid must be at least 2×2 cells.
    InvalidSize(usize),

    /// A level needs at least the start and end waypoints.
    NotEnoughNodes(usize),

    /// More waypoints than the path can space out without collisions.
    TooManyNodes {
        /// Requested waypoint count.
        nodes: usize,
        /// Largest valid count for the grid size, `size * size - 1`.
        max: usize,
    },

    /// The search exhausted every candidate without completing a path.
    NoPath,
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GeneratorError::InvalidSize(size) => {
                write!(f, "grid size {size} is too small (minimum 2)")
            }
            GeneratorError::NotEnoughNodes(nodes) => {
                write!(f, "waypoint count {nodes} is too small (minimum 2)")
            }
            GeneratorError::TooManyNodes { nodes, max } => {
                write!(
                    f,
                    "waypoint count {nodes} exceeds the maximum of {max} for the grid"
                )
            }
            GeneratorError::NoPath => write!(f, "no path covers the grid"),
        }
    }
}

impl Error for GeneratorError {}

/// Validate the generation parameters before any search work begins.
///
/// The upper waypoint bound keeps the placement spacing at one cell or
/// more, which rules out two waypoints landing on the same path index.
fn check_parameters(size: usize, number_of_nodes: usize) -> Result<(), GeneratorError> {
    if size < 2 {
        return Err(GeneratorError::InvalidSize(size));
    }
    if number_of_nodes < 2 {
        return Err(GeneratorError::NotEnoughNodes(number_of_nodes));
    }
    let max: usize = size * size - 1;
    if number_of_nodes > max {
        return Err(GeneratorError::TooManyNodes {
            nodes: number_of_nodes,
            max,
        });
    }
    Ok(())
}

/// Generate a level with the given grid size and waypoint count, using the
/// provided random source for every random choice of the search.
///
/// # Errors
///
/// The function rejects invalid parameters before any search begins, and
/// returns [`GeneratorError::NoPath`] if the search exhausts every
/// candidate (which does not happen for a square grid, where a Hamiltonian
/// path from the corner always exists).
pub fn generate_level_with_rng<R: Rng + ?Sized>(
    size: usize,
    number_of_nodes: usize,
    rng: &mut R,
) -> Result<LevelDefinition, GeneratorError> {
    check_parameters(size, number_of_nodes)?;

    let mut search: hamiltonian::HamiltonianPath = hamiltonian::HamiltonianPath::new(size);
    let path: Vec<GridPoint> = search.generate(rng)?;
    debug!(
        "Path found for size {size}: iterations = {}  duration = {}",
        search.iteration, search.duration
    );

    let waypoints: Vec<GridPoint> = waypoints::place_waypoints(&path, number_of_nodes);
    Ok(LevelDefinition::new(size, waypoints, Some(path)))
}

/// Generate a level with the given grid size and waypoint count.
///
/// # Errors
///
/// See [`generate_level_with_rng`].
pub fn generate_level(
    size: usize,
    number_of_nodes: usize,
) -> Result<LevelDefinition, GeneratorError> {
    generate_level_with_rng(size, number_of_nodes, &mut rand::rng())
}

/// Generate a level for the given difficulty tier.
///
/// The tier and the grid size select the waypoint count; see
/// [`puzzles::Difficulty::node_count`].
///
/// # Errors
///
/// See [`generate_level_with_rng`].
pub fn generate_level_for_difficulty(
    difficulty: puzzles::Difficulty,
    size: usize,
) -> Result<LevelDefinition, GeneratorError> {
    generate_level(size, difficulty.node_count(size))
}
