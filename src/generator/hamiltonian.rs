/*
hamiltonian.rs

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

//! Generate a random path that covers the grid.

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;
use std::time::Instant;

use super::GeneratorError;
use crate::grid::GridPoint;

/// [`HamiltonianPath`] object.
///
/// The search is a depth-first backtracking walk over the grid graph with
/// 4-neighbor adjacency: at each cell, the unvisited neighbors are tried in
/// a random order, and the walk retreats one cell when none of them leads to
/// a complete path. The recursion is bounded by the number of grid cells,
/// which stays in the hundreds for any playable grid size.
pub struct HamiltonianPath {
    /// Grid size. The search covers `size * size` cells.
    pub size: usize,

    /// Number of iterations it took to generate the last path.
    pub iteration: usize,

    /// Duration in seconds it took to generate the last path.
    pub duration: f32,

    /// Time when the path generation started. Used to compute the
    /// [`HamiltonianPath::duration`].
    start: Instant,
}

impl HamiltonianPath {
    /// Create the object.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            iteration: 0,
            duration: 0.0,
            start: Instant::now(),
        }
    }

    /// Generate and return a random path that visits every cell of the grid
    /// exactly once.
    ///
    /// The path always starts at the top-left corner, cell (0,0). Every
    /// random choice is drawn from the provided source, so a seeded source
    /// reproduces the same path.
    ///
    /// # Errors
    ///
    /// The method returns [`GeneratorError::NoPath`] when the search
    /// exhausts every candidate order without assembling a complete path. A
    /// square grid always admits a path from its corner, so this is not
    /// reachable from the public generation entry points.
    pub fn generate<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<Vec<GridPoint>, GeneratorError> {
        let total_cells: usize = self.size * self.size;
        let start_point: GridPoint = GridPoint::new(0, 0);

        self.iteration = 0;
        self.duration = 0.0;
        self.start = Instant::now();

        debug!(
            "Starting cell = {start_point}  Number of cells = {total_cells}"
        );

        let mut path: Vec<GridPoint> = Vec::with_capacity(total_cells);
        let mut visited: Vec<bool> = vec![false; total_cells];

        let found: bool = self.find_path(start_point, &mut path, &mut visited, rng);
        self.duration = self.start.elapsed().as_secs_f32();
        debug!(
            "Iterations = {}  Duration = {}",
            self.iteration, self.duration
        );
        if found { Ok(path) } else { Err(GeneratorError::NoPath) }
    }

    /// Recursively find a path.
    ///
    /// The current cell is appended to the path, and removed again before
    /// returning `false` so that the caller can try its next candidate.
    fn find_path<R: Rng + ?Sized>(
        &mut self,
        current: GridPoint,
        path: &mut Vec<GridPoint>,
        visited: &mut [bool],
        rng: &mut R,
    ) -> bool {
        debug!("== Going to cell {current} (iteration {})", self.iteration);
        path.push(current);
        visited[current.index(self.size)] = true;

        if path.len() == visited.len() {
            return true;
        }

        self.iteration += 1;

        // Randomize the order in which to test the unvisited neighbors
        let mut neighbors: Vec<GridPoint> = current
            .neighbors(self.size)
            .into_iter()
            .filter(|n| !visited[n.index(self.size)])
            .collect();
        neighbors.shuffle(rng);

        for next in neighbors {
            debug!("    Selecting cell {next}");
            if self.find_path(next, path, visited, rng) {
                return true;
            }
        }

        debug!("    Back: no eligible neighbor from {current}");
        let popped: Option<GridPoint> = path.pop();
        if let Some(p) = popped {
            visited[p.index(self.size)] = false;
        }
        false
    }
}
