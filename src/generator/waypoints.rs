/*
waypoints.rs

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

//! Place the numbered waypoints along a generated path.
//!
//! Waypoints are the cells the player must reach in ascending numeric
//! order. Waypoint 1 sits on the first cell of the solution path and the
//! last waypoint on its final cell, so that a complete drawing always
//! starts and ends on a number. The interior waypoints split the rest of
//! the path into even stretches.

use log::debug;

use crate::grid::GridPoint;

/// Place `number_of_nodes` waypoints along the given solution path and
/// return their cells, indexed by waypoint number minus one.
///
/// The interior waypoints are spread with a real-valued spacing of
/// `(path.len() - 2) / (number_of_nodes - 1)` cells: waypoint `i + 1` lands
/// on `path[round(i * spacing)]`. The placement involves no randomness, so
/// identical paths and counts always produce identical waypoints.
///
/// The caller validates the parameters: `number_of_nodes` must be at least
/// 2 and at most `path.len() - 1`, which keeps the spacing at one cell or
/// more and the placement indices strictly increasing.
pub fn place_waypoints(path: &[GridPoint], number_of_nodes: usize) -> Vec<GridPoint> {
    let last: usize = path.len() - 1;
    let mut waypoints: Vec<GridPoint> = Vec::with_capacity(number_of_nodes);

    // Waypoint 1 at the start of the path
    waypoints.push(path[0]);

    // Distribute the remaining waypoints evenly along the path interior
    if number_of_nodes > 2 {
        let remaining: usize = number_of_nodes - 2;
        let spacing: f64 = (path.len() - 2) as f64 / (remaining + 1) as f64;

        for i in 1..=remaining {
            let index: usize = (i as f64 * spacing).round() as usize;
            debug!("Waypoint {} at path index {index}", i + 1);
            waypoints.push(path[index]);
        }
    }

    // Last waypoint at the end of the path
    waypoints.push(path[last]);
    waypoints
}
