/*
lib.rs

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

//! Single-path grid puzzle engine.
//!
//! The player draws one continuous, non-crossing path through every cell of
//! a square grid, visiting the numbered waypoint cells in ascending order.
//! This crate is the puzzle core behind such a game:
//!
//! * [`generator`] builds guaranteed-solvable levels: a random Hamiltonian
//!   path over the grid with numbered waypoints spread along it.
//! * [`daily`] derives the reproducible daily level from a calendar date.
//! * [`game`] tracks a solve attempt: legal-move checking, forward
//!   movement, backtracking and undo, win detection, and hints.
//! * [`session`] holds the narrow interfaces that storage and UI
//!   collaborators plug into.
//!
//! Rendering, persistence, audio, and scheduling are collaborator
//! concerns: they drive the engine through the [`game::Game`] operations
//! and read its snapshot accessors after every call.

pub mod cli_options;
pub mod daily;
pub mod game;
pub mod generator;
pub mod grid;
pub mod level;
pub mod session;
