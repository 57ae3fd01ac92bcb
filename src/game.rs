/*
game.rs

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

//! Manage the status of a solve session in progress.
//!
//! A [`Game`] tracks one attempt at one level: the drawn path, the visited
//! cells, the next waypoint to reach, and the completion status. Mutations
//! that would break the drawing rules are rejected with a `false` return
//! and leave the state untouched; the caller reads the snapshot accessors
//! after every call to redraw.
//!
//! One session has exactly one logical mover. The path, the visited set,
//! and the target are updated as a unit, so concurrent mutation requires
//! external serialization by the caller.

use log::debug;
use std::collections::HashSet;
use std::time::{Duration, Instant, SystemTime};

use crate::generator::puzzles::Difficulty;
use crate::grid::GridPoint;
use crate::level::LevelDefinition;
use crate::session::{SessionSummary, SummarySink};

/// Manage the status of the solve session in progress.
#[derive(Debug)]
pub struct Game {
    /// The level being played.
    level: LevelDefinition,

    /// Drawn path, from the starting cell to the player's position.
    /// Never empty: the starting cell is always its first element.
    path: Vec<GridPoint>,

    /// Cells currently on the path.
    /// Instead of looking for the cell in the [`Game::path`] vector, this
    /// [`std::collections::HashSet`] speeds up the lookup.
    visited: HashSet<GridPoint>,

    /// Smallest waypoint number not yet reached.
    current_target: usize,

    /// Time of the first successful move. Used to compute the session
    /// duration. Not reset by later moves.
    timer_start: Option<Instant>,

    /// Whether the puzzle is solved.
    complete: bool,
}

impl Game {
    /// Create a [`Game`] object over the given level.
    ///
    /// The path starts on the cell of waypoint 1, which every level
    /// provides.
    pub fn new(level: LevelDefinition) -> Self {
        let start: GridPoint = level.start_position();
        let mut visited: HashSet<GridPoint> = HashSet::with_capacity(level.total_cells());
        visited.insert(start);
        Self {
            level,
            path: vec![start],
            visited,
            current_target: 2,
            timer_start: None,
            complete: false,
        }
    }

    /// Return the level being played.
    pub fn level(&self) -> &LevelDefinition {
        &self.level
    }

    /// Return the drawn path, from the starting cell to the player's
    /// position.
    pub fn path(&self) -> &[GridPoint] {
        &self.path
    }

    /// Return the cells currently on the path.
    pub fn visited(&self) -> &HashSet<GridPoint> {
        &self.visited
    }

    /// Return the smallest waypoint number not yet reached.
    ///
    /// Once every waypoint is reached, the value is `max_number + 1`.
    pub fn current_target(&self) -> usize {
        self.current_target
    }

    /// Return the player's position, the last cell of the path.
    pub fn current_position(&self) -> GridPoint {
        // The path is never empty
        self.path[self.path.len() - 1]
    }

    /// Whether the puzzle is solved.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Return the time of the first successful move, or None before it.
    pub fn timer_start(&self) -> Option<Instant> {
        self.timer_start
    }

    /// Return the time spent since the first successful move, or None
    /// before it.
    pub fn elapsed(&self) -> Option<Duration> {
        self.timer_start.map(|t| t.elapsed())
    }

    /// Whether the given cell is on the drawn path.
    pub fn is_in_path(&self, point: GridPoint) -> bool {
        self.visited.contains(&point)
    }

    /// Whether the player may move onto the given cell.
    ///
    /// The move is legal when the cell is the previous path cell (a
    /// backtrack), or when it is an unvisited neighbor of the current
    /// position that is either unnumbered or carries the next expected
    /// waypoint number. The check does not mutate the session.
    pub fn can_visit(&self, point: GridPoint) -> bool {
        // Must be an orthogonal neighbor of the current position
        if !self.current_position().is_adjacent(point) {
            return false;
        }

        // Stepping back onto the previous cell retracts the path
        if self.is_backtrack(point) {
            return true;
        }

        // The path never crosses itself
        if self.visited.contains(&point) {
            return false;
        }

        // A numbered cell must be the next expected waypoint
        match self.level.number_at(point) {
            Some(number) => number == self.current_target,
            None => true,
        }
    }

    /// Move onto the given cell.
    ///
    /// An illegal move returns `false` and changes nothing. A legal move
    /// onto the previous path cell retracts the path by one cell; any
    /// other legal move extends it. The first successful call starts the
    /// session timer, and every forward move re-evaluates the win
    /// condition.
    pub fn visit(&mut self, point: GridPoint) -> bool {
        if !self.can_visit(point) {
            debug!("Rejected move to {point}");
            return false;
        }

        // Start the timer on the first move
        if self.timer_start.is_none() {
            self.timer_start = Some(Instant::now());
        }

        if self.is_backtrack(point) {
            self.backtrack();
            return true;
        }

        self.path.push(point);
        self.visited.insert(point);
        debug!("Moved to {point} ({} cells drawn)", self.path.len());

        if self.level.number_at(point) == Some(self.current_target) {
            self.current_target += 1;
            debug!("Waypoint reached, next target = {}", self.current_target);
        }

        self.check_win_condition();
        true
    }

    /// Retract the path by one cell. No-op when the path holds only the
    /// starting cell.
    pub fn undo(&mut self) {
        if self.path.len() > 1 {
            self.backtrack();
        }
    }

    /// Retract the path until the given cell is the player's position.
    ///
    /// No-op when the cell is not on the path or already is the current
    /// position.
    pub fn undo_to(&mut self, point: GridPoint) {
        let Some(target_index) = self.path.iter().position(|p| *p == point) else {
            return;
        };
        while self.path.len() > target_index + 1 {
            self.backtrack();
        }
    }

    /// Retract the path to the most recent waypoint behind the player's
    /// position.
    ///
    /// When no waypoint sits on the path behind the current position, the
    /// path retracts all the way to the starting cell (waypoint 1). No-op
    /// when the path holds only the starting cell.
    pub fn undo_to_previous_waypoint(&mut self) {
        if self.path.len() <= 1 {
            return;
        }

        // Scan backward, skipping the current position
        let mut target_index: usize = 0;
        for i in (0..self.path.len() - 1).rev() {
            if self.level.is_waypoint(self.path[i]) {
                target_index = i;
                break;
            }
        }

        while self.path.len() > target_index + 1 {
            self.backtrack();
        }
    }

    /// Restart the session: fresh path, timer not started.
    pub fn reset(&mut self) {
        let start: GridPoint = self.level.start_position();
        debug!("Session reset to {start}");
        self.path.clear();
        self.path.push(start);
        self.visited.clear();
        self.visited.insert(start);
        self.current_target = 2;
        self.timer_start = None;
        self.complete = false;
    }

    /// Return up to `count` upcoming cells of the solution path that are
    /// not yet drawn, in solution order.
    ///
    /// Returns an empty vector for levels without a reference solution, or
    /// when the player's position is not on the solution path.
    pub fn hint_cells(&self, count: usize) -> Vec<GridPoint> {
        let Some(solution) = self.level.solution_path() else {
            return Vec::new();
        };
        let current: GridPoint = self.current_position();
        let Some(position) = solution.iter().position(|p| *p == current) else {
            return Vec::new();
        };

        let mut hints: Vec<GridPoint> = Vec::with_capacity(count);
        let mut next_index: usize = position + 1;
        while hints.len() < count && next_index < solution.len() {
            let cell: GridPoint = solution[next_index];
            if !self.visited.contains(&cell) {
                hints.push(cell);
            }
            next_index += 1;
        }
        hints
    }

    /// Return the summary of the session once it is complete, or None
    /// before that.
    pub fn summary(&self, difficulty: Option<Difficulty>) -> Option<SessionSummary> {
        if !self.complete {
            return None;
        }
        Some(SessionSummary {
            time: self.elapsed().unwrap_or(Duration::ZERO),
            when: SystemTime::now(),
            grid_size: self.level.size(),
            waypoints: self.level.max_number(),
            difficulty,
        })
    }

    /// Deliver the completed-session summary to the given sink.
    ///
    /// Returns `false`, without calling the sink, while the session is not
    /// complete.
    pub fn report(&self, sink: &mut dyn SummarySink, difficulty: Option<Difficulty>) -> bool {
        match self.summary(difficulty) {
            Some(summary) => {
                sink.record(&summary);
                true
            }
            None => false,
        }
    }

    /// Whether stepping onto the given cell retracts the path.
    fn is_backtrack(&self, point: GridPoint) -> bool {
        self.path.len() >= 2 && self.path[self.path.len() - 2] == point
    }

    /// Remove the last cell of the path and roll the target back when that
    /// cell was the most recently reached waypoint.
    fn backtrack(&mut self) {
        if self.path.len() <= 1 {
            return;
        }
        if let Some(removed) = self.path.pop() {
            self.visited.remove(&removed);
            if let Some(number) = self.level.number_at(removed)
                && number == self.current_target - 1
            {
                self.current_target = number;
                debug!("Waypoint undone, next target = {}", self.current_target);
            }
        }
    }

    /// Re-evaluate the win condition after a forward move.
    ///
    /// The session is complete when every cell is drawn, every waypoint
    /// has been reached, and the full order scan confirms the waypoints
    /// appear along the path in ascending numeric order. The scan is the
    /// authoritative test: it re-verifies what the move checks enforce
    /// incrementally.
    fn check_win_condition(&mut self) {
        let all_cells_drawn: bool = self.visited.len() == self.level.total_cells();
        let all_waypoints_reached: bool = self.current_target > self.level.max_number();
        self.complete = all_cells_drawn && all_waypoints_reached && self.waypoints_in_order();
        if self.complete {
            debug!("Puzzle solved in {} cells", self.path.len());
        }
    }

    /// Whether every waypoint occurs in the path in strictly increasing
    /// index order.
    fn waypoints_in_order(&self) -> bool {
        let mut last_index: Option<usize> = None;
        for number in 1..=self.level.max_number() {
            let Some(cell) = self.level.waypoint(number) else {
                return false;
            };
            let Some(index) = self.path.iter().position(|p| *p == cell) else {
                return false;
            };
            if let Some(previous) = last_index
                && index <= previous
            {
                return false;
            }
            last_index = Some(index);
        }
        true
    }
}
