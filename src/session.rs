/*
session.rs

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

//! Collaborator interfaces around a solve session.
//!
//! The engine itself keeps no global state. Collaborators that persist
//! history or track statistics receive a [`SessionSummary`] through the
//! write-only [`SummarySink`] interface, once per completed session. The
//! read-only [`Clock`] interface supplies "now" and "today" to the daily
//! challenge so that callers (and tests) control the time source.

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime};

use crate::generator::puzzles::Difficulty;

/// Summary of a completed solve session.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SessionSummary {
    /// How long the player took, from the first move to the winning move.
    pub time: Duration,

    /// Completion timestamp.
    pub when: SystemTime,

    /// Grid size of the solved level.
    pub grid_size: usize,

    /// Number of waypoints in the solved level.
    pub waypoints: usize,

    /// Difficulty tier, when the level came from the tiered generator.
    pub difficulty: Option<Difficulty>,
}

/// Write-only consumer of completed-session summaries.
///
/// History storage, achievements, and leaderboard submission all live
/// behind this interface; the engine calls it at most once per session.
pub trait SummarySink {
    /// Record the summary of a completed session.
    fn record(&mut self, summary: &SessionSummary);
}

/// In-memory [`SummarySink`] used by the command-line tool and by tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    summaries: Vec<SessionSummary>,
}

impl MemorySink {
    /// Create a [`MemorySink`] object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the recorded summaries, oldest first.
    pub fn summaries(&self) -> &[SessionSummary] {
        &self.summaries
    }
}

impl SummarySink for MemorySink {
    fn record(&mut self, summary: &SessionSummary) {
        self.summaries.push(summary.clone());
    }
}

/// Read-only source of the current date and time.
pub trait Clock {
    /// Return the current local date and time.
    fn now(&self) -> DateTime<Local>;

    /// Return the current local calendar date.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// [`Clock`] backed by the system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
