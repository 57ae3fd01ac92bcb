/*
daily.rs

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

//! Deterministic daily puzzles seeded from the calendar date.
//!
//! Every device generates the same puzzle for the same calendar day without
//! any network coordination: the date is reduced to an integer seed, and a
//! fixed-constant linear congruential generator drives every random choice
//! of the level generator. Reseeding between shuffles, or falling back to
//! the platform random source for any choice, would break the cross-device
//! guarantee.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use log::debug;
use rand::RngCore;
use std::time::Duration;

use crate::generator::{self, GeneratorError};
use crate::level::LevelDefinition;
use crate::session::Clock;

/// Grid size of the daily puzzles.
pub const DAILY_GRID_SIZE: usize = 6;

/// Waypoint count of the daily puzzles.
pub const DAILY_NODE_COUNT: usize = 8;

// Knuth's MMIX linear congruential constants.
const MULTIPLIER: u64 = 6364136223846793005;
const INCREMENT: u64 = 1442695040888963407;

/// Reproducible pseudo-random source for daily level generation.
///
/// Each step applies `state = state * MULTIPLIER + INCREMENT (mod 2^64)`
/// and returns the new state. Two sources created with the same seed
/// produce identical streams, on any platform.
pub struct SeededRng {
    /// Generator state; the seed before the first step.
    state: u64,
}

impl SeededRng {
    /// Create a [`SeededRng`] object from the given seed.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }
}

impl RngCore for SeededRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        self.state
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes: [u8; 8] = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

/// Reduce a calendar date to the daily seed.
///
/// The seed is `year * 10000 + month * 100 + day`, which is collision-free
/// for any plausible calendar range.
pub fn seed_for_date(date: NaiveDate) -> u64 {
    date.year() as u64 * 10_000 + u64::from(date.month()) * 100 + u64::from(date.day())
}

/// Generate the daily level for the given calendar date.
///
/// The result is a pure function of the date: two calls with the same date
/// return identical levels, across processes and devices.
///
/// # Errors
///
/// See [`generator::generate_level_with_rng`]; the daily parameters are
/// always valid, so only [`GeneratorError::NoPath`] remains, and a square
/// grid never produces it.
pub fn generate_daily_level(date: NaiveDate) -> Result<LevelDefinition, GeneratorError> {
    let seed: u64 = seed_for_date(date);
    debug!("Daily seed for {date} = {seed}");
    let mut rng: SeededRng = SeededRng::new(seed);
    generator::generate_level_with_rng(DAILY_GRID_SIZE, DAILY_NODE_COUNT, &mut rng)
}

/// A dated daily puzzle.
pub struct DailyChallenge {
    /// Calendar date of the challenge.
    pub date: NaiveDate,

    /// Date rendered as "YYYY-MM-DD", for display and storage keys.
    pub date_string: String,

    /// The generated level.
    pub level: LevelDefinition,
}

impl DailyChallenge {
    /// Create the challenge for today, as reported by the given clock.
    ///
    /// # Errors
    ///
    /// See [`generate_daily_level`].
    pub fn new(clock: &dyn Clock) -> Result<Self, GeneratorError> {
        Self::for_date(clock.today())
    }

    /// Create the challenge for the given calendar date.
    ///
    /// # Errors
    ///
    /// See [`generate_daily_level`].
    pub fn for_date(date: NaiveDate) -> Result<Self, GeneratorError> {
        let level: LevelDefinition = generate_daily_level(date)?;
        Ok(Self {
            date,
            date_string: date.format("%Y-%m-%d").to_string(),
            level,
        })
    }

    /// Whether the challenge is the one for today.
    pub fn is_today(&self, clock: &dyn Clock) -> bool {
        self.date == clock.today()
    }

    /// Return the time remaining until the next daily puzzle becomes
    /// available (the next local midnight).
    pub fn time_until_next(clock: &dyn Clock) -> Duration {
        let now: NaiveDateTime = clock.now().naive_local();
        let midnight: Option<NaiveDateTime> = now
            .date()
            .succ_opt()
            .and_then(|d| d.and_hms_opt(0, 0, 0));
        match midnight {
            Some(m) => (m - now).to_std().unwrap_or(Duration::ZERO),
            None => Duration::ZERO,
        }
    }

    /// Return the countdown to the next daily puzzle as "HH:MM:SS".
    pub fn formatted_countdown(clock: &dyn Clock) -> String {
        let remaining: u64 = Self::time_until_next(clock).as_secs();
        format!(
            "{:02}:{:02}:{:02}",
            remaining / 3600,
            (remaining % 3600) / 60,
            remaining % 60
        )
    }
}
