/*
cli_options.rs

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

//! Process command-line options.
//!
//! The command-line tool is intended for developers tuning the generator.
//! It generates levels in bulk, renders them as a waypoint grid or as JSON,
//! replays the generated solutions through the game engine, and prints
//! generation statistics.
//!
//! # Examples
//!
//! Generate one medium 6×6 level and draw its waypoint grid:
//!
//! ```text
//! $ zipgrid
//!   1   .   .   .   .   .
//!   .   .   3   .   .   .
//!   .   2   .   .   4   .
//!   .   .   .   .   .   .
//!   .   6   .   5   .   .
//!   .   .   .   7   .   8
//! ```
//!
//! Generate the daily level for a date and print it as JSON:
//!
//! ```text
//! $ zipgrid --daily 2024-03-15 --json
//! ```
//!
//! Generate one hundred hard 8×8 levels, replaying every solution through
//! the game engine, and print the generation statistics:
//!
//! ```text
//! $ zipgrid -c 100 -s 8 -f hard --verify --summary
//! ```

use chrono::NaiveDate;
use clap::Parser;
use log::debug;
use std::env;
use std::time::Instant;

use crate::daily::DailyChallenge;
use crate::game::Game;
use crate::generator::puzzles::Difficulty;
use crate::generator::{self, GeneratorError};
use crate::grid::GridPoint;
use crate::level::LevelDefinition;
use crate::session::{Clock, MemorySink, SystemClock};

/// Build random Zipgrid levels for developers.
#[derive(Parser)]
#[command(about, long_about = None, version)]
struct Args {
    /// Grid size; the grid is SIZE x SIZE cells
    #[arg(short, long, default_value_t = 6)]
    size: usize,

    /// Number of waypoints; overrides the difficulty tier
    #[arg(short, long)]
    nodes: Option<usize>,

    /// Difficulty tier that selects the waypoint count
    #[arg(value_enum, short = 'f', long, default_value_t = Difficulty::Medium)]
    difficulty: Difficulty,

    /// Generate the deterministic daily level for the date (YYYY-MM-DD),
    /// or for today when no date is given
    #[arg(long, value_name = "DATE")]
    daily: Option<Option<NaiveDate>>,

    /// Number of levels to generate
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Print the levels as JSON instead of drawing the waypoint grid
    #[arg(short, long, default_value_t = false)]
    json: bool,

    /// Replay each generated solution through the game engine
    #[arg(long, default_value_t = false)]
    verify: bool,

    /// Print some statistics after generating the levels
    #[arg(long, default_value_t = false)]
    summary: bool,

    /// Enable debug messages
    #[arg(long, default_value_t = false)]
    debug: bool,
}

/// Parse and process the command-line options, and return the exit code.
pub fn run() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let daily_date: Option<NaiveDate> = match args.daily {
        Some(Some(date)) => Some(date),
        Some(None) => Some(SystemClock.today()),
        None => None,
    };
    let difficulty: Option<Difficulty> = match (daily_date, args.nodes) {
        (None, None) => Some(args.difficulty),
        _ => None,
    };
    let number_of_nodes: usize = args
        .nodes
        .unwrap_or_else(|| args.difficulty.node_count(args.size));

    let mut sink: MemorySink = MemorySink::new();
    let mut total: f32 = 0.0;
    let mut max: f32 = 0.0;

    for i in 0..args.count {
        debug!("Iteration {i}");

        let start: Instant = Instant::now();
        // With a count and a daily date, generate the levels of the
        // consecutive days
        let ret: Result<LevelDefinition, GeneratorError> = match daily_date {
            Some(date) => match date.checked_add_days(chrono::Days::new(i as u64)) {
                Some(d) => DailyChallenge::for_date(d).map(|challenge| {
                    if !args.json {
                        println!(
                            "Daily level {} (next daily in {})",
                            challenge.date_string,
                            DailyChallenge::formatted_countdown(&SystemClock)
                        );
                    }
                    challenge.level
                }),
                None => {
                    eprintln!("Date out of range");
                    return 1;
                }
            },
            None => generator::generate_level(args.size, number_of_nodes),
        };
        let duration: f32 = start.elapsed().as_secs_f32();
        total += duration;
        if duration > max {
            max = duration;
        }

        let level: LevelDefinition = match ret {
            Ok(level) => level,
            Err(e) => {
                eprintln!("Cannot generate the level: {e}");
                return 1;
            }
        };

        if args.json {
            match serde_json::to_string_pretty(&level) {
                Ok(text) => println!("{text}"),
                Err(e) => {
                    eprintln!("Cannot serialize the level: {e}");
                    return 1;
                }
            }
        } else {
            print!("{}", render_grid(&level));
            println!();
        }

        if args.verify {
            verify_level(&level, difficulty, &mut sink);
        }
    }

    if args.verify {
        println!(
            "{} levels verified, {} session summaries recorded",
            args.count,
            sink.summaries().len()
        );
    }

    // Print some stats
    if args.summary {
        println!(
            "
  total time = {}s
average time = {}s
    max time = {}s",
            total,
            total / args.count as f32,
            max
        );
    }
    0
}

/// Draw the level's waypoint grid: numbers on the waypoint cells, dots
/// elsewhere.
fn render_grid(level: &LevelDefinition) -> String {
    let mut out: String = String::new();

    for row in 0..level.size() {
        for col in 0..level.size() {
            match level.number_at(GridPoint::new(row, col)) {
                Some(number) => out.push_str(&format!("{number:>3}")),
                None => out.push_str("  ."),
            }
        }
        out.push('\n');
    }
    out
}

/// Replay the level's solution through the game engine.
///
/// Every generated level must accept its own solution move by move and
/// report completion on the final cell; anything else is a generator bug
/// worth failing loudly over.
fn verify_level(level: &LevelDefinition, difficulty: Option<Difficulty>, sink: &mut MemorySink) {
    let Some(solution) = level.solution_path() else {
        eprintln!("Generated level carries no solution path");
        panic!("Bug: generated level without a solution");
    };

    // Verify that the solution has the expected length
    if solution.len() != level.total_cells() {
        eprintln!(
            "Wrong length: {} instead of {}: {solution:?}",
            solution.len(),
            level.total_cells()
        );
        panic!("Bug: wrong length for the generated solution");
    }

    // Verify that there are no duplicated cells
    let mut cells: Vec<GridPoint> = solution.to_vec();
    cells.sort_unstable();
    cells.dedup();
    if cells.len() != level.total_cells() {
        eprintln!("Duplicated cells in solution: {solution:?}");
        panic!("Bug: duplicated cells in generated solution");
    }

    let mut game: Game = Game::new(level.clone());
    for point in &solution[1..] {
        if !game.visit(*point) {
            eprintln!("Solution rejected at {point}: {:?}", game.path());
            panic!("Bug: generated solution is not playable");
        }
    }
    if !game.is_complete() {
        eprintln!("Replayed solution does not solve the level");
        panic!("Bug: replayed solution does not win");
    }
    if !game.report(sink, difficulty) {
        panic!("Bug: completed session has no summary");
    }
}
