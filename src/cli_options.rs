/*
cli_options.rs

Copyright 2026 Gridstroke contributors

This file is part of Gridstroke.

Gridstroke is free software: you can redistribute it and/or modify it under
the terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Gridstroke is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Gridstroke. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Process command-line options.
//!
//! These options are intended for developers working on stages.
//! In command-line mode, Gridstroke can render the solution path of any
//! pattern family as an ASCII board, export a stage as JSON for the render
//! layer, replay a solution through the game to verify that generation and
//! validation agree, and self-check every pattern at every supported size.
//!
//! # Examples
//!
//! Render the spiral stage on a 6x6 board:
//!
//! ```text
//! $ gridstroke --pattern spiral --size 6
//!    1*   2    3    4    5    6*
//!   20   21   22   23   24*   7
//!   19   32   33   34   25    8
//!   18*  31   36*  35   26    9
//!   17   30*  29   28   27   10
//!   16   15   14   13   12*  11
//! ```
//!
//! Validate all the patterns:
//!
//! ```text
//! $ gridstroke --check
//! snake      3..=10 ok
//! zigzag     3..=10 ok
//! ...
//! 12 patterns, 96 boards, 0 failures
//! ```

use std::env;
use std::time::Duration;

use clap::Parser;
use log::debug;
use serde::Serialize;

use crate::catalog::{MAX_GRID_SIZE, MIN_GRID_SIZE, PatternType, StageCatalog, StageConfig};
use crate::cell::Cell;
use crate::game::Game;
use crate::generator::dots::{self, Dot};
use crate::generator::path::TracePath;
use crate::generator::patterns;

/// Build and check Gridstroke stages for developers.
#[derive(Parser)]
#[command(about, long_about = None, version)]
struct Args {
    /// List the built-in stage catalog
    #[arg(short, long, default_value_t = false)]
    ls: bool,

    /// Pattern family to generate a board for
    #[arg(short, long, group = "generate")]
    pattern: Option<PatternType>,

    /// Grid size of the generated board
    #[arg(short, long, default_value_t = 5, requires = "generate")]
    size: usize,

    /// Number of dots placed on the board (computed from the size if not set)
    #[arg(short, long, requires = "generate")]
    dots: Option<usize>,

    /// Print the generated stage as JSON instead of an ASCII board
    #[arg(short, long, default_value_t = false, requires = "generate")]
    json: bool,

    /// Replay the generated solution through the game and report the outcome
    #[arg(short, long, default_value_t = false, requires = "generate")]
    replay: bool,

    /// Validate every pattern at every supported grid size
    #[arg(short, long, default_value_t = false)]
    check: bool,

    /// Enable debug messages
    #[arg(long, default_value_t = false)]
    debug: bool,
}

/// Stage description for the JSON export.
#[derive(Serialize)]
struct StageExport<'a> {
    config: &'a StageConfig,
    solution: &'a [Cell],
    dots: &'a [Dot],
}

/// Parse and process command-line options, and return the process exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    if args.ls {
        return list_catalog();
    }
    if let Some(pattern) = args.pattern {
        let config: StageConfig = StageConfig::new(args.size, pattern, 1);
        if args.replay {
            return replay_stage(&config);
        }
        return print_stage(&config, args.dots, args.json);
    }
    if args.check {
        return run_check();
    }
    // Without a more specific request, run the full self-check as well.
    run_check()
}

/// Print the built-in stage catalog.
fn list_catalog() -> u8 {
    for stage in StageCatalog::builtin().iter() {
        println!(
            "{:>3}  {:<10} {}x{}  {} dots",
            stage.order,
            stage.pattern.to_string(),
            stage.grid_size,
            stage.grid_size,
            stage.dot_count()
        );
    }
    0
}

/// Generate a stage and print it as an ASCII board or as JSON.
fn print_stage(config: &StageConfig, dot_count: Option<usize>, json: bool) -> u8 {
    let solution: TracePath = match patterns::generate(config.grid_size, config.pattern) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };
    let dot_count: usize = dot_count.unwrap_or(config.dot_count());
    let dot_list: Vec<Dot> = match dots::place_dots(&solution, dot_count) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };

    if json {
        let export: StageExport = StageExport {
            config,
            solution: solution.cells(),
            dots: &dot_list,
        };
        match serde_json::to_string_pretty(&export) {
            Ok(out) => println!("{out}"),
            Err(e) => {
                eprintln!("Error: {e}");
                return 1;
            }
        }
        return 0;
    }

    print_board(config.grid_size, &solution, &dot_list);
    0
}

/// Print the board as a grid of path step numbers; dots get a `*` marker.
fn print_board(grid_size: usize, solution: &TracePath, dot_list: &[Dot]) {
    let mut steps: Vec<Vec<usize>> = vec![vec![0; grid_size]; grid_size];
    for (i, cell) in solution.cells().iter().enumerate() {
        steps[cell.row][cell.col] = i + 1;
    }

    for row in 0..grid_size {
        let mut line: String = String::new();
        for col in 0..grid_size {
            let marker: char = if dot_list
                .iter()
                .any(|d| d.cell == Cell::new(row, col))
            {
                '*'
            } else {
                ' '
            };
            line.push_str(&format!("{:>4}{marker}", steps[row][col]));
        }
        println!("{line}");
    }
    println!();
    for dot in dot_list {
        println!("dot {:>2} -> {} (step {})", dot.index, dot.cell, dot.position + 1);
    }
}

/// Replay the generated solution through the game, cell by cell, and report
/// whether the stage was won.
fn replay_stage(config: &StageConfig) -> u8 {
    let mut game: Game = match Game::start_stage(config) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };

    let solution: Vec<Cell> = game.solution().cells().to_vec();
    let mut rejections: usize = 0;
    for cell in solution {
        // Simulate the caller-driven clock with a fixed tick per move.
        game.tick(Duration::from_millis(40));
        if let Err(rejection) = game.propose_move(cell) {
            debug!("replay: {cell} refused: {rejection}");
            rejections += 1;
        }
    }

    match game.won_event() {
        Some(event) => {
            println!(
                "Solved: {} moves, {} rejections, stage time {:?}",
                event.move_count, rejections, event.stage_time
            );
            0
        }
        None => {
            eprintln!(
                "Error: replay did not reach the won state ({rejections} rejections)"
            );
            1
        }
    }
}

/// Generate every pattern at every supported grid size, and verify that no
/// pattern degenerates into the snake serpentine.
fn run_check() -> u8 {
    let mut boards: usize = 0;
    let mut failures: usize = 0;

    for pattern in PatternType::all() {
        let mut pattern_ok: bool = true;
        for grid_size in MIN_GRID_SIZE..=MAX_GRID_SIZE {
            boards += 1;
            match patterns::generate(grid_size, pattern) {
                Ok(path) => {
                    if pattern != PatternType::Snake
                        && let Ok(snake) = patterns::generate(grid_size, PatternType::Snake)
                        && path == snake
                    {
                        eprintln!(
                            "{pattern} degenerates into the snake on the {grid_size}x{grid_size} board"
                        );
                        pattern_ok = false;
                        failures += 1;
                    }
                }
                Err(e) => {
                    eprintln!("{e}");
                    pattern_ok = false;
                    failures += 1;
                }
            }
        }
        println!(
            "{:<10} {MIN_GRID_SIZE}..={MAX_GRID_SIZE} {}",
            pattern.to_string(),
            if pattern_ok { "ok" } else { "FAILED" }
        );
    }

    println!("12 patterns, {boards} boards, {failures} failures");
    u8::from(failures > 0)
}
