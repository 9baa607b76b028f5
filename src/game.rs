/*
game.rs

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

//! Manage the status of a game in progress.
//!
//! The [`Game`] object is the runtime core: it owns the player's in-progress
//! stroke, the set of locked dots, the timers and the move counter, and
//! enforces the gameplay rules on every proposed move. It is built per
//! playthrough and driven strictly sequentially by a single caller; no
//! operation suspends or blocks, and the timers only advance through
//! [`Game::tick`].
//!
//! Every accepted or rejected operation leaves the machine in a consistent
//! state: rejections return a [`MoveRejection`] value and touch nothing.
//! External collaborators (render layer, statistics layer) consume
//! [`Snapshot`] values and, on completion, the [`WonEvent`].

use std::collections::BTreeSet;
use std::fmt;
use std::time::Duration;

use log::debug;
use serde::Serialize;

use crate::catalog::StageConfig;
use crate::cell::Cell;
use crate::generator::dots::{self, Dot, DotPlacementError, Segment};
use crate::generator::path::TracePath;
use crate::generator::patterns::{self, PatternGenerationError};
use crate::generator::validate;

/// Status of the playthrough.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// No active stroke.
    Idle,

    /// The stroke is being drawn.
    Playing,

    /// The board is covered and every dot was visited in order. Terminal
    /// until an explicit reset or stage advance.
    Won,
}

/// Reason a proposed move was refused. Never fatal; the game state is left
/// unchanged and the caller decides how to re-prompt the player.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    /// The cell does not touch the head of the stroke.
    NotAdjacent,

    /// The cell is already part of the stroke.
    AlreadyVisited,

    /// The cell is a numbered dot that is not the next expected one.
    /// `found` is `None` when the stroke must open on dot 1 and the cell is
    /// not a dot at all.
    DotOrderViolation {
        expected: usize,
        found: Option<usize>,
    },
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MoveRejection::NotAdjacent => write!(f, "cell is not adjacent to the stroke"),
            MoveRejection::AlreadyVisited => write!(f, "cell is already part of the stroke"),
            MoveRejection::DotOrderViolation { expected, found } => match found {
                Some(found) => write!(f, "dot {found} reached while dot {expected} is expected"),
                None => write!(f, "the stroke must start on dot {expected}"),
            },
        }
    }
}

/// Type of errors raised while setting up a stage.
#[derive(Debug, PartialEq, Eq)]
pub enum StageError {
    /// The pattern construction failed its post-condition.
    Generation(PatternGenerationError),

    /// The dot placement contract was violated.
    Dots(DotPlacementError),
}

impl fmt::Display for StageError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StageError::Generation(e) => write!(f, "{e}"),
            StageError::Dots(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for StageError {}

impl From<PatternGenerationError> for StageError {
    fn from(e: PatternGenerationError) -> Self {
        StageError::Generation(e)
    }
}

impl From<DotPlacementError> for StageError {
    fn from(e: DotPlacementError) -> Self {
        StageError::Dots(e)
    }
}

/// Immutable view of the game state, emitted after every operation for the
/// render and statistics layers.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Status of the playthrough.
    pub status: GameStatus,

    /// The player's stroke, in draw order.
    pub path: Vec<Cell>,

    /// Indices of the dots already locked, in ascending order.
    pub locked_dots: Vec<usize>,

    /// Index of the next dot the player must reach.
    pub next_dot: usize,

    /// Number of accepted stroke extensions so far.
    pub move_count: usize,

    /// Time spent on the current stage.
    pub stage_time: Duration,

    /// Time spent since the machine was created.
    pub global_time: Duration,
}

/// Terminal event carrying the final figures for the statistics and
/// achievements collaborators.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WonEvent {
    /// Position of the completed stage in the progression.
    pub stage_order: usize,

    /// Number of accepted moves.
    pub move_count: usize,

    /// Time spent on the stage.
    pub stage_time: Duration,

    /// Time spent across all stages of this playthrough.
    pub global_time: Duration,
}

/// Manage the status of the game in progress.
#[derive(Debug)]
pub struct Game {
    /// Configuration of the stage being played.
    config: StageConfig,

    /// Generated solution path (ground truth for the stage).
    solution: TracePath,

    /// Numbered dots derived from the solution.
    dots: Vec<Dot>,

    /// The player's stroke.
    player_path: TracePath,

    /// Indices of the dots already locked.
    locked_dots: BTreeSet<usize>,

    /// Index of the next dot the player must reach.
    next_dot: usize,

    /// Number of accepted stroke extensions.
    move_count: usize,

    /// Time spent on the current stage.
    stage_time: Duration,

    /// Time spent since the machine was created.
    global_time: Duration,

    /// Status of the playthrough.
    status: GameStatus,
}

impl Game {
    /// Build the machine for the given stage.
    ///
    /// The solution and the dots are generated here; both timers and the
    /// move counter start at zero, and the status is [`GameStatus::Idle`]
    /// until the first accepted move.
    ///
    /// # Errors
    ///
    /// Setup errors (pattern self-check failure, dot placement contract
    /// violation) are fatal to stage start and propagate to the caller.
    pub fn start_stage(config: &StageConfig) -> Result<Self, StageError> {
        let (solution, dots) = build_stage(config)?;
        let num_cells: usize = solution.len();
        Ok(Self {
            config: *config,
            solution,
            dots,
            player_path: TracePath::new(num_cells),
            locked_dots: BTreeSet::new(),
            next_dot: 1,
            move_count: 0,
            stage_time: Duration::ZERO,
            global_time: Duration::ZERO,
            status: GameStatus::Idle,
        })
    }

    /// Return the configuration of the stage being played.
    pub fn config(&self) -> &StageConfig {
        &self.config
    }

    /// Return the solution path of the stage.
    pub fn solution(&self) -> &TracePath {
        &self.solution
    }

    /// Return the numbered dots of the stage.
    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    /// Return the guidance segments between consecutive dots.
    pub fn segments(&self) -> Vec<Segment> {
        dots::segments(&self.solution, &self.dots)
    }

    /// Return the status of the playthrough.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Return an immutable view of the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            status: self.status,
            path: self.player_path.cells().to_vec(),
            locked_dots: self.locked_dots.iter().copied().collect(),
            next_dot: self.next_dot,
            move_count: self.move_count,
            stage_time: self.stage_time,
            global_time: self.global_time,
        }
    }

    /// Return the terminal event once the stage is won.
    pub fn won_event(&self) -> Option<WonEvent> {
        if self.status != GameStatus::Won {
            return None;
        }
        Some(WonEvent {
            stage_order: self.config.order,
            move_count: self.move_count,
            stage_time: self.stage_time,
            global_time: self.global_time,
        })
    }

    /// Extend the stroke with the given cell.
    ///
    /// The move is validated before anything is mutated: the cell must touch
    /// the head of the stroke (the very first cell must be dot 1), must not
    /// already be part of the stroke, and must not be a numbered dot other
    /// than the next expected one. Landing exactly on an out-of-order dot is
    /// the only dot-order offence; mere proximity is never penalised.
    ///
    /// # Errors
    ///
    /// A refused move returns the [`MoveRejection`] reason and leaves the
    /// state untouched.
    pub fn propose_move(&mut self, cell: Cell) -> Result<Snapshot, MoveRejection> {
        if !cell.in_grid(self.config.grid_size) {
            return Err(MoveRejection::NotAdjacent);
        }

        match self.player_path.last() {
            None => {
                // The stroke always opens on the first dot.
                if cell != self.dots[0].cell {
                    debug!("move {cell} refused: the stroke must start on dot 1");
                    return Err(MoveRejection::DotOrderViolation {
                        expected: 1,
                        found: self.dot_index(cell),
                    });
                }
            }
            Some(head) => {
                if !validate::is_adjacent(head, cell) {
                    debug!("move {cell} refused: not adjacent to {head}");
                    return Err(MoveRejection::NotAdjacent);
                }
                if self.player_path.contains(cell) {
                    debug!("move {cell} refused: already visited");
                    return Err(MoveRejection::AlreadyVisited);
                }
                if let Some(found) = self.dot_index(cell)
                    && found != self.next_dot
                {
                    debug!(
                        "move {cell} refused: dot {found} reached, dot {} expected",
                        self.next_dot
                    );
                    return Err(MoveRejection::DotOrderViolation {
                        expected: self.next_dot,
                        found: Some(found),
                    });
                }
            }
        }

        self.player_path.push(cell);
        self.move_count += 1;
        if self.status == GameStatus::Idle {
            self.status = GameStatus::Playing;
        }
        if let Some(index) = self.dot_index(cell) {
            self.locked_dots.insert(index);
            self.next_dot = index + 1;
        }
        self.check_win();
        Ok(self.snapshot())
    }

    /// Remove the most recent cell from the stroke.
    ///
    /// A no-op on an empty stroke, and refused once the stage is won. When
    /// the removed cell is the most recently locked dot, the dot unlocks
    /// again. Emptying the stroke returns the status to
    /// [`GameStatus::Idle`].
    pub fn undo_last_move(&mut self) -> Snapshot {
        if self.status == GameStatus::Won {
            return self.snapshot();
        }
        if let Some(cell) = self.player_path.pop() {
            if let Some(index) = self.dot_index(cell) {
                self.locked_dots.remove(&index);
                self.next_dot = index;
            }
            if self.player_path.is_empty() {
                self.status = GameStatus::Idle;
            }
        }
        self.snapshot()
    }

    /// Restart the stage: clear the stroke, the locked dots, the move
    /// counter and the stage timer, but keep the same solution and dots.
    /// The global timer keeps running.
    pub fn reset_stage(&mut self) -> Snapshot {
        self.player_path.clear();
        self.locked_dots.clear();
        self.next_dot = 1;
        self.move_count = 0;
        self.stage_time = Duration::ZERO;
        self.status = GameStatus::Idle;
        self.snapshot()
    }

    /// Move on to another stage: regenerate the solution and dots for the
    /// given configuration and clear the per-stage state. The global timer
    /// carries over.
    ///
    /// # Errors
    ///
    /// On a setup error the previous stage is left intact.
    pub fn advance_stage(&mut self, config: &StageConfig) -> Result<Snapshot, StageError> {
        let (solution, dots) = build_stage(config)?;
        self.config = *config;
        self.solution = solution;
        self.dots = dots;
        self.player_path.clear();
        self.locked_dots.clear();
        self.next_dot = 1;
        self.move_count = 0;
        self.stage_time = Duration::ZERO;
        self.status = GameStatus::Idle;
        Ok(self.snapshot())
    }

    /// Advance both timers by the elapsed time reported by the caller's
    /// clock. Ticks outside of play are ignored.
    pub fn tick(&mut self, elapsed: Duration) {
        if self.status != GameStatus::Playing {
            return;
        }
        self.stage_time += elapsed;
        self.global_time += elapsed;
    }

    /// Return the index of the dot sitting on the given cell.
    fn dot_index(&self, cell: Cell) -> Option<usize> {
        self.dots.iter().find(|d| d.cell == cell).map(|d| d.index)
    }

    /// Evaluate the win condition: full coverage, every dot locked in
    /// order, and the stroke ending on the highest-numbered dot. The dot
    /// order and the coverage are re-verified with the validator even
    /// though the per-move rules already prevent violations.
    fn check_win(&mut self) {
        let grid_size: usize = self.config.grid_size;
        if self.player_path.len() < grid_size * grid_size {
            return;
        }

        let all_locked: bool = self.locked_dots.len() == self.dots.len();
        let ends_on_last: bool = match self.dots.last() {
            Some(last_dot) => self.player_path.last() == Some(last_dot.cell),
            None => false,
        };
        if all_locked
            && ends_on_last
            && validate::has_full_coverage(self.player_path.cells(), grid_size)
            && validate::validate_dot_order(self.player_path.cells(), &self.dots)
        {
            self.status = GameStatus::Won;
            debug!(
                "stage {} won in {} moves",
                self.config.order, self.move_count
            );
        }
    }
}

/// Generate the solution and the dots for a stage.
///
/// The solution is self-checked inside the generator; a dot order breaking
/// over its own solution would be a placement bug, hence the assertion.
fn build_stage(config: &StageConfig) -> Result<(TracePath, Vec<Dot>), StageError> {
    let solution: TracePath = patterns::generate(config.grid_size, config.pattern)?;
    let dots: Vec<Dot> = dots::place_dots(&solution, config.dot_count())?;
    debug_assert!(validate::validate_dot_order(solution.cells(), &dots));
    Ok((solution, dots))
}
