/*
scores.rs

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

//! Manage the score boards for the stages.
//!
//! The main object, [`ScoreBoards`], maintains a list of top scores for each
//! stage, fed by the [`crate::game::WonEvent`] values the game emits on
//! completion. The boards live in memory only; cross-session persistence
//! belongs to external collaborators.

use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::catalog::StageConfig;
use crate::game::WonEvent;

/// Number of entries per score board (number of top scores to keep).
const BOARD_SIZE: usize = 10;

/// Object that represents a score.
#[derive(Serialize, Debug, Clone, Copy)]
pub struct Score {
    /// How long it took to complete the stage.
    pub time: Duration,

    /// Number of accepted moves for the completion.
    pub moves: usize,

    /// Completion timestamp, which is used to display the date and time in
    /// the score board.
    pub when: DateTime<Local>,
}

/// Sorted list of the top scores for a stage.
#[derive(Serialize, Debug, Clone, Default)]
struct StageScoreBoard {
    /// Sorted list of the top scores.
    /// The number of scores in this list is controlled by the
    /// [`BOARD_SIZE`] constant.
    top: Vec<Score>,
}

impl StageScoreBoard {
    /// Create a [`StageScoreBoard`] object.
    fn new() -> Self {
        Self {
            top: Vec::with_capacity(BOARD_SIZE),
        }
    }

    /// Add a score to the board and return its position, or None if the
    /// score does not make it to the board.
    ///
    /// The returned position starts at 1 (top score).
    fn add_score(&mut self, time: Duration, moves: usize) -> Option<usize> {
        let mut new_score_position: Option<usize> = None;
        let mut tmp_top: Vec<Score> = Vec::with_capacity(BOARD_SIZE);
        let mut i: usize = 0;

        for score in &self.top {
            // Insert the new score into the temporary board
            if time < score.time && new_score_position.is_none() {
                new_score_position = Some(i + 1);
                tmp_top.push(Score {
                    time,
                    moves,
                    when: Local::now(),
                });
                i += 1;
            }
            // Do not add more scores than the board size
            if i >= BOARD_SIZE {
                break;
            }
            tmp_top.push(*score);
            i += 1;
        }
        // If the board is not full and the new score has not been added yet,
        // then add the new score at the end of the board
        if i < BOARD_SIZE && new_score_position.is_none() {
            new_score_position = Some(i + 1);
            tmp_top.push(Score {
                time,
                moves,
                when: Local::now(),
            });
        }
        self.top = tmp_top;
        new_score_position
    }
}

/// List of the score boards for the stages.
#[derive(Serialize, Debug, Clone)]
pub struct ScoreBoards {
    /// Map of the [`StageScoreBoard`] boards indexed by the stage.
    ///
    /// The stage index is a string in the format `"<pattern>@@<grid_size>"`.
    board: HashMap<String, StageScoreBoard>,
}

impl Default for ScoreBoards {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreBoards {
    /// Create a [`ScoreBoards`] object.
    pub fn new() -> Self {
        Self {
            board: HashMap::new(),
        }
    }

    /// Return the string that is used as an index for the list of boards.
    fn build_key(config: &StageConfig) -> String {
        format!("{}@@{}", config.pattern, config.grid_size)
    }

    /// Record a completed stage and return the position in the board, or
    /// None if the score does not make it to the board.
    ///
    /// The returned position starts at 1 (top score).
    pub fn record_win(&mut self, config: &StageConfig, event: &WonEvent) -> Option<usize> {
        let key: String = Self::build_key(config);
        let board: &mut StageScoreBoard = self.board.entry(key).or_insert(StageScoreBoard::new());

        board.add_score(event.stage_time, event.move_count)
    }

    /// Return the list of [`Score`] for the given stage.
    ///
    /// Return None when the board is empty.
    pub fn get_scores(&self, config: &StageConfig) -> Option<&Vec<Score>> {
        let key: String = Self::build_key(config);

        match self.board.get(&key) {
            Some(b) => Some(&b.top),
            None => None,
        }
    }

    /// Return whether the list of boards is empty (no board for any stage).
    pub fn is_empty(&self) -> bool {
        self.board.is_empty()
    }
}
