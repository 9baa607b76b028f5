/*
dots.rs

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

//! Numbered checkpoint dots.
//!
//! Dots are the numbered cells that the player must visit in ascending
//! order. They are derived from the stage solution: dot 1 sits on the first
//! cell of the path, the highest-numbered dot always sits on the last cell,
//! and the remaining dots are spread at even intervals so that the guidance
//! segments between consecutive dots stay comparable in length.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::generator::path::TracePath;

/// Type of errors.
#[derive(Debug, PartialEq, Eq)]
pub enum DotPlacementError {
    /// Fewer than two dots were requested; a stage needs at least a start
    /// and an end dot.
    TooFewDots(usize),

    /// More dots were requested than the path has cells.
    TooManyDots { requested: usize, path_len: usize },
}

impl fmt::Display for DotPlacementError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DotPlacementError::TooFewDots(requested) => {
                write!(f, "at least 2 dots are required, {requested} requested")
            }
            DotPlacementError::TooManyDots {
                requested,
                path_len,
            } => {
                write!(
                    f,
                    "{requested} dots requested for a path of {path_len} cells"
                )
            }
        }
    }
}

impl std::error::Error for DotPlacementError {}

/// A numbered checkpoint cell.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dot {
    /// Order index, starting at 1.
    pub index: usize,

    /// Cell the dot sits on.
    pub cell: Cell,

    /// Position of the cell in the solution path.
    pub position: usize,
}

/// Sub-path between two consecutive dots.
///
/// Consecutive segments share the dot cell at their boundary.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Index of the dot the segment starts from.
    pub from_dot: usize,

    /// Index of the dot the segment leads to.
    pub to_dot: usize,

    /// The solution cells from one dot to the other, both included.
    pub cells: Vec<Cell>,
}

/// Select the solution cells that become numbered dots.
///
/// The placement is deterministic: the same solution and dot count always
/// produce the same dots. Dot 1 is the first cell of the path; the dot with
/// the highest index is always the last cell.
///
/// # Errors
///
/// The function returns an error when fewer than two dots are requested, or
/// when more dots are requested than the path has cells. Both are contract
/// violations of the caller and are rejected before any computation.
pub fn place_dots(solution: &TracePath, dot_count: usize) -> Result<Vec<Dot>, DotPlacementError> {
    if dot_count < 2 {
        return Err(DotPlacementError::TooFewDots(dot_count));
    }
    let len: usize = solution.len();
    if dot_count > len {
        return Err(DotPlacementError::TooManyDots {
            requested: dot_count,
            path_len: len,
        });
    }

    let cells: &[Cell] = solution.cells();
    let mut dots: Vec<Dot> = Vec::with_capacity(dot_count);
    for i in 0..dot_count {
        // Even spread along the path. For the last dot the expression is
        // exactly len - 1, which pins it to the final cell.
        let position: usize = i * (len - 1) / (dot_count - 1);
        dots.push(Dot {
            index: i + 1,
            cell: cells[position],
            position,
        });
    }
    Ok(dots)
}

/// Slice the solution into the guidance segments between consecutive dots.
pub fn segments(solution: &TracePath, dots: &[Dot]) -> Vec<Segment> {
    let cells: &[Cell] = solution.cells();
    let mut segments: Vec<Segment> = Vec::with_capacity(dots.len().saturating_sub(1));

    for pair in dots.windows(2) {
        segments.push(Segment {
            from_dot: pair[0].index,
            to_dot: pair[1].index,
            cells: cells[pair[0].position..=pair[1].position].to_vec(),
        });
    }
    segments
}
