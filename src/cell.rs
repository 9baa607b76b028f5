/*
cell.rs

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

//! Grid cell coordinates.
//!
//! A [`Cell`] is one position of the square board, identified by its row and
//! column. The type is a small `Copy` value with derived equality and
//! hashing, so it can be used directly as a set or map key. The canonical
//! textual form, `"row,col"`, is what logs, JSON exports, and test fixtures
//! display.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One position of the board.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Row, from 0 (top) to the grid size minus one.
    pub row: usize,

    /// Column, from 0 (left) to the grid size minus one.
    pub col: usize,
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl Cell {
    /// Create a [`Cell`] object.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Return the canonical textual key for the cell.
    pub fn key(&self) -> String {
        self.to_string()
    }

    /// Return the Manhattan distance to another cell.
    pub fn manhattan(&self, other: &Cell) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Whether the cell lies within a board of the given size.
    pub fn in_grid(&self, grid_size: usize) -> bool {
        self.row < grid_size && self.col < grid_size
    }
}
