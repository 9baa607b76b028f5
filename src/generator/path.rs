/*
path.rs

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

//! Path over the board.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::cell::Cell;

/// Path object.
///
/// Used both for stage solutions and for the player's in-progress stroke.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct TracePath {
    /// Path as an ordered list of cells.
    path: Vec<Cell>,

    /// Stores the visited status of the cells.
    /// Instead of looking for the cell in the [`TracePath::path`] vector,
    /// this [`std::collections::HashSet`] speeds up the lookup.
    visited: HashSet<Cell>,
}

impl PartialEq for TracePath {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl TracePath {
    /// Create a [`TracePath`] object with room for the given number of cells.
    pub fn new(num_cells: usize) -> Self {
        Self {
            path: Vec::with_capacity(num_cells),
            visited: HashSet::with_capacity(num_cells),
        }
    }

    /// Create a [`TracePath`] object from a list of cells.
    pub fn from_cells(cells: &[Cell]) -> Self {
        Self {
            path: cells.to_vec(),
            visited: cells.iter().copied().collect(),
        }
    }

    /// Remove all the cells from the path.
    pub fn clear(&mut self) {
        self.path.clear();
        self.visited.clear();
    }

    /// Add a cell to the path.
    pub fn push(&mut self, cell: Cell) {
        self.path.push(cell);
        self.visited.insert(cell);
    }

    /// Remove the last cell from the path and return it.
    pub fn pop(&mut self) -> Option<Cell> {
        let cell: Option<Cell> = self.path.pop();
        if let Some(c) = cell {
            self.visited.remove(&c);
        }
        cell
    }

    /// Get the number of cells in the path.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Whether the path has no cells.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Whether the cell is in the path or not.
    pub fn contains(&self, cell: Cell) -> bool {
        self.visited.contains(&cell)
    }

    /// Return the path as a slice of cells.
    pub fn cells(&self) -> &[Cell] {
        &self.path
    }

    /// Return the position of the given cell in the path. Add one to the
    /// return value to get the step number.
    pub fn position(&self, cell: Cell) -> Option<usize> {
        self.path.iter().position(|c| *c == cell)
    }

    /// Return the first cell in the path.
    pub fn first(&self) -> Option<Cell> {
        self.path.first().copied()
    }

    /// Return the last cell in the path.
    pub fn last(&self) -> Option<Cell> {
        self.path.last().copied()
    }
}
