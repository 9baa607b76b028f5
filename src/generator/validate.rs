/*
validate.rs

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

//! Stateless path verification.
//!
//! Pure functions over candidate cell sequences. They are composed by the
//! game for every proposed move, and run once at generation time as a
//! consistency self-check over the full solution before a stage is accepted
//! for play. The functions only report validity; feeding them a corrupted
//! externally-built path is a programmer error, not a user-facing one.

use std::collections::HashSet;

use crate::cell::Cell;
use crate::generator::dots::Dot;

/// Whether the two cells are orthogonally adjacent.
pub fn is_adjacent(a: Cell, b: Cell) -> bool {
    a.manhattan(&b) == 1
}

/// Whether every consecutive pair of cells is orthogonally adjacent.
///
/// Empty and single-cell sequences are trivially valid.
pub fn validate_adjacency_chain(cells: &[Cell]) -> bool {
    cells.windows(2).all(|pair| is_adjacent(pair[0], pair[1]))
}

/// Whether the set of distinct cells in the sequence equals the full grid
/// cell set.
pub fn has_full_coverage(cells: &[Cell], grid_size: usize) -> bool {
    let distinct: HashSet<Cell> = cells.iter().copied().collect();
    distinct.len() == grid_size * grid_size && distinct.iter().all(|c| c.in_grid(grid_size))
}

/// Whether the numbered dots are encountered in strictly ascending index
/// order as the sequence is scanned from the start.
///
/// A path may not reach dot `k + 1` before dot `k`.
pub fn validate_dot_order(cells: &[Cell], dots: &[Dot]) -> bool {
    let mut last_index: usize = 0;
    for cell in cells {
        if let Some(dot) = dots.iter().find(|d| d.cell == *cell) {
            if dot.index != last_index + 1 {
                return false;
            }
            last_index = dot.index;
        }
    }
    true
}
