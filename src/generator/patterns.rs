/*
patterns.rs

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

//! Closed-form solution path constructions.
//!
//! Each [`PatternType`] maps to a small pure function that builds a path
//! visiting every cell of the board exactly once, one orthogonal step at a
//! time. The constructions use only row and column arithmetic (serpentines,
//! ring indices, shells, recursive subdivision); there is no search and no
//! randomness, so a stage always produces the same shape.
//!
//! [`generate`] dispatches on the pattern type and self-checks the produced
//! path (length, coverage, adjacency) before returning it. A failed
//! self-check is reported as a [`PatternGenerationError`]; no fallback path
//! is ever substituted, since that would silently break the per-stage shape
//! guarantee.

use std::fmt;

use log::debug;

use crate::catalog::{MAX_GRID_SIZE, MIN_GRID_SIZE, PatternType};
use crate::cell::Cell;
use crate::generator::path::TracePath;
use crate::generator::validate;

/// Type of errors.
#[derive(Debug, PartialEq, Eq)]
pub enum PatternGenerationError {
    /// The requested grid size is outside the supported range.
    UnsupportedGridSize {
        pattern: PatternType,
        grid_size: usize,
    },

    /// The construction did not produce one cell per board cell.
    WrongLength {
        pattern: PatternType,
        grid_size: usize,
        len: usize,
    },

    /// The construction missed or repeated at least one cell.
    IncompleteCoverage {
        pattern: PatternType,
        grid_size: usize,
    },

    /// Two consecutive cells of the construction are not adjacent.
    BrokenChain {
        pattern: PatternType,
        grid_size: usize,
        position: usize,
    },
}

impl fmt::Display for PatternGenerationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PatternGenerationError::UnsupportedGridSize { pattern, grid_size } => {
                write!(
                    f,
                    "pattern {pattern}: grid size {grid_size} is outside {MIN_GRID_SIZE}..={MAX_GRID_SIZE}"
                )
            }
            PatternGenerationError::WrongLength {
                pattern,
                grid_size,
                len,
            } => {
                write!(
                    f,
                    "pattern {pattern}: {len} cells generated for a {grid_size}x{grid_size} board"
                )
            }
            PatternGenerationError::IncompleteCoverage { pattern, grid_size } => {
                write!(
                    f,
                    "pattern {pattern}: incomplete coverage of the {grid_size}x{grid_size} board"
                )
            }
            PatternGenerationError::BrokenChain {
                pattern,
                grid_size,
                position,
            } => {
                write!(
                    f,
                    "pattern {pattern}: step {position} of the {grid_size}x{grid_size} path is not adjacent to its predecessor"
                )
            }
        }
    }
}

impl std::error::Error for PatternGenerationError {}

/// Generate the solution path for the given board size and pattern family.
///
/// # Errors
///
/// The function returns an error when the grid size is outside the supported
/// range, or when the produced path fails the post-condition self-check
/// (full length, full coverage, contiguous adjacency chain). The caller must
/// treat such an error as fatal to stage setup; no unvalidated path is ever
/// returned.
pub fn generate(
    grid_size: usize,
    pattern: PatternType,
) -> Result<TracePath, PatternGenerationError> {
    if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&grid_size) {
        return Err(PatternGenerationError::UnsupportedGridSize { pattern, grid_size });
    }

    let cells: Vec<Cell> = match pattern {
        PatternType::Snake => snake(grid_size),
        PatternType::Zigzag => transpose(snake(grid_size)),
        PatternType::Spiral => spiral(grid_size),
        PatternType::Vortex => vortex(grid_size),
        PatternType::Diamond => diamond(grid_size),
        PatternType::Onion => onion(grid_size),
        PatternType::Labyrinth => labyrinth(grid_size),
        PatternType::Staircase => staircase(grid_size),
        PatternType::Cascade => rotate180(staircase(grid_size), grid_size),
        PatternType::Maze => panels(grid_size),
        PatternType::Weave => transpose(panels(grid_size)),
        PatternType::Fractal => fractal(grid_size),
    };

    self_check(&cells, grid_size, pattern)?;
    debug!("{pattern} {grid_size}x{grid_size}: {} cells", cells.len());
    Ok(TracePath::from_cells(&cells))
}

/// Verify the generator post-condition: one cell per board cell, full
/// coverage, and a contiguous adjacency chain.
fn self_check(
    cells: &[Cell],
    grid_size: usize,
    pattern: PatternType,
) -> Result<(), PatternGenerationError> {
    if cells.len() != grid_size * grid_size {
        return Err(PatternGenerationError::WrongLength {
            pattern,
            grid_size,
            len: cells.len(),
        });
    }
    if !validate::has_full_coverage(cells, grid_size) {
        return Err(PatternGenerationError::IncompleteCoverage { pattern, grid_size });
    }
    for (i, pair) in cells.windows(2).enumerate() {
        if !validate::is_adjacent(pair[0], pair[1]) {
            return Err(PatternGenerationError::BrokenChain {
                pattern,
                grid_size,
                position: i + 1,
            });
        }
    }
    Ok(())
}

/// Swap rows and columns of every cell.
fn transpose(cells: Vec<Cell>) -> Vec<Cell> {
    cells
        .into_iter()
        .map(|c| Cell::new(c.col, c.row))
        .collect()
}

/// Rotate every cell half a turn around the board centre.
fn rotate180(cells: Vec<Cell>, n: usize) -> Vec<Cell> {
    cells
        .into_iter()
        .map(|c| Cell::new(n - 1 - c.row, n - 1 - c.col))
        .collect()
}

/// Row serpentine from the top-left corner.
fn snake(n: usize) -> Vec<Cell> {
    let mut cells: Vec<Cell> = Vec::with_capacity(n * n);
    for row in 0..n {
        if row % 2 == 0 {
            for col in 0..n {
                cells.push(Cell::new(row, col));
            }
        } else {
            for col in (0..n).rev() {
                cells.push(Cell::new(row, col));
            }
        }
    }
    cells
}

/// Clockwise spiral winding inwards from the top-left corner.
fn spiral(n: usize) -> Vec<Cell> {
    let mut cells: Vec<Cell> = Vec::with_capacity(n * n);
    let mut top: usize = 0;
    let mut bottom: usize = n - 1;
    let mut left: usize = 0;
    let mut right: usize = n - 1;

    loop {
        for col in left..=right {
            cells.push(Cell::new(top, col));
        }
        if top == bottom {
            break;
        }
        top += 1;
        for row in top..=bottom {
            cells.push(Cell::new(row, right));
        }
        if left == right {
            break;
        }
        right -= 1;
        for col in (left..=right).rev() {
            cells.push(Cell::new(bottom, col));
        }
        if top == bottom {
            break;
        }
        bottom -= 1;
        for row in (top..=bottom).rev() {
            cells.push(Cell::new(row, left));
        }
        if left == right {
            break;
        }
        left += 1;
    }
    cells
}

/// Spiral unwinding outwards from the centre.
///
/// The transpose of the clockwise spiral is its counter-clockwise twin;
/// reversing it starts the stroke at the centre cell.
fn vortex(n: usize) -> Vec<Cell> {
    let mut cells: Vec<Cell> = transpose(spiral(n));
    cells.reverse();
    cells
}

/// Cells of the square ring with the given corner bounds, clockwise from
/// the top-left corner. A degenerate one-cell ring yields that single cell.
fn ring_cells(lo: usize, hi: usize) -> Vec<Cell> {
    if lo == hi {
        return vec![Cell::new(lo, lo)];
    }
    let mut cells: Vec<Cell> = Vec::with_capacity(4 * (hi - lo));
    for col in lo..=hi {
        cells.push(Cell::new(lo, col));
    }
    for row in lo + 1..=hi {
        cells.push(Cell::new(row, hi));
    }
    for col in (lo..hi).rev() {
        cells.push(Cell::new(hi, col));
    }
    for row in (lo + 1..hi).rev() {
        cells.push(Cell::new(row, lo));
    }
    cells
}

/// Position of a ring cell in the clockwise list built by [`ring_cells`].
fn ring_position(cell: Cell, lo: usize, hi: usize) -> usize {
    if cell.row == lo {
        cell.col - lo
    } else if cell.col == hi {
        (hi - lo) + (cell.row - lo)
    } else if cell.row == hi {
        2 * (hi - lo) + (hi - cell.col)
    } else {
        3 * (hi - lo) + (hi - cell.row)
    }
}

/// Neighbour of a ring cell on the next ring outwards.
fn outward_neighbour(cell: Cell, lo: usize, hi: usize) -> Cell {
    if cell.row == lo {
        Cell::new(lo - 1, cell.col)
    } else if cell.row == hi {
        Cell::new(hi + 1, cell.col)
    } else if cell.col == lo {
        Cell::new(cell.row, lo - 1)
    } else {
        Cell::new(cell.row, hi + 1)
    }
}

/// Concentric rings from the centre out, the winding direction alternating
/// on every ring.
fn diamond(n: usize) -> Vec<Cell> {
    let mut cells: Vec<Cell> = Vec::with_capacity(n * n);
    let mut lo: usize;
    let mut hi: usize;

    if n % 2 == 1 {
        lo = n / 2;
        hi = lo;
        cells.push(Cell::new(lo, lo));
    } else {
        lo = n / 2 - 1;
        hi = n / 2;
        // Centre block, wound clockwise; the first full ring then flips.
        cells.extend(ring_cells(lo, hi));
    }

    let mut clockwise: bool = false;
    while lo > 0 {
        let last: Cell = cells[cells.len() - 1];
        let entry: Cell = outward_neighbour(last, lo, hi);
        lo -= 1;
        hi += 1;

        let ring: Vec<Cell> = ring_cells(lo, hi);
        let len: usize = ring.len();
        let start: usize = ring_position(entry, lo, hi);
        for t in 0..len {
            let idx: usize = if clockwise {
                (start + t) % len
            } else {
                (start + len - t) % len
            };
            cells.push(ring[idx]);
        }
        clockwise = !clockwise;
    }
    cells
}

/// Concentric rings from the outside in, the winding direction alternating
/// on every ring. Rings are entered at their top-left corner, so the seam
/// runs down the main diagonal.
fn onion(n: usize) -> Vec<Cell> {
    let mut cells: Vec<Cell> = Vec::with_capacity(n * n);
    let mut lo: usize = 0;
    let mut hi: usize = n - 1;
    let mut clockwise: bool = true;

    loop {
        let ring: Vec<Cell> = ring_cells(lo, hi);
        let len: usize = ring.len();
        for t in 0..len {
            let idx: usize = if clockwise { t } else { (len - t) % len };
            cells.push(ring[idx]);
        }
        if hi - lo <= 1 {
            break;
        }
        lo += 1;
        hi -= 1;
        clockwise = !clockwise;
    }
    cells
}

/// Full perimeter ring, then a row serpentine over the interior.
fn labyrinth(n: usize) -> Vec<Cell> {
    // The clockwise border walk ends on (1, 0), right next to the interior.
    let mut cells: Vec<Cell> = ring_cells(0, n - 1);
    for row in 1..n - 1 {
        if row % 2 == 1 {
            for col in 1..n - 1 {
                cells.push(Cell::new(row, col));
            }
        } else {
            for col in (1..n - 1).rev() {
                cells.push(Cell::new(row, col));
            }
        }
    }
    cells
}

/// L-shaped shells growing from the top-left corner.
///
/// Shell `k` covers the cells whose larger coordinate is `k`. Odd shells
/// run down their column arm and back along the row arm; even shells do the
/// opposite, so consecutive shells chain at the board edges.
fn staircase(n: usize) -> Vec<Cell> {
    let mut cells: Vec<Cell> = Vec::with_capacity(n * n);
    cells.push(Cell::new(0, 0));
    for k in 1..n {
        if k % 2 == 1 {
            for row in 0..=k {
                cells.push(Cell::new(row, k));
            }
            for col in (0..k).rev() {
                cells.push(Cell::new(k, col));
            }
        } else {
            for col in 0..=k {
                cells.push(Cell::new(k, col));
            }
            for row in (0..k).rev() {
                cells.push(Cell::new(row, k));
            }
        }
    }
    cells
}

/// Two-column switchback panels serpentining across the grid.
///
/// Odd board heights chain panels corner to corner with a plain row
/// serpentine. On even heights a corner-to-opposite-corner traversal of a
/// two-column panel does not exist, so each panel ends with a two-row hook
/// and hands over to its neighbour one row early. Odd widths leave a single
/// trailing column, which is walked straight through.
fn panels(n: usize) -> Vec<Cell> {
    let mut cells: Vec<Cell> = Vec::with_capacity(n * n);
    let full: usize = n / 2;

    for p in 0..full {
        let cl: usize = 2 * p;
        let cr: usize = cl + 1;
        let down: bool = p % 2 == 0;

        if n % 2 == 1 {
            if down {
                for row in 0..n {
                    if row % 2 == 0 {
                        cells.push(Cell::new(row, cl));
                        cells.push(Cell::new(row, cr));
                    } else {
                        cells.push(Cell::new(row, cr));
                        cells.push(Cell::new(row, cl));
                    }
                }
            } else {
                for row in (0..n).rev() {
                    if (n - 1 - row) % 2 == 0 {
                        cells.push(Cell::new(row, cl));
                        cells.push(Cell::new(row, cr));
                    } else {
                        cells.push(Cell::new(row, cr));
                        cells.push(Cell::new(row, cl));
                    }
                }
            }
        } else if down {
            for row in 0..=n - 3 {
                if row % 2 == 0 {
                    cells.push(Cell::new(row, cl));
                    cells.push(Cell::new(row, cr));
                } else {
                    cells.push(Cell::new(row, cr));
                    cells.push(Cell::new(row, cl));
                }
            }
            cells.push(Cell::new(n - 2, cl));
            cells.push(Cell::new(n - 1, cl));
            cells.push(Cell::new(n - 1, cr));
            cells.push(Cell::new(n - 2, cr));
        } else {
            cells.push(Cell::new(n - 2, cl));
            cells.push(Cell::new(n - 1, cl));
            cells.push(Cell::new(n - 1, cr));
            cells.push(Cell::new(n - 2, cr));
            for row in (0..=n - 3).rev() {
                if row % 2 == 1 {
                    cells.push(Cell::new(row, cr));
                    cells.push(Cell::new(row, cl));
                } else {
                    cells.push(Cell::new(row, cl));
                    cells.push(Cell::new(row, cr));
                }
            }
        }
    }

    if n % 2 == 1 {
        let col: usize = n - 1;
        if full % 2 == 1 {
            for row in (0..n).rev() {
                cells.push(Cell::new(row, col));
            }
        } else {
            for row in 0..n {
                cells.push(Cell::new(row, col));
            }
        }
    }
    cells
}

/// Generalized Hilbert curve.
///
/// Recursive subdivision valid for any rectangle, not just power-of-two
/// squares. `(ax, ay)` is the major axis of the current block, `(bx, by)`
/// the minor one; halving follows floor semantics so that odd splits keep
/// the sub-curves connectable.
fn fractal(n: usize) -> Vec<Cell> {
    let mut cells: Vec<Cell> = Vec::with_capacity(n * n);
    let size: i64 = n as i64;
    gilbert(&mut cells, 0, 0, size, 0, 0, size);
    cells
}

fn gilbert(cells: &mut Vec<Cell>, x: i64, y: i64, ax: i64, ay: i64, bx: i64, by: i64) {
    let w: i64 = ax.abs() + ay.abs();
    let h: i64 = bx.abs() + by.abs();
    let (dax, day): (i64, i64) = (ax.signum(), ay.signum());
    let (dbx, dby): (i64, i64) = (bx.signum(), by.signum());

    if h == 1 {
        let (mut cx, mut cy): (i64, i64) = (x, y);
        for _ in 0..w {
            cells.push(Cell::new(cy as usize, cx as usize));
            cx += dax;
            cy += day;
        }
        return;
    }
    if w == 1 {
        let (mut cx, mut cy): (i64, i64) = (x, y);
        for _ in 0..h {
            cells.push(Cell::new(cy as usize, cx as usize));
            cx += dbx;
            cy += dby;
        }
        return;
    }

    let (mut ax2, mut ay2): (i64, i64) = (ax.div_euclid(2), ay.div_euclid(2));
    let (mut bx2, mut by2): (i64, i64) = (bx.div_euclid(2), by.div_euclid(2));

    if 2 * w > 3 * h {
        let w2: i64 = ax2.abs() + ay2.abs();
        if w2 % 2 != 0 && w > 2 {
            ax2 += dax;
            ay2 += day;
        }
        gilbert(cells, x, y, ax2, ay2, bx, by);
        gilbert(cells, x + ax2, y + ay2, ax - ax2, ay - ay2, bx, by);
    } else {
        let h2: i64 = bx2.abs() + by2.abs();
        if h2 % 2 != 0 && h > 2 {
            bx2 += dbx;
            by2 += dby;
        }
        gilbert(cells, x, y, bx2, by2, ax2, ay2);
        gilbert(cells, x + bx2, y + by2, ax, ay, bx - bx2, by - by2);
        gilbert(
            cells,
            x + (ax - dax) + (bx2 - dbx),
            y + (ay - day) + (by2 - dby),
            -bx2,
            -by2,
            -(ax - ax2),
            -(ay - ay2),
        );
    }
}
