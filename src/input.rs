/*
input.rs

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

//! Coalesce raw pointer samples into discrete cell-entry events.
//!
//! The render layer samples the pointer at sub-move granularity while a draw
//! gesture is active, and maps each sample to the board cell under it. The
//! game only consumes discrete cell entries, so this buffer sits between the
//! two: it drops samples while no gesture is active, and collapses the runs
//! of samples that stay within one cell into a single event. It holds no
//! game state.

use log::trace;

use crate::cell::Cell;

/// Lossy buffer turning pointer samples into cell-entry events.
#[derive(Debug, Default)]
pub struct GestureBuffer {
    /// Whether a draw gesture is active.
    active: bool,

    /// Cell of the most recent sample of the gesture.
    last_cell: Option<Cell>,

    /// Number of raw samples seen during the gesture.
    samples: usize,
}

impl GestureBuffer {
    /// Create a [`GestureBuffer`] object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a draw gesture.
    pub fn begin_draw(&mut self) {
        self.active = true;
        self.last_cell = None;
        self.samples = 0;
    }

    /// End the draw gesture.
    pub fn end_draw(&mut self) {
        trace!("gesture ended after {} samples", self.samples);
        self.active = false;
        self.last_cell = None;
    }

    /// Whether a draw gesture is active.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Feed one pointer sample, already mapped to its board cell.
    ///
    /// Return the cell when the sample enters a new cell during an active
    /// gesture, and `None` for inactive or duplicate samples.
    pub fn observe(&mut self, cell: Cell) -> Option<Cell> {
        if !self.active {
            return None;
        }
        self.samples += 1;
        if self.last_cell == Some(cell) {
            return None;
        }
        self.last_cell = Some(cell);
        trace!("gesture entered {cell}");
        Some(cell)
    }
}
