/*
lib.rs

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

//! Single-stroke grid puzzle core.
//!
//! The player draws one continuous stroke that covers every cell of a
//! square board exactly once, passing through numbered dots in ascending
//! order, one orthogonal step at a time.
//!
//! A stage is set up in three steps:
//!
//! * [`generator::patterns::generate`] builds the solution path for the
//!   stage's [`catalog::PatternType`]: a deterministic, closed-form
//!   construction covering the whole board, self-checked with
//!   [`generator::validate`] before it is accepted for play.
//!
//! * [`generator::dots::place_dots`] derives the numbered dots from the
//!   solution. The last dot always sits on the solution's final cell.
//!
//! * [`game::Game`] consumes the stage and drives the playthrough: it
//!   enforces the move rules (adjacency, no revisit, dot order), tracks
//!   undo, timers and the move counter, and emits a [`game::WonEvent`] when
//!   the stroke completes the board.
//!
//! The render and input layers stay outside the core: they feed discrete
//! cell entries through [`input::GestureBuffer`] and consume
//! [`game::Snapshot`] values. [`scores::ScoreBoards`] collects the per-stage
//! top scores from the won events.

pub mod catalog;
pub mod cell;
pub mod cli_options;
pub mod game;
pub mod generator;
pub mod input;
pub mod scores;
