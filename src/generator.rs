/*
generator.rs

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

//! Generate stage solutions and numbered dots.
//!
//! A stage solution is a path that visits every cell of the board exactly
//! once, with each step moving to an orthogonally adjacent cell. The path
//! is represented by a [`path::TracePath`] object.
//!
//! Solutions are produced by [`patterns::generate`]: each
//! [`crate::catalog::PatternType`] selects a deterministic, closed-form
//! construction, so the same stage always yields the same shape. The
//! generator self-checks every path (length, coverage, adjacency) with the
//! [`validate`] module before handing it out, and never returns an
//! unvalidated path.
//!
//! The numbered checkpoint dots that the player must visit in ascending
//! order are derived from the solution by [`dots::place_dots`]. The first
//! dot sits on the first cell of the solution, and the last dot always sits
//! on its final cell.

pub mod dots;
pub mod path;
pub mod patterns;
pub mod validate;
