/*
catalog.rs

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

//! Stage configurations and the built-in stage catalog.
//!
//! A [`StageConfig`] names everything a stage needs: the grid size, the
//! pattern family used to generate its solution path, and its position in
//! the progression. Configurations are immutable; they are created once at
//! catalog build time and never mutated.
//!
//! The [`StageCatalog`] is the ordered list of configurations that the
//! application plays through. External callers are free to build their own
//! configurations; the catalog only provides the default progression.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::FromRepr;

/// Smallest playable grid.
pub const MIN_GRID_SIZE: usize = 3;

/// Largest playable grid.
pub const MAX_GRID_SIZE: usize = 10;

/// Number of pattern families.
pub const PATTERN_COUNT: usize = 12;

/// Shape families for the generated solution paths.
///
/// Every family is a deterministic, closed-form construction; the same grid
/// size always yields the same path. See [`crate::generator::patterns`] for
/// the constructions.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    ValueEnum,
    FromRepr,
    Default,
)]
#[repr(usize)]
pub enum PatternType {
    /// Row serpentine from the top-left corner.
    #[default]
    Snake,

    /// Column serpentine from the top-left corner.
    Zigzag,

    /// Clockwise spiral winding inwards.
    Spiral,

    /// Spiral unwinding outwards from the centre.
    Vortex,

    /// Concentric rings from the centre out, winding direction alternating
    /// per ring.
    Diamond,

    /// Concentric rings from the outside in, winding direction alternating
    /// per ring.
    Onion,

    /// Full perimeter ring, then a row serpentine over the interior.
    Labyrinth,

    /// L-shaped shells growing from the top-left corner.
    Staircase,

    /// L-shaped shells growing from the bottom-right corner.
    Cascade,

    /// Two-column switchback panels serpentining across the grid.
    Maze,

    /// Two-row switchback bands serpentining down the grid.
    Weave,

    /// Generalized Hilbert curve.
    Fractal,
}

impl fmt::Display for PatternType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name: &str = match self {
            PatternType::Snake => "snake",
            PatternType::Zigzag => "zigzag",
            PatternType::Spiral => "spiral",
            PatternType::Vortex => "vortex",
            PatternType::Diamond => "diamond",
            PatternType::Onion => "onion",
            PatternType::Labyrinth => "labyrinth",
            PatternType::Staircase => "staircase",
            PatternType::Cascade => "cascade",
            PatternType::Maze => "maze",
            PatternType::Weave => "weave",
            PatternType::Fractal => "fractal",
        };
        write!(f, "{name}")
    }
}

impl PatternType {
    /// Return every pattern family, in declaration order.
    pub fn all() -> Vec<PatternType> {
        (0..PATTERN_COUNT)
            .filter_map(PatternType::from_repr)
            .collect()
    }
}

/// Configuration of one stage.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageConfig {
    /// Side length of the square board.
    pub grid_size: usize,

    /// Pattern family used to generate the solution path.
    pub pattern: PatternType,

    /// Position of the stage in the progression, starting at 1.
    pub order: usize,
}

impl StageConfig {
    /// Create a [`StageConfig`] object.
    pub fn new(grid_size: usize, pattern: PatternType, order: usize) -> Self {
        Self {
            grid_size,
            pattern,
            order,
        }
    }

    /// Number of numbered dots placed on the stage.
    ///
    /// One dot per five cells, but always at least the start and end dots,
    /// and never more than ten so that the numbers stay readable.
    pub fn dot_count(&self) -> usize {
        (self.grid_size * self.grid_size / 5).clamp(2, 10)
    }
}

/// Ordered, immutable list of stage configurations.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StageCatalog {
    /// The stages, in play order.
    stages: Vec<StageConfig>,
}

impl Default for StageCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl StageCatalog {
    /// Build the default progression.
    ///
    /// Every pattern family appears twice: a first lap over small boards and
    /// a second lap over large ones, with the grid size growing from the
    /// smallest to the largest supported board across the catalog.
    pub fn builtin() -> Self {
        let span: usize = MAX_GRID_SIZE - MIN_GRID_SIZE + 1;
        let count: usize = 2 * PATTERN_COUNT;
        let mut stages: Vec<StageConfig> = Vec::with_capacity(count);

        for i in 0..count {
            let pattern: PatternType =
                PatternType::from_repr(i % PATTERN_COUNT).unwrap_or_default();
            let grid_size: usize = MIN_GRID_SIZE + i * span / count;
            stages.push(StageConfig::new(grid_size, pattern, i + 1));
        }
        Self { stages }
    }

    /// Return the number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Whether the catalog has no stages.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Return the stage at the given zero-based position.
    pub fn get(&self, index: usize) -> Option<&StageConfig> {
        self.stages.get(index)
    }

    /// Iterate over the stages in play order.
    pub fn iter(&self) -> std::slice::Iter<'_, StageConfig> {
        self.stages.iter()
    }
}
