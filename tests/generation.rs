/*
generation.rs

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

use gridstroke::catalog::{MAX_GRID_SIZE, MIN_GRID_SIZE, PatternType, StageCatalog};
use gridstroke::cell::Cell;
use gridstroke::generator::dots::{self, Dot, DotPlacementError};
use gridstroke::generator::path::TracePath;
use gridstroke::generator::patterns::{self, PatternGenerationError};
use gridstroke::generator::validate;

fn generated(pattern: PatternType, grid_size: usize) -> TracePath {
    patterns::generate(grid_size, pattern)
        .unwrap_or_else(|e| panic!("generation failed for {pattern} at {grid_size}: {e}"))
}

#[test]
fn every_pattern_covers_every_supported_board() {
    for pattern in PatternType::all() {
        for grid_size in MIN_GRID_SIZE..=MAX_GRID_SIZE {
            let path = generated(pattern, grid_size);
            assert_eq!(
                path.len(),
                grid_size * grid_size,
                "{pattern} at {grid_size}: wrong path length"
            );
            assert!(
                validate::has_full_coverage(path.cells(), grid_size),
                "{pattern} at {grid_size}: incomplete coverage"
            );
            assert!(
                validate::validate_adjacency_chain(path.cells()),
                "{pattern} at {grid_size}: broken adjacency chain"
            );
        }
    }
}

#[test]
fn generation_is_deterministic() {
    for pattern in PatternType::all() {
        for grid_size in MIN_GRID_SIZE..=MAX_GRID_SIZE {
            assert_eq!(
                generated(pattern, grid_size),
                generated(pattern, grid_size),
                "{pattern} at {grid_size}: two runs disagree"
            );
        }
    }
}

#[test]
fn no_pattern_degenerates_into_the_snake() {
    for grid_size in MIN_GRID_SIZE..=MAX_GRID_SIZE {
        let snake = generated(PatternType::Snake, grid_size);
        for pattern in PatternType::all() {
            if pattern == PatternType::Snake {
                continue;
            }
            assert_ne!(
                generated(pattern, grid_size),
                snake,
                "{pattern} degenerates into the snake at {grid_size}"
            );
        }
    }
}

#[test]
fn patterns_are_pairwise_distinct_on_large_boards() {
    for grid_size in [6, 7] {
        let paths: Vec<(PatternType, TracePath)> = PatternType::all()
            .into_iter()
            .map(|p| (p, generated(p, grid_size)))
            .collect();
        for (i, (pattern_a, path_a)) in paths.iter().enumerate() {
            for (pattern_b, path_b) in paths.iter().skip(i + 1) {
                assert_ne!(
                    path_a, path_b,
                    "{pattern_a} and {pattern_b} coincide at {grid_size}"
                );
            }
        }
    }
}

#[test]
fn unsupported_grid_sizes_are_rejected() {
    for grid_size in [0, 1, 2, 11, 64] {
        for pattern in [PatternType::Snake, PatternType::Fractal] {
            assert_eq!(
                patterns::generate(grid_size, pattern),
                Err(PatternGenerationError::UnsupportedGridSize { pattern, grid_size })
            );
        }
    }
}

#[test]
fn snake_3x3_matches_the_reference_sequence() {
    let path = generated(PatternType::Snake, 3);
    let keys: Vec<String> = path.cells().iter().map(Cell::key).collect();
    assert_eq!(
        keys,
        ["0,0", "0,1", "0,2", "1,2", "1,1", "1,0", "2,0", "2,1", "2,2"]
    );
}

#[test]
fn dots_pin_the_path_ends_and_strictly_increase() {
    for pattern in PatternType::all() {
        for grid_size in MIN_GRID_SIZE..=MAX_GRID_SIZE {
            let solution = generated(pattern, grid_size);
            let len = solution.len();
            for dot_count in [2, 3, len / 2, len] {
                if !(2..=len).contains(&dot_count) {
                    continue;
                }
                let placed = dots::place_dots(&solution, dot_count)
                    .unwrap_or_else(|e| panic!("{pattern} at {grid_size}: {e}"));
                assert_eq!(placed.len(), dot_count);
                assert_eq!(placed[0].index, 1);
                assert_eq!(Some(placed[0].cell), solution.first());
                assert_eq!(placed[dot_count - 1].index, dot_count);
                assert_eq!(
                    Some(placed[dot_count - 1].cell),
                    solution.last(),
                    "{pattern} at {grid_size}: dot {dot_count} is not on the last cell"
                );
                for pair in placed.windows(2) {
                    assert!(
                        pair[0].position < pair[1].position,
                        "{pattern} at {grid_size}: dot positions do not increase"
                    );
                    assert_eq!(pair[1].index, pair[0].index + 1);
                }
                assert!(validate::validate_dot_order(solution.cells(), &placed));
            }
        }
    }
}

#[test]
fn dot_placement_is_deterministic() {
    let solution = generated(PatternType::Spiral, 7);
    let first = dots::place_dots(&solution, 6).expect("placement failed");
    let second = dots::place_dots(&solution, 6).expect("placement failed");
    assert_eq!(first, second);
}

#[test]
fn invalid_dot_counts_are_rejected() {
    let solution = generated(PatternType::Snake, 4);
    assert_eq!(
        dots::place_dots(&solution, 0),
        Err(DotPlacementError::TooFewDots(0))
    );
    assert_eq!(
        dots::place_dots(&solution, 1),
        Err(DotPlacementError::TooFewDots(1))
    );
    assert_eq!(
        dots::place_dots(&solution, 17),
        Err(DotPlacementError::TooManyDots {
            requested: 17,
            path_len: 16
        })
    );
}

#[test]
fn segments_share_their_boundary_dots() {
    let solution = generated(PatternType::Labyrinth, 6);
    let placed: Vec<Dot> = dots::place_dots(&solution, 5).expect("placement failed");
    let segments = dots::segments(&solution, &placed);

    assert_eq!(segments.len(), 4);
    for (i, segment) in segments.iter().enumerate() {
        assert_eq!(segment.from_dot, i + 1);
        assert_eq!(segment.to_dot, i + 2);
        assert_eq!(segment.cells.first(), Some(&placed[i].cell));
        assert_eq!(segment.cells.last(), Some(&placed[i + 1].cell));
    }

    // Stitched back together (dropping the shared boundary cells), the
    // segments rebuild the full solution.
    let mut stitched: Vec<Cell> = Vec::new();
    for (i, segment) in segments.iter().enumerate() {
        let skip = usize::from(i > 0);
        stitched.extend(&segment.cells[skip..]);
    }
    assert_eq!(stitched, solution.cells());
}

#[test]
fn adjacency_checks_match_manhattan_distance() {
    let centre = Cell::new(2, 2);
    assert!(validate::is_adjacent(centre, Cell::new(1, 2)));
    assert!(validate::is_adjacent(centre, Cell::new(2, 3)));
    assert!(!validate::is_adjacent(centre, Cell::new(1, 1)));
    assert!(!validate::is_adjacent(centre, Cell::new(2, 2)));
    assert!(!validate::is_adjacent(centre, Cell::new(0, 2)));
}

#[test]
fn trivial_chains_are_valid() {
    assert!(validate::validate_adjacency_chain(&[]));
    assert!(validate::validate_adjacency_chain(&[Cell::new(4, 4)]));
    assert!(!validate::validate_adjacency_chain(&[
        Cell::new(0, 0),
        Cell::new(1, 1)
    ]));
}

#[test]
fn dot_order_violations_are_detected() {
    let solution = generated(PatternType::Snake, 3);
    let placed = dots::place_dots(&solution, 3).expect("placement failed");
    // Walking the solution backwards reaches dot 3 before dot 2.
    let mut reversed: Vec<Cell> = solution.cells().to_vec();
    reversed.reverse();
    assert!(!validate::validate_dot_order(&reversed, &placed));
}

#[test]
fn builtin_catalog_stays_within_bounds() {
    let catalog = StageCatalog::builtin();
    assert!(!catalog.is_empty());
    let mut previous_order = 0;
    let mut previous_size = 0;
    for stage in catalog.iter() {
        assert!((MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&stage.grid_size));
        assert!(stage.order > previous_order, "catalog order not ascending");
        assert!(stage.grid_size >= previous_size, "grid sizes shrink");
        assert!((2..=stage.grid_size * stage.grid_size).contains(&stage.dot_count()));
        previous_order = stage.order;
        previous_size = stage.grid_size;
    }
    // Every pattern family appears in the progression.
    for pattern in PatternType::all() {
        assert!(
            catalog.iter().any(|s| s.pattern == pattern),
            "{pattern} missing from the catalog"
        );
    }
}
