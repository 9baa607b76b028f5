/*
gameplay.rs

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

use std::time::Duration;

use gridstroke::catalog::{MAX_GRID_SIZE, MIN_GRID_SIZE, PatternType, StageConfig};
use gridstroke::cell::Cell;
use gridstroke::game::{Game, GameStatus, MoveRejection};
use gridstroke::input::GestureBuffer;
use gridstroke::scores::ScoreBoards;

fn stage(pattern: PatternType, grid_size: usize) -> StageConfig {
    StageConfig::new(grid_size, pattern, 1)
}

fn started(pattern: PatternType, grid_size: usize) -> Game {
    Game::start_stage(&stage(pattern, grid_size))
        .unwrap_or_else(|e| panic!("stage setup failed for {pattern} at {grid_size}: {e}"))
}

/// Feed the stage's own solution through the game, asserting that no move
/// is refused.
fn replay_solution(game: &mut Game) {
    let solution: Vec<Cell> = game.solution().cells().to_vec();
    for cell in solution {
        game.propose_move(cell)
            .unwrap_or_else(|rejection| panic!("solution cell {cell} refused: {rejection}"));
    }
}

#[test]
fn replaying_any_solution_wins_the_stage() {
    for pattern in PatternType::all() {
        for grid_size in MIN_GRID_SIZE..=MAX_GRID_SIZE {
            let mut game = started(pattern, grid_size);
            replay_solution(&mut game);
            assert_eq!(
                game.status(),
                GameStatus::Won,
                "{pattern} at {grid_size}: replay did not win"
            );
            let event = game.won_event().expect("missing won event");
            assert_eq!(event.move_count, grid_size * grid_size);
        }
    }
}

#[test]
fn snake_3x3_scenario() {
    let mut game = started(PatternType::Snake, 3);

    let dots = game.dots();
    assert_eq!(dots.len(), 2);
    assert_eq!(dots[0].cell.key(), "0,0");
    assert_eq!(dots[1].cell.key(), "2,2");

    // The stroke opens on dot 1; jumping to 1,1 is two steps away.
    game.propose_move(Cell::new(0, 0)).expect("dot 1 refused");
    assert_eq!(
        game.propose_move(Cell::new(1, 1)),
        Err(MoveRejection::NotAdjacent)
    );

    // The remainder of the solution still wins the stage.
    let rest: Vec<Cell> = game.solution().cells()[1..].to_vec();
    for cell in rest {
        game.propose_move(cell).expect("solution cell refused");
    }
    assert_eq!(game.status(), GameStatus::Won);
    assert_eq!(game.won_event().expect("missing won event").move_count, 9);
}

#[test]
fn non_adjacent_moves_leave_the_state_untouched() {
    let mut game = started(PatternType::Snake, 4);
    game.propose_move(Cell::new(0, 0)).expect("dot 1 refused");
    let before = game.snapshot();

    assert_eq!(
        game.propose_move(Cell::new(2, 2)),
        Err(MoveRejection::NotAdjacent)
    );
    // Outside the board counts as not adjacent as well.
    assert_eq!(
        game.propose_move(Cell::new(0, 4)),
        Err(MoveRejection::NotAdjacent)
    );
    assert_eq!(game.snapshot(), before);
}

#[test]
fn revisited_cells_are_rejected() {
    let mut game = started(PatternType::Snake, 4);
    game.propose_move(Cell::new(0, 0)).expect("dot 1 refused");
    game.propose_move(Cell::new(0, 1)).expect("move refused");
    let before = game.snapshot();

    assert_eq!(
        game.propose_move(Cell::new(0, 0)),
        Err(MoveRejection::AlreadyVisited)
    );
    assert_eq!(game.snapshot(), before);
}

#[test]
fn out_of_order_dots_are_rejected_with_their_indices() {
    // Snake on 5x5 places five dots; dot 3 sits on 2,2 while dot 2 sits on
    // 1,3. Sneaking along the second row reaches dot 3 first.
    let mut game = started(PatternType::Snake, 5);
    assert_eq!(game.dots().len(), 5);
    assert_eq!(game.dots()[1].cell.key(), "1,3");
    assert_eq!(game.dots()[2].cell.key(), "2,2");

    for cell in [
        Cell::new(0, 0),
        Cell::new(1, 0),
        Cell::new(1, 1),
        Cell::new(1, 2),
    ] {
        game.propose_move(cell).expect("move refused");
    }
    let before = game.snapshot();
    assert_eq!(
        game.propose_move(Cell::new(2, 2)),
        Err(MoveRejection::DotOrderViolation {
            expected: 2,
            found: Some(3),
        })
    );
    assert_eq!(game.snapshot(), before);
}

#[test]
fn the_stroke_must_open_on_dot_one() {
    let mut game = started(PatternType::Snake, 3);
    assert_eq!(
        game.propose_move(Cell::new(1, 1)),
        Err(MoveRejection::DotOrderViolation {
            expected: 1,
            found: None,
        })
    );
    // Opening on the final dot is refused with its index.
    assert_eq!(
        game.propose_move(Cell::new(2, 2)),
        Err(MoveRejection::DotOrderViolation {
            expected: 1,
            found: Some(2),
        })
    );
    assert_eq!(game.status(), GameStatus::Idle);
}

#[test]
fn undo_is_a_no_op_on_an_empty_stroke() {
    let mut game = started(PatternType::Zigzag, 4);
    let before = game.snapshot();
    assert_eq!(game.undo_last_move(), before);
    assert_eq!(game.status(), GameStatus::Idle);
}

#[test]
fn undo_removes_one_cell_and_unlocks_the_dot() {
    let mut game = started(PatternType::Snake, 3);
    game.propose_move(Cell::new(0, 0)).expect("dot 1 refused");
    game.propose_move(Cell::new(0, 1)).expect("move refused");

    let snapshot = game.undo_last_move();
    assert_eq!(snapshot.path, vec![Cell::new(0, 0)]);
    assert_eq!(snapshot.status, GameStatus::Playing);
    assert_eq!(snapshot.locked_dots, vec![1]);

    // Undoing the opening cell unlocks dot 1 and goes back to idle.
    let snapshot = game.undo_last_move();
    assert!(snapshot.path.is_empty());
    assert_eq!(snapshot.status, GameStatus::Idle);
    assert!(snapshot.locked_dots.is_empty());
    assert_eq!(snapshot.next_dot, 1);

    // The stage is still winnable after undoing everything.
    replay_solution(&mut game);
    assert_eq!(game.status(), GameStatus::Won);
}

#[test]
fn undo_is_refused_once_the_stage_is_won() {
    let mut game = started(PatternType::Spiral, 3);
    replay_solution(&mut game);
    let before = game.snapshot();

    let snapshot = game.undo_last_move();
    assert_eq!(snapshot, before);
    assert_eq!(snapshot.status, GameStatus::Won);
}

#[test]
fn undo_does_not_decrement_the_move_counter() {
    let mut game = started(PatternType::Snake, 3);
    game.propose_move(Cell::new(0, 0)).expect("dot 1 refused");
    game.propose_move(Cell::new(0, 1)).expect("move refused");
    let snapshot = game.undo_last_move();
    assert_eq!(snapshot.move_count, 2);
}

#[test]
fn reset_then_replay_matches_a_fresh_start() {
    let mut game = started(PatternType::Vortex, 4);
    game.propose_move(game.dots()[0].cell).expect("dot 1 refused");
    game.tick(Duration::from_secs(3));
    let solution_before: Vec<Cell> = game.solution().cells().to_vec();

    let snapshot = game.reset_stage();
    assert_eq!(snapshot.status, GameStatus::Idle);
    assert!(snapshot.path.is_empty());
    assert_eq!(snapshot.move_count, 0);
    assert_eq!(snapshot.stage_time, Duration::ZERO);
    // The global timer survives the reset.
    assert_eq!(snapshot.global_time, Duration::from_secs(3));
    // The solution was not regenerated.
    assert_eq!(game.solution().cells(), solution_before);

    replay_solution(&mut game);
    let reset_won = game.snapshot();

    let mut fresh = started(PatternType::Vortex, 4);
    replay_solution(&mut fresh);
    let fresh_won = fresh.snapshot();

    assert_eq!(reset_won.status, fresh_won.status);
    assert_eq!(reset_won.path, fresh_won.path);
    assert_eq!(reset_won.move_count, fresh_won.move_count);
    assert_eq!(reset_won.locked_dots, fresh_won.locked_dots);
    assert_eq!(reset_won.stage_time, fresh_won.stage_time);
}

#[test]
fn timers_only_run_while_playing() {
    let mut game = started(PatternType::Maze, 4);

    game.tick(Duration::from_secs(5));
    assert_eq!(game.snapshot().stage_time, Duration::ZERO);

    game.propose_move(game.dots()[0].cell).expect("dot 1 refused");
    game.tick(Duration::from_secs(2));
    game.tick(Duration::from_secs(1));
    let snapshot = game.snapshot();
    assert_eq!(snapshot.stage_time, Duration::from_secs(3));
    assert_eq!(snapshot.global_time, Duration::from_secs(3));
}

#[test]
fn ticks_after_the_win_are_ignored() {
    let mut game = started(PatternType::Weave, 3);
    replay_solution(&mut game);
    let before = game.snapshot();
    game.tick(Duration::from_secs(30));
    assert_eq!(game.snapshot(), before);
}

#[test]
fn advance_stage_regenerates_and_keeps_the_global_timer() {
    let mut game = started(PatternType::Snake, 3);
    game.propose_move(Cell::new(0, 0)).expect("dot 1 refused");
    game.tick(Duration::from_secs(7));

    let next = StageConfig::new(4, PatternType::Zigzag, 2);
    let snapshot = game.advance_stage(&next).expect("advance failed");
    assert_eq!(snapshot.status, GameStatus::Idle);
    assert!(snapshot.path.is_empty());
    assert_eq!(snapshot.stage_time, Duration::ZERO);
    assert_eq!(snapshot.global_time, Duration::from_secs(7));
    assert_eq!(game.config(), &next);
    assert_eq!(game.solution().len(), 16);

    replay_solution(&mut game);
    let event = game.won_event().expect("missing won event");
    assert_eq!(event.stage_order, 2);
    assert_eq!(event.global_time, Duration::from_secs(7));
}

#[test]
fn advance_stage_failure_keeps_the_previous_stage() {
    let mut game = started(PatternType::Snake, 3);
    game.propose_move(Cell::new(0, 0)).expect("dot 1 refused");

    let bad = StageConfig::new(42, PatternType::Spiral, 2);
    assert!(game.advance_stage(&bad).is_err());
    assert_eq!(game.config().grid_size, 3);
    assert_eq!(game.snapshot().path, vec![Cell::new(0, 0)]);
}

#[test]
fn won_event_carries_the_final_counters() {
    let mut game = started(PatternType::Staircase, 3);
    let solution: Vec<Cell> = game.solution().cells().to_vec();
    for cell in solution {
        game.propose_move(cell).expect("solution cell refused");
        game.tick(Duration::from_secs(1));
    }
    // The final tick lands after the win and is ignored.
    let event = game.won_event().expect("missing won event");
    assert_eq!(event.move_count, 9);
    assert_eq!(event.stage_time, Duration::from_secs(8));
    assert_eq!(event.global_time, Duration::from_secs(8));
}

#[test]
fn full_coverage_without_the_final_dot_is_not_a_win() {
    // On the 3x3 zigzag the final dot sits on 2,2. Walk a different
    // Hamiltonian path that covers the board but ends on 0,2 instead:
    // no win, and the machine stays in play.
    let mut game = started(PatternType::Zigzag, 3);
    assert_eq!(game.dots()[1].cell.key(), "2,2");
    for cell in [
        Cell::new(0, 0),
        Cell::new(1, 0),
        Cell::new(2, 0),
        Cell::new(2, 1),
        Cell::new(2, 2),
        Cell::new(1, 2),
        Cell::new(1, 1),
        Cell::new(0, 1),
        Cell::new(0, 2),
    ] {
        game.propose_move(cell).expect("move refused");
    }
    assert_eq!(game.snapshot().path.len(), 9);
    assert_eq!(game.status(), GameStatus::Playing);
    assert!(game.won_event().is_none());
}

#[test]
fn gesture_buffer_coalesces_samples() {
    let mut buffer = GestureBuffer::new();

    // Samples outside a gesture are dropped.
    assert_eq!(buffer.observe(Cell::new(0, 0)), None);

    buffer.begin_draw();
    assert!(buffer.is_active());
    assert_eq!(buffer.observe(Cell::new(0, 0)), Some(Cell::new(0, 0)));
    // The pointer wiggles within the same cell.
    assert_eq!(buffer.observe(Cell::new(0, 0)), None);
    assert_eq!(buffer.observe(Cell::new(0, 0)), None);
    assert_eq!(buffer.observe(Cell::new(0, 1)), Some(Cell::new(0, 1)));
    // Re-entering the previous cell is a new event again.
    assert_eq!(buffer.observe(Cell::new(0, 0)), Some(Cell::new(0, 0)));

    buffer.end_draw();
    assert!(!buffer.is_active());
    assert_eq!(buffer.observe(Cell::new(0, 2)), None);

    // A new gesture starts from a clean slate.
    buffer.begin_draw();
    assert_eq!(buffer.observe(Cell::new(0, 0)), Some(Cell::new(0, 0)));
}

#[test]
fn score_boards_rank_completions_by_time() {
    let mut boards = ScoreBoards::new();
    let config = stage(PatternType::Snake, 5);
    assert!(boards.is_empty());
    assert!(boards.get_scores(&config).is_none());

    let mut game = started(PatternType::Snake, 5);
    let solution: Vec<Cell> = game.solution().cells().to_vec();
    for cell in solution {
        game.tick(Duration::from_secs(1));
        game.propose_move(cell).expect("solution cell refused");
    }
    let event = game.won_event().expect("missing won event");

    assert_eq!(boards.record_win(&config, &event), Some(1));

    // A slower completion ranks below, a faster one on top.
    let mut slow = event;
    slow.stage_time = event.stage_time + Duration::from_secs(60);
    assert_eq!(boards.record_win(&config, &slow), Some(2));
    let mut fast = event;
    fast.stage_time = Duration::from_secs(1);
    assert_eq!(boards.record_win(&config, &fast), Some(1));

    let scores = boards.get_scores(&config).expect("missing board");
    assert_eq!(scores.len(), 3);
    assert!(scores[0].time <= scores[1].time && scores[1].time <= scores[2].time);
    assert!(!boards.is_empty());
}

#[test]
fn score_boards_are_capped() {
    let mut boards = ScoreBoards::new();
    let config = stage(PatternType::Diamond, 6);
    let mut game = started(PatternType::Diamond, 6);
    replay_solution(&mut game);
    let event = game.won_event().expect("missing won event");

    for i in 0..15 {
        let mut entry = event;
        entry.stage_time = Duration::from_secs(100 + i);
        boards.record_win(&config, &entry);
    }
    let scores = boards.get_scores(&config).expect("missing board");
    assert_eq!(scores.len(), 10);

    // An 11th-or-worse time no longer makes the board.
    let mut slow = event;
    slow.stage_time = Duration::from_secs(1000);
    assert_eq!(boards.record_win(&config, &slow), None);
}
