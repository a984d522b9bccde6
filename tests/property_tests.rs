//! Property-based tests for the game core.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated boards and click sequences.

use proptest::prelude::*;
use tictac::core::{evaluate, placed_at, whose_turn, Board, Cell, Outcome, Symbol, WINNING_LINES};
use tictac::engine::GameEngine;
use tictac::history::{GameHistory, SortOrder};
use tictac::invariants::validate_history;

prop_compose! {
    fn arbitrary_cell()(variant in 0..3u8) -> Cell {
        match variant {
            0 => Cell::Empty,
            1 => Cell::Occupied(Symbol::X),
            _ => Cell::Occupied(Symbol::O),
        }
    }
}

prop_compose! {
    fn arbitrary_board()(cells in prop::array::uniform9(arbitrary_cell())) -> Board {
        cells
            .iter()
            .enumerate()
            .fold(Board::new(), |board, (i, cell)| match cell.symbol() {
                Some(symbol) => board.with_symbol(i, symbol),
                None => board,
            })
    }
}

/// Click sequences, including occupied and off-board cells.
fn clicks() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0..10usize, 0..24)
}

fn engine_after(clicks: &[usize]) -> GameEngine {
    let mut engine = GameEngine::new();
    for &cell in clicks {
        engine.submit_move(cell);
    }
    engine
}

fn has_complete_line(board: &Board) -> bool {
    let cells = board.cells();
    WINNING_LINES.iter().any(|&[a, b, c]| {
        !cells[a].is_empty() && cells[a] == cells[b] && cells[a] == cells[c]
    })
}

proptest! {
    #[test]
    fn evaluate_is_deterministic(board in arbitrary_board()) {
        prop_assert_eq!(evaluate(&board), evaluate(&board));
    }

    #[test]
    fn complete_line_is_never_a_draw(board in arbitrary_board()) {
        let outcome = evaluate(&board);
        if has_complete_line(&board) {
            prop_assert!(matches!(outcome, Outcome::Winner { .. }), "expected Winner, got {:?}", outcome);
        } else if board.is_full() {
            prop_assert_eq!(outcome, Outcome::Draw);
        } else {
            prop_assert_eq!(outcome, Outcome::InProgress);
        }
    }

    #[test]
    fn winning_line_holds_winner(board in arbitrary_board()) {
        if let Outcome::Winner { symbol, line } = evaluate(&board) {
            for index in line {
                prop_assert_eq!(board.get(index), Some(Cell::Occupied(symbol)));
            }
        }
    }

    #[test]
    fn symbols_alternate_starting_with_x(clicks in clicks()) {
        let engine = engine_after(&clicks);
        let history = engine.history();

        prop_assert!(validate_history(history).is_success());

        for (k, pair) in history.snapshots().windows(2).enumerate() {
            let index = pair[1].location().unwrap().index();
            prop_assert!(pair[0].board().is_empty(index));
            prop_assert_eq!(
                pair[1].board().get(index).and_then(Cell::symbol),
                Some(whose_turn(k))
            );
            prop_assert_eq!(placed_at(k + 1), Some(whose_turn(k)));
        }
    }

    #[test]
    fn rejected_move_leaves_history_identical(clicks in clicks(), cell in 0..10usize) {
        let mut engine = engine_after(&clicks);
        let before = engine.history().clone();

        if !engine.submit_move(cell).is_applied() {
            prop_assert_eq!(engine.history(), &before);
        }
    }

    #[test]
    fn move_from_past_truncates(clicks in clicks(), back in 0..9usize) {
        let mut engine = engine_after(&clicks);
        let len = engine.history().len();
        prop_assume!(len >= 2);

        let target = back % (len - 1);
        engine.jump_to(target).unwrap();

        let open_cell = (0..9).find(|&i| engine.board().is_empty(i));
        prop_assume!(!engine.outcome().is_terminal() && open_cell.is_some());

        prop_assert!(engine.submit_move(open_cell.unwrap()).is_applied());
        prop_assert_eq!(engine.history().len(), target + 2);
        prop_assert_eq!(engine.cursor(), target + 1);
    }

    #[test]
    fn jump_never_changes_length(clicks in clicks(), target in 0..10usize) {
        let mut engine = engine_after(&clicks);
        let before = engine.history().snapshots().to_vec();

        let _ = engine.jump_to(target);

        prop_assert_eq!(engine.history().snapshots(), &before[..]);
    }

    #[test]
    fn reset_always_returns_to_start(clicks in clicks(), target in 0..10usize) {
        let mut engine = engine_after(&clicks);
        let _ = engine.jump_to(target);

        engine.reset();

        prop_assert_eq!(engine.history().len(), 1);
        prop_assert_eq!(engine.cursor(), 0);
        prop_assert_eq!(engine.outcome(), Outcome::InProgress);
        prop_assert_eq!(engine.history(), &GameHistory::new());
    }

    #[test]
    fn listing_orders_are_reverses(clicks in clicks()) {
        let engine = engine_after(&clicks);

        let ascending: Vec<usize> =
            engine.snapshot_list(SortOrder::Ascending).map(|(i, _)| i).collect();
        let mut descending: Vec<usize> =
            engine.snapshot_list(SortOrder::Descending).map(|(i, _)| i).collect();
        descending.reverse();

        prop_assert_eq!(ascending, descending);
    }

    #[test]
    fn history_roundtrip_serialization(clicks in clicks()) {
        let history = engine_after(&clicks).history().clone();

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: GameHistory = serde_json::from_str(&json).unwrap();

        prop_assert_eq!(history, deserialized);
    }
}
