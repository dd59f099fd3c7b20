//! Property tests for board encoding and win detection (pure domain, no DB).

use proptest::prelude::*;

use crate::domain::board::{Board, Mark, BOARD_CELLS};

fn arb_mark() -> impl Strategy<Value = Mark> {
    prop_oneof![Just(Mark::X), Just(Mark::O)]
}

fn arb_cell() -> impl Strategy<Value = Option<Mark>> {
    prop_oneof![Just(None), arb_mark().prop_map(Some)]
}

fn arb_board() -> impl Strategy<Value = Board> {
    proptest::collection::vec(arb_cell(), BOARD_CELLS).prop_map(|cells| {
        let stored: String = cells
            .iter()
            .map(|c| c.map_or('_', Mark::as_char))
            .collect();
        Board::from_stored(&stored).unwrap()
    })
}

proptest! {
    /// Encoding then decoding any board yields the same board.
    #[test]
    fn prop_stored_roundtrip(board in arb_board()) {
        let stored = board.to_stored();
        prop_assert_eq!(stored.len(), BOARD_CELLS);
        prop_assert_eq!(Board::from_stored(&stored).unwrap(), board);
    }

    /// A mark placed on an empty cell is the mark read back from that cell.
    #[test]
    fn prop_place_then_read(board in arb_board(), pos in 1u8..=9, mark in arb_mark()) {
        let mut board = board;
        if board.cell(pos).is_none() {
            board.place(pos, mark).unwrap();
            prop_assert_eq!(board.cell(pos), Some(mark));
        } else {
            prop_assert!(board.place(pos, mark).is_err());
        }
    }

    /// Fewer than three cells of a mark can never be a win for it.
    #[test]
    fn prop_no_win_under_three(board in arb_board()) {
        for mark in [Mark::X, Mark::O] {
            let count = (1u8..=9)
                .filter(|&pos| board.cell(pos) == Some(mark))
                .count();
            if count < 3 {
                prop_assert!(!board.is_won_by(mark));
            }
        }
    }

    /// A full board reports full; any board with an empty cell does not.
    #[test]
    fn prop_is_full_matches_cells(board in arb_board()) {
        let occupied = (1u8..=9).filter(|&pos| board.cell(pos).is_some()).count();
        prop_assert_eq!(board.is_full(), occupied == BOARD_CELLS);
    }
}
