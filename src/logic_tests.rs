#[cfg(test)]
mod tests {
    use crate::core::{Board, Coord, Mark};
    use crate::logic::{has_three_in_a_row, outcome, winner, GameOutcome, WINNING_LINES};
    use crate::player::{MinimaxAI, PlayerController};

    fn board_from(rows: [&str; 3]) -> Board {
        let mut board = Board::new();
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                match ch {
                    'X' => board.place(Coord::new(row, col), Mark::X),
                    'O' => board.place(Coord::new(row, col), Mark::O),
                    _ => {}
                }
            }
        }
        board
    }

    #[test]
    fn test_no_winner_on_empty_board() {
        let board = Board::new();
        assert!(!has_three_in_a_row(&board, Mark::X));
        assert!(!has_three_in_a_row(&board, Mark::O));
        assert_eq!(winner(&board), None);
        assert_eq!(outcome(&board), None);
    }

    #[test]
    fn test_every_winning_line_is_detected() {
        for line in WINNING_LINES {
            let mut board = Board::new();
            for idx in line {
                board.place(Coord::new(idx / 3, idx % 3), Mark::O);
            }
            assert!(has_three_in_a_row(&board, Mark::O), "line {line:?}");
            assert!(!has_three_in_a_row(&board, Mark::X), "line {line:?}");
            assert_eq!(winner(&board), Some(Mark::O));
        }
    }

    #[test]
    fn test_two_in_a_row_is_not_a_win() {
        let board = board_from(["XX.", "OO.", "..."]);
        assert!(!has_three_in_a_row(&board, Mark::X));
        assert!(!has_three_in_a_row(&board, Mark::O));
        assert_eq!(outcome(&board), None);
    }

    #[test]
    fn test_diagonals() {
        let main_diag = board_from(["X..", ".X.", "..X"]);
        assert!(has_three_in_a_row(&main_diag, Mark::X));

        let anti_diag = board_from(["..O", ".O.", "O.."]);
        assert!(has_three_in_a_row(&anti_diag, Mark::O));
    }

    #[test]
    fn test_full_board_without_line_is_a_tie() {
        let board = board_from(["XOX", "XOO", "OXX"]);
        assert!(board.is_full());
        assert!(!has_three_in_a_row(&board, Mark::X));
        assert!(!has_three_in_a_row(&board, Mark::O));
        assert_eq!(outcome(&board), Some(GameOutcome::Tie));
    }

    #[test]
    fn test_winner_takes_precedence_over_fullness() {
        // Full board where X completed the last column on the final move.
        let board = board_from(["OOX", "XOX", "OXX"]);
        assert!(board.is_full());
        assert_eq!(outcome(&board), Some(GameOutcome::Win(Mark::X)));
    }

    // Two seeded minimax players driven by a bare loop (no rendering or
    // pacing). Whatever the result, the game must stay legal throughout
    // and terminate within nine moves.
    #[test]
    fn test_minimax_self_play_terminates_legally() {
        let x = MinimaxAI::with_seed(Mark::X, "X", 11);
        let o = MinimaxAI::with_seed(Mark::O, "O", 23);

        let mut board = Board::new();
        let mut current = Mark::X;
        let mut moves = 0;

        let result = loop {
            let legal = board.empty_cells();
            let controller: &dyn PlayerController = match current {
                Mark::X => &x,
                Mark::O => &o,
            };
            let coord = controller.choose_move(&board, &legal).unwrap();
            assert!(legal.contains(&coord), "illegal move {coord}");

            board.place(coord, current);
            moves += 1;

            if let Some(result) = outcome(&board) {
                break result;
            }
            current = current.opponent();
        };

        assert!(moves >= 5 && moves <= 9, "finished in {moves} moves");
        if let GameOutcome::Win(mark) = result {
            assert!(has_three_in_a_row(&board, mark));
        }
    }
}
