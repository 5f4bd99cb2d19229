//! Draw detection logic.

use super::super::Board;
use super::win::check_winner;
use tracing::instrument;

/// Checks if the board is a draw: full with no winner.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::super::super::{Mark, Position, Square};
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_empty_board_not_draw() {
        assert!(!is_draw(&Board::new()));
    }

    #[test]
    fn test_draw_detection() {
        let mut board = Board::new();
        // X O X / O X X / O X O
        let layout = [
            Mark::X,
            Mark::O,
            Mark::X,
            Mark::O,
            Mark::X,
            Mark::X,
            Mark::O,
            Mark::X,
            Mark::O,
        ];
        for (pos, mark) in Position::iter().zip(layout) {
            board.set(pos, Square::Taken(mark));
        }
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Taken(Mark::X));
        board.set(Position::TopCenter, Square::Taken(Mark::X));
        board.set(Position::TopRight, Square::Taken(Mark::X));
        assert!(!is_draw(&board));
    }
}
