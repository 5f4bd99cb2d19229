//! Exhaustive game-tree search for the hard difficulty.
//!
//! The tree is at most nine plies deep, so there is no pruning, no depth
//! limit, and no memoization. Scores are not depth-adjusted: among
//! equally-scored terminal outcomes the search has no preference for a
//! faster win or a slower loss.

use crate::game::rules::check_winner;
use crate::game::{Board, Mark, Position, Square};
use strum::IntoEnumIterator;

/// Score of a terminal board won by X.
const X_WIN: i32 = -10;
/// Score of a terminal board won by O.
const O_WIN: i32 = 10;

/// A scored subtree: the best reachable score and the move achieving it.
///
/// `position` is `None` on terminal boards, where there is no move to make.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    /// Minimax score of the board for the side to move.
    pub score: i32,
    /// The chosen move, if the board is not terminal.
    pub position: Option<Position>,
}

/// Searches the full game tree and returns the best move for `mark`.
///
/// O maximizes and X minimizes; ties are broken by the first occurrence in
/// index order. The board is used as scratch space during the search but is
/// restored before returning.
pub fn best_move(board: &mut Board, mark: Mark) -> Evaluation {
    if let Some(winner) = check_winner(board) {
        let score = match winner {
            Mark::X => X_WIN,
            Mark::O => O_WIN,
        };
        return Evaluation {
            score,
            position: None,
        };
    }
    if board.is_full() {
        return Evaluation {
            score: 0,
            position: None,
        };
    }

    let mut best: Option<Evaluation> = None;
    for pos in Position::iter() {
        if !board.is_empty(pos) {
            continue;
        }

        board.set(pos, Square::Taken(mark));
        let reply = best_move(board, mark.opponent());
        board.set(pos, Square::Empty);

        let candidate = Evaluation {
            score: reply.score,
            position: Some(pos),
        };
        best = Some(match best {
            None => candidate,
            Some(current) => {
                let improves = match mark {
                    Mark::O => candidate.score > current.score,
                    Mark::X => candidate.score < current.score,
                };
                if improves { candidate } else { current }
            }
        });
    }

    best.expect("non-terminal board has at least one empty square")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_takes_immediate_win() {
        let mut board = Board::new();
        board.set(Position::MiddleLeft, Square::Taken(Mark::O));
        board.set(Position::Center, Square::Taken(Mark::O));
        board.set(Position::TopLeft, Square::Taken(Mark::X));
        board.set(Position::TopCenter, Square::Taken(Mark::X));

        let result = best_move(&mut board, Mark::O);
        assert_eq!(result.position, Some(Position::MiddleRight));
        assert_eq!(result.score, O_WIN);
    }

    #[test]
    fn test_board_restored_after_search() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Taken(Mark::X));
        let snapshot = board.clone();

        best_move(&mut board, Mark::O);
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_minimizes_for_x() {
        // O threatens 6-7-8; X to move must block at 8.
        let mut board = Board::new();
        board.set(Position::BottomLeft, Square::Taken(Mark::O));
        board.set(Position::BottomCenter, Square::Taken(Mark::O));
        board.set(Position::TopLeft, Square::Taken(Mark::X));
        board.set(Position::TopCenter, Square::Taken(Mark::X));
        // X also threatens 0-1-2, so completing at 2 wins outright.
        let result = best_move(&mut board, Mark::X);
        assert_eq!(result.position, Some(Position::TopRight));
        assert_eq!(result.score, X_WIN);
    }
}
