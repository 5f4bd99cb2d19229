//! Rules for scoring a board: win lines, draw detection, and outcome
//! evaluation.
//!
//! These are pure functions over [`Board`] so the automated player and the
//! round state machine share one source of truth.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{WIN_LINES, check_winner};

use super::types::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The result of evaluating a board after a move.
///
/// Derived from the board on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Play continues.
    Continue,
    /// X completed a line.
    XWon,
    /// O completed a line.
    OWon,
    /// The board is full with no line.
    Tie,
}

impl Outcome {
    /// The winning marker, if any.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::XWon => Some(Mark::X),
            Outcome::OWon => Some(Mark::O),
            _ => None,
        }
    }

    /// True when the game is over.
    pub fn is_terminal(self) -> bool {
        self != Outcome::Continue
    }
}

/// Evaluates the board.
///
/// Scans the eight win lines in fixed order and short-circuits on the first
/// complete one; a legal board can match at most one line. A full board with
/// no line is a tie.
#[instrument]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = win::check_winner(board) {
        return match winner {
            Mark::X => Outcome::XWon,
            Mark::O => Outcome::OWon,
        };
    }

    if board.is_full() {
        return Outcome::Tie;
    }

    Outcome::Continue
}
