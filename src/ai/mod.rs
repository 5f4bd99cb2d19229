//! Move selection policies for the automated player.

pub mod heuristic;
pub mod minimax;

pub use minimax::Evaluation;

use crate::game::{Board, Mark, Position};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Difficulty policy for the automated opponent.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum Difficulty {
    /// Uniform-random empty square.
    Easy,
    /// Greedy rule chain: win, block, center, corner, first empty.
    Medium,
    /// Exhaustive minimax; never loses.
    #[default]
    Hard,
}

impl Difficulty {
    /// Display label for this difficulty.
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Advances to the next difficulty, wrapping around.
    pub fn cycle(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Selects the next move for `mark` under the given policy.
///
/// Returns `None` when no empty square remains; callers guard on the round
/// being active, so this is a degenerate case rather than an error.
pub fn select_move<R: Rng>(
    board: &Board,
    mark: Mark,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Position> {
    let chosen = match difficulty {
        Difficulty::Easy => board.empty_positions().choose(rng).copied(),
        Difficulty::Medium => heuristic::tactical_move(board, mark, rng),
        Difficulty::Hard => {
            let mut scratch = board.clone();
            minimax::best_move(&mut scratch, mark).position
        }
    };
    debug!(%mark, %difficulty, ?chosen, "Selected move");
    chosen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Square;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_easy_degenerate_single_cell() {
        // Fill everything but one square; every draw of the policy must
        // return that square.
        let mut board = Board::new();
        let marks = [
            Mark::X,
            Mark::O,
            Mark::X,
            Mark::O,
            Mark::X,
            Mark::O,
            Mark::O,
            Mark::X,
        ];
        for (i, mark) in marks.into_iter().enumerate() {
            board.set(Position::from_index(i).unwrap(), Square::Taken(mark));
        }

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert_eq!(
                select_move(&board, Mark::X, Difficulty::Easy, &mut rng),
                Some(Position::BottomRight)
            );
        }
    }

    #[test]
    fn test_full_board_selects_nothing() {
        let mut board = Board::new();
        for (i, pos) in board.empty_positions().into_iter().enumerate() {
            let mark = if i % 2 == 0 { Mark::X } else { Mark::O };
            board.set(pos, Square::Taken(mark));
        }
        let mut rng = StdRng::seed_from_u64(7);
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(select_move(&board, Mark::O, difficulty, &mut rng), None);
        }
    }
}
