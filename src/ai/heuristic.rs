//! Greedy rule chain for the medium difficulty.

use crate::game::rules::WIN_LINES;
use crate::game::{Board, Mark, Position};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::instrument;

/// Picks a move for `mark` by the first matching rule: complete an own
/// line, block the opponent's, take the center, take a random free corner,
/// else the first empty square.
///
/// Greedy, not globally optimal: a perfect opponent can force a tie or
/// exploit the fixed tie-break, but cannot stop rules 1-2 once they
/// trigger.
#[instrument(skip(rng))]
pub fn tactical_move<R: Rng>(board: &Board, mark: Mark, rng: &mut R) -> Option<Position> {
    if let Some(pos) = completing_move(board, mark) {
        return Some(pos);
    }
    if let Some(pos) = completing_move(board, mark.opponent()) {
        return Some(pos);
    }
    if board.is_empty(Position::Center) {
        return Some(Position::Center);
    }

    let corners: Vec<Position> = Position::CORNERS
        .iter()
        .copied()
        .filter(|pos| board.is_empty(*pos))
        .collect();
    if let Some(pos) = corners.choose(rng) {
        return Some(*pos);
    }

    board.empty_positions().first().copied()
}

/// Finds the empty square of a line where `mark` already holds the other
/// two, scanning lines in fixed order.
fn completing_move(board: &Board, mark: Mark) -> Option<Position> {
    use crate::game::Square;

    for line in WIN_LINES {
        let taken = line
            .iter()
            .filter(|pos| board.get(**pos) == Square::Taken(mark))
            .count();
        if taken == 2
            && let Some(pos) = line.iter().copied().find(|pos| board.is_empty(*pos))
        {
            return Some(pos);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Square;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn board_from(marks: &[(usize, Mark)]) -> Board {
        let mut board = Board::new();
        for (index, mark) in marks {
            board.set(Position::from_index(*index).unwrap(), Square::Taken(*mark));
        }
        board
    }

    #[test]
    fn test_win_takes_priority_over_block() {
        // X X _ / O O _ / _ _ _ where O must finish its own line at 5,
        // not block at 2.
        let board = board_from(&[
            (0, Mark::X),
            (1, Mark::X),
            (3, Mark::O),
            (4, Mark::O),
        ]);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            tactical_move(&board, Mark::O, &mut rng),
            Some(Position::MiddleRight)
        );
    }

    #[test]
    fn test_blocks_opponent() {
        // X X _ with no O threat: O blocks at 2.
        let board = board_from(&[(0, Mark::X), (1, Mark::X), (4, Mark::O)]);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            tactical_move(&board, Mark::O, &mut rng),
            Some(Position::TopRight)
        );
    }

    #[test]
    fn test_prefers_center() {
        let board = board_from(&[(0, Mark::X)]);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            tactical_move(&board, Mark::O, &mut rng),
            Some(Position::Center)
        );
    }

    #[test]
    fn test_falls_back_to_corner() {
        let board = board_from(&[(4, Mark::X)]);
        let mut rng = StdRng::seed_from_u64(1);
        let pos = tactical_move(&board, Mark::O, &mut rng).unwrap();
        assert!(Position::CORNERS.contains(&pos));
    }
}
