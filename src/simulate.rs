//! Headless policy-vs-policy simulation.

use crate::ai::{self, Difficulty};
use crate::game::{Board, Mark, Outcome, Square, evaluate};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, instrument};

/// Win/tie tallies from a batch of simulated games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Games ending with a full board and no line.
    pub ties: u32,
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X wins: {}, O wins: {}, ties: {}",
            self.x_wins, self.o_wins, self.ties
        )
    }
}

/// Plays `games` rounds of `x_policy` against `o_policy` and tallies the
/// outcomes. X always opens.
#[instrument(skip(rng))]
pub fn run<R: Rng>(
    x_policy: Difficulty,
    o_policy: Difficulty,
    games: u32,
    rng: &mut R,
) -> Tally {
    let mut tally = Tally::default();

    for game in 0..games {
        let outcome = play_one(x_policy, o_policy, rng);
        debug!(game, ?outcome, "Simulated game finished");
        match outcome {
            Outcome::XWon => tally.x_wins += 1,
            Outcome::OWon => tally.o_wins += 1,
            Outcome::Tie => tally.ties += 1,
            Outcome::Continue => unreachable!("game loop exits only on terminal outcomes"),
        }
    }

    tally
}

fn play_one<R: Rng>(x_policy: Difficulty, o_policy: Difficulty, rng: &mut R) -> Outcome {
    let mut board = Board::new();
    let mut mark = Mark::X;

    loop {
        let policy = match mark {
            Mark::X => x_policy,
            Mark::O => o_policy,
        };
        let pos = ai::select_move(&board, mark, policy, rng)
            .expect("an active game always has an empty square");
        board.set(pos, Square::Taken(mark));

        let outcome = evaluate(&board);
        if outcome.is_terminal() {
            return outcome;
        }
        mark = mark.opponent();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_tally_counts_every_game() {
        let mut rng = StdRng::seed_from_u64(11);
        let tally = run(Difficulty::Easy, Difficulty::Easy, 50, &mut rng);
        assert_eq!(tally.x_wins + tally.o_wins + tally.ties, 50);
    }

    #[test]
    fn test_hard_mirror_always_ties() {
        let mut rng = StdRng::seed_from_u64(11);
        let tally = run(Difficulty::Hard, Difficulty::Hard, 5, &mut rng);
        assert_eq!(tally.ties, 5);
    }
}
