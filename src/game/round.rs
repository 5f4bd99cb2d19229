//! The per-game state machine.

use super::rules::{self, Outcome};
use super::types::{Board, Mark, Square};
use super::Position;
use crate::settings::GameMode;
use tracing::{debug, info, instrument};

/// A single game in progress: the board, the side to move, and the flags
/// gating input.
///
/// `player_turn` is false only during the window between a human move and
/// the automated reply, so stray input in that window is rejected. `active`
/// goes false exactly when a win or tie is detected and no further moves
/// are accepted until [`Round::reset`].
///
/// Invalid attempts are ignored rather than surfaced as errors: the caller
/// learns everything it needs from the returned [`Outcome`], and a `None`
/// means nothing changed.
#[derive(Debug, Clone)]
pub struct Round {
    board: Board,
    current: Mark,
    player_turn: bool,
    active: bool,
    mode: GameMode,
}

impl Round {
    /// Creates a fresh round: empty board, X to move, both flags set.
    #[instrument]
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            current: Mark::X,
            player_turn: true,
            active: true,
            mode,
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The marker owning the next move.
    pub fn current_mark(&self) -> Mark {
        self.current
    }

    /// False once a win or tie has been detected.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// True when human input is currently accepted.
    pub fn is_player_turn(&self) -> bool {
        self.player_turn
    }

    /// The opponent mode this round was created with.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// True when the automated player owns the next move.
    pub fn awaits_computer(&self) -> bool {
        self.mode == GameMode::VsComputer && self.active && self.current == Mark::O
    }

    /// Applies a human-initiated move.
    ///
    /// Returns `None` when the move is ignored: outside the player's turn,
    /// on an occupied square, or after the round has ended. On a continuing
    /// game in vs-computer mode the player's turn is suspended until the
    /// scheduled reply lands.
    #[instrument(skip(self), fields(mark = %self.current))]
    pub fn human_move(&mut self, pos: Position) -> Option<Outcome> {
        if !self.player_turn {
            debug!(?pos, "Ignoring input outside the player's turn");
            return None;
        }

        let outcome = self.apply(pos)?;
        if outcome == Outcome::Continue && self.mode == GameMode::VsComputer {
            self.player_turn = false;
        }
        Some(outcome)
    }

    /// Applies the automated player's move.
    ///
    /// Not gated on `player_turn`; restores it once the move lands so the
    /// human may act again.
    #[instrument(skip(self), fields(mark = %self.current))]
    pub fn computer_move(&mut self, pos: Position) -> Option<Outcome> {
        let outcome = self.apply(pos)?;
        if outcome == Outcome::Continue {
            self.player_turn = true;
        }
        Some(outcome)
    }

    /// Places the current marker and evaluates the board.
    ///
    /// On a continuing game ownership flips to the other marker; on a
    /// terminal outcome the round deactivates and `current` keeps the
    /// marker that ended it.
    fn apply(&mut self, pos: Position) -> Option<Outcome> {
        if !self.active {
            debug!(?pos, "Ignoring move on a finished round");
            return None;
        }
        if !self.board.is_empty(pos) {
            debug!(?pos, "Ignoring move on an occupied square");
            return None;
        }

        self.board.set(pos, Square::Taken(self.current));
        let outcome = rules::evaluate(&self.board);
        match outcome {
            Outcome::Continue => self.current = self.current.opponent(),
            _ => {
                info!(?outcome, "Round ended");
                self.active = false;
            }
        }
        Some(outcome)
    }

    /// Restores the opening state. The mode is preserved.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Resetting round");
        self.board = Board::new();
        self.current = Mark::X;
        self.player_turn = true;
        self.active = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternating_marks() {
        let mut round = Round::new(GameMode::TwoPlayer);
        assert_eq!(round.current_mark(), Mark::X);
        round.human_move(Position::Center);
        assert_eq!(round.current_mark(), Mark::O);
        round.human_move(Position::TopLeft);
        assert_eq!(round.current_mark(), Mark::X);
    }

    #[test]
    fn test_vs_computer_suspends_player_turn() {
        let mut round = Round::new(GameMode::VsComputer);
        round.human_move(Position::Center);
        assert!(!round.is_player_turn());
        assert!(round.awaits_computer());

        round.computer_move(Position::TopLeft);
        assert!(round.is_player_turn());
        assert!(!round.awaits_computer());
    }

    #[test]
    fn test_two_player_keeps_player_turn() {
        let mut round = Round::new(GameMode::TwoPlayer);
        round.human_move(Position::Center);
        assert!(round.is_player_turn());
        assert!(!round.awaits_computer());
    }
}
